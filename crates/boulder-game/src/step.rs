/// What a single player step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum StepOutcome {
    /// The player moved onto an empty cell.
    #[display("walked")]
    Walked,
    /// The player pushed a boulder and took its place.
    #[display("pushed")]
    Pushed,
    /// The player stepped past the goal edge and left the board.
    #[display("departed")]
    Departed,
    /// The step was blocked and nothing changed.
    #[display("rejected")]
    Rejected,
}
