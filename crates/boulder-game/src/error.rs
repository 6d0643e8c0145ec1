/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The player has already left the board.
    #[display("the player has already left the board")]
    AlreadySolved,
}
