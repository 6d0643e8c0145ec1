use boulder_core::{Grid, Move, Position};

/// A candidate path explored by the solver.
///
/// A route owns the grid it leads to, the player's position in that grid and
/// the pushes taken so far. Extending a route never touches the parent's
/// grid, so sibling branches do not share state.
///
/// Routes compare equal when they lead to the same boulder layout, whatever
/// the player position or history. Their "simplicity" is
/// [`move_count`](Self::move_count), which callers use as a sort key.
#[derive(Debug, Clone)]
pub struct Route {
    grid: Grid,
    player: Position,
    moves: Vec<Move>,
}

impl Route {
    /// Creates the initial route: no pushes, player at the start position.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let player = grid.start_position();
        Self {
            grid,
            player,
            moves: Vec::new(),
        }
    }

    /// Returns the grid this route leads to.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player's position in [`grid`](Self::grid).
    #[must_use]
    pub fn player(&self) -> Position {
        self.player
    }

    /// Returns the pushes taken so far.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of pushes taken so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns a new route that continues this one with `push`.
    ///
    /// `grid` is the layout after the push. The player ends on the boulder's
    /// old cell.
    #[must_use]
    pub fn extend(&self, grid: Grid, push: Move) -> Self {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(push);
        Self {
            grid,
            player: push.block(),
            moves,
        }
    }

    /// Consumes the route and returns its pushes.
    #[must_use]
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Route {}
