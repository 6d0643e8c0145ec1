//! Cell contents of a board.

/// The contents of a single board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Cell {
    /// A free cell the player can walk through.
    #[default]
    #[display(".")]
    Empty,
    /// A cell occupied by a boulder.
    #[display("#")]
    Block,
}

impl Cell {
    /// Returns the numeric value used by layout hashing (`0` or `1`).
    ///
    /// # Examples
    ///
    /// ```
    /// use boulder_core::Cell;
    ///
    /// assert_eq!(Cell::Empty.value(), 0);
    /// assert_eq!(Cell::Block.value(), 1);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Block => 1,
        }
    }

    /// Returns `true` if the cell holds a boulder.
    #[must_use]
    pub const fn is_block(self) -> bool {
        matches!(self, Self::Block)
    }

    /// Returns `true` if the cell is free.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Parses a cell from its text form.
    ///
    /// `#` and `1` are boulders, `.` and `0` are empty cells.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' | '1' => Some(Self::Block),
            '.' | '0' => Some(Self::Empty),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for cell in [Cell::Empty, Cell::Block] {
            let ch = cell.to_string().chars().next().unwrap();
            assert_eq!(Cell::from_char(ch), Some(cell));
        }
        assert_eq!(Cell::from_char('1'), Some(Cell::Block));
        assert_eq!(Cell::from_char('0'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('x'), None);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert!(!Cell::default().is_block());
    }
}
