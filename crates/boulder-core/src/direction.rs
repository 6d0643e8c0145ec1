//! Movement directions.

/// One of the four directions the player can step or push in.
///
/// Each direction has a stable numeric code (`1`-`4`), which is how push
/// records have always been tagged.
///
/// # Examples
///
/// ```
/// use boulder_core::Direction;
///
/// assert_eq!(Direction::Up.code(), 1);
/// assert_eq!(Direction::from_code(4), Some(Direction::Right));
/// assert_eq!(Direction::Left.opposite(), Direction::Right);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[repr(u8)]
pub enum Direction {
    /// Towards row 0, the goal edge.
    Up = 1,
    /// Towards the start edge.
    Down = 2,
    /// Towards column 0.
    Left = 3,
    /// Towards the last column.
    Right = 4,
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the numeric code of this direction (`1`-`4`).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Converts a numeric code back into a direction.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Up),
            2 => Some(Self::Down),
            3 => Some(Self::Left),
            4 => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the `(row, column)` delta of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Returns the reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns `true` for [`Up`](Self::Up) and [`Down`](Self::Down).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for (i, dir) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(dir.code()), i + 1);
            assert_eq!(Direction::from_code(dir.code()), Some(dir));
        }
        assert_eq!(Direction::from_code(0), None);
        assert_eq!(Direction::from_code(5), None);
    }

    #[test]
    fn test_opposite_cancels_delta() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.is_vertical(), dir.opposite().is_vertical());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Up.to_string(), "Up");
        assert_eq!(Direction::Right.to_string(), "Right");
    }
}
