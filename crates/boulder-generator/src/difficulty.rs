/// Error returned when a difficulty is outside `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("difficulty must be between {} and {}, got {value}", Difficulty::MIN.value(), Difficulty::MAX.value())]
pub struct DifficultyError {
    value: u8,
}

/// Requested puzzle difficulty, from 1 (easiest) to 10.
///
/// Difficulty steers two things: the share of cells filled with boulders, and
/// the minimum number of pushes an accepted board must need.
///
/// # Examples
///
/// ```
/// use boulder_generator::Difficulty;
///
/// let difficulty = Difficulty::new(5)?;
/// assert_eq!(difficulty.value(), 5);
/// assert_eq!(difficulty.min_move_count(), 3);
/// assert_eq!(difficulty.easier(), Some(Difficulty::new(4)?));
/// assert_eq!(Difficulty::MIN.easier(), None);
/// assert!(Difficulty::new(11).is_err());
/// # Ok::<(), boulder_generator::DifficultyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{_0}")]
pub struct Difficulty(u8);

impl Difficulty {
    /// The easiest difficulty.
    pub const MIN: Self = Self(1);
    /// The hardest difficulty.
    pub const MAX: Self = Self(10);

    /// Creates a difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`DifficultyError`] if `value` is outside `1..=10`.
    pub const fn new(value: u8) -> Result<Self, DifficultyError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            return Err(DifficultyError { value });
        }
        Ok(Self(value))
    }

    /// Returns the numeric difficulty.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the next easier difficulty, or `None` at [`MIN`](Self::MIN).
    #[must_use]
    pub const fn easier(self) -> Option<Self> {
        if self.0 > Self::MIN.0 {
            Some(Self(self.0 - 1))
        } else {
            None
        }
    }

    /// Returns the fewest pushes an accepted board must need.
    ///
    /// This is the difficulty minus two. Boards that need no push at all are
    /// rejected regardless.
    #[must_use]
    pub const fn min_move_count(self) -> usize {
        self.0.saturating_sub(2) as usize
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(3)
    }
}
