use std::time::{Duration, Instant};

/// A wall-clock budget measured from the moment it is created.
///
/// The solver and the refiner poll a deadline at fixed points (each queue pop,
/// each generation attempt, each hardening step) instead of being interrupted.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use boulder_solver::Deadline;
///
/// let deadline = Deadline::after(Duration::from_secs(60));
/// assert!(!deadline.is_expired());
/// assert!(Deadline::after(Duration::ZERO).is_expired());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// Starts a budget of `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// Returns the budget this deadline was created with.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Returns the time spent since the deadline was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns the time left, or zero once expired.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.elapsed())
    }

    /// Returns `true` once the whole budget has been used.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_is_expired() {
        let deadline = Deadline::after(Duration::ZERO);
        assert!(deadline.is_expired());
        assert_eq!(deadline.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_long_budget_is_not_expired() {
        let deadline = Deadline::after(Duration::from_secs(3600));
        assert!(!deadline.is_expired());
        assert!(deadline.remaining() <= deadline.budget());
        assert!(deadline.remaining() > Duration::from_secs(3500));
    }
}
