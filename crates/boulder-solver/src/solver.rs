use std::{
    collections::{HashSet, VecDeque},
    time::Duration,
};

use boulder_core::{Direction, Grid, Move};

use crate::{Deadline, Route, push, walk};

/// Search limits for [`PushSolver`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use boulder_solver::SolverConfig;
///
/// let config = SolverConfig::default().with_time_budget(Duration::from_millis(500));
/// assert_eq!(config.time_budget(), Duration::from_millis(500));
/// assert_eq!(config.max_solutions(), SolverConfig::DEFAULT_MAX_SOLUTIONS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    time_budget: Duration,
    max_solutions: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_budget: Self::DEFAULT_TIME_BUDGET,
            max_solutions: Self::DEFAULT_MAX_SOLUTIONS,
        }
    }
}

impl SolverConfig {
    /// Wall-clock budget of a single solve call.
    pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(5000);

    /// Number of solutions after which the search stops once exceeded.
    pub const DEFAULT_MAX_SOLUTIONS: usize = 5;

    /// Returns a copy with a different time budget.
    #[must_use]
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    /// Returns a copy with a different solution cap.
    ///
    /// The search stops as soon as it has found more than `max_solutions`
    /// solutions.
    #[must_use]
    pub fn with_max_solutions(mut self, max_solutions: usize) -> Self {
        self.max_solutions = max_solutions;
        self
    }

    /// Returns the wall-clock budget of a single solve call.
    #[must_use]
    pub fn time_budget(&self) -> Duration {
        self.time_budget
    }

    /// Returns the solution cap.
    #[must_use]
    pub fn max_solutions(&self) -> usize {
        self.max_solutions
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum StopReason {
    /// The search has not run yet.
    #[default]
    #[display("not started")]
    NotStarted,
    /// Every reachable layout was explored.
    #[display("queue exhausted")]
    QueueExhausted,
    /// More solutions than the configured cap were found.
    #[display("solution limit")]
    SolutionLimit,
    /// The time budget ran out.
    #[display("time budget")]
    TimeBudget,
}

/// Statistics collected while solving.
///
/// Counters accumulate across calls to
/// [`PushSolver::solve_with_stats`] with the same stats object; the stop
/// reason reflects the latest call.
#[derive(Debug, Clone, Default, derive_more::Display)]
#[display(
    "popped={popped_routes} expanded={expanded_routes} solutions={solutions} stop={stop_reason}"
)]
pub struct SolverStats {
    popped_routes: usize,
    expanded_routes: usize,
    solutions: usize,
    stop_reason: StopReason,
}

impl SolverStats {
    /// Returns how many routes were taken off the queue.
    #[must_use]
    pub fn popped_routes(&self) -> usize {
        self.popped_routes
    }

    /// Returns how many routes led to a layout not seen before and were
    /// explored.
    #[must_use]
    pub fn expanded_routes(&self) -> usize {
        self.expanded_routes
    }

    /// Returns how many solved routes were found.
    #[must_use]
    pub fn solutions(&self) -> usize {
        self.solutions
    }

    /// Returns why the latest search stopped.
    #[must_use]
    pub fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }

    /// Returns `true` if the latest search was cut short by its time budget.
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.stop_reason.is_time_budget()
    }
}

/// A push sequence that frees the way to the goal edge.
///
/// An empty sequence means the player can walk out without pushing anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    moves: Vec<Move>,
}

impl Solution {
    /// Wraps a push sequence.
    #[must_use]
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// Returns the pushes in order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of pushes.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Consumes the solution and returns its pushes.
    #[must_use]
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }
}

/// A bounded breadth-first solver over push states.
///
/// The search expands routes in push-count order. For each route it
/// flood-fills the cells the player can walk to, records the route as solved
/// if the player can leave across the goal edge, and queues one new route per
/// legal push from any reachable cell.
///
/// Visited states are keyed by [layout hash](boulder_core::hash) alone: once a
/// boulder layout has been expanded, later routes reaching the same layout are
/// dropped even if the player stands elsewhere. Together with the solution cap
/// and the time budget this keeps the search bounded, at the price of not
/// always returning the shortest solution.
///
/// The solver holds only its configuration. Every call builds its own queue and
/// visited set, so one solver can be shared between threads.
///
/// # Examples
///
/// ```
/// use boulder_core::{Direction, Grid, Move, Position};
/// use boulder_solver::PushSolver;
///
/// let grid: Grid = "
///     #.#
///     .#.
///     ...
/// "
/// .parse()?;
/// let solver = PushSolver::new();
/// let solution = solver.solve(&grid).expect("solvable");
/// assert_eq!(
///     solution.moves(),
///     [Move::new(Position::new(1, 1), Direction::Right)]
/// );
///
/// let walled: Grid = "
///     ..
///     ###
///     ..
/// "
/// .parse()?;
/// assert!(solver.solve(&walled).is_none());
/// # Ok::<(), boulder_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PushSolver {
    config: SolverConfig,
}

impl PushSolver {
    /// Creates a solver with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with custom limits.
    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver's limits.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Creates an empty statistics object.
    #[must_use]
    pub fn new_stats(&self) -> SolverStats {
        SolverStats::default()
    }

    /// Solves `grid` with the player at its start position.
    ///
    /// Returns `None` if no solution was found, either because none exists or
    /// because the time budget ran out first.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> Option<Solution> {
        let mut stats = self.new_stats();
        self.solve_with_stats(grid, &mut stats)
    }

    /// Solves `grid`, recording statistics into `stats`.
    ///
    /// See [`solve`](Self::solve).
    pub fn solve_with_stats(&self, grid: &Grid, stats: &mut SolverStats) -> Option<Solution> {
        let deadline = Deadline::after(self.config.time_budget);
        let mut queue = VecDeque::from([Route::new(grid.clone())]);
        let mut visited = HashSet::new();
        let mut solved: Vec<Route> = Vec::new();

        stats.stop_reason = StopReason::QueueExhausted;
        while !queue.is_empty() {
            if deadline.is_expired() {
                stats.stop_reason = StopReason::TimeBudget;
                if solved.is_empty() {
                    log::debug!(
                        "solve {}x{}: no solution within {:?} ({stats})",
                        grid.width(),
                        grid.height(),
                        self.config.time_budget
                    );
                    return None;
                }
                break;
            }
            if solved.len() > self.config.max_solutions {
                stats.stop_reason = StopReason::SolutionLimit;
                break;
            }

            let Some(route) = queue.pop_front() else {
                break;
            };
            stats.popped_routes += 1;
            if !visited.insert(route.grid().layout_hash()) {
                continue;
            }
            stats.expanded_routes += 1;

            if route.player().row() == 0 {
                stats.solutions += 1;
                solved.push(route);
                continue;
            }

            let reach = walk::flood(route.grid(), route.player());
            for &cell in &reach.cells {
                for dir in Direction::ALL {
                    let block = cell.step(dir);
                    if !push::can_push(route.grid(), block, dir) {
                        continue;
                    }
                    let mut next = route.grid().clone();
                    let Some(mv) = push::push_block(&mut next, block, dir) else {
                        continue;
                    };
                    if !visited.contains(&next.layout_hash()) {
                        queue.push_back(route.extend(next, mv));
                    }
                }
            }
            if reach.exits {
                stats.solutions += 1;
                solved.push(route);
            }
        }

        // first minimum wins, so ties go to the earliest solution found
        let best = solved.into_iter().min_by_key(Route::move_count);
        log::debug!(
            "solve {}x{}: {} ({stats})",
            grid.width(),
            grid.height(),
            best.as_ref()
                .map_or_else(|| "unsolvable".to_owned(), |r| format!("{} pushes", r.move_count()))
        );
        best.map(|route| Solution::new(route.into_moves()))
    }
}
