//! The board layout.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, Position, hash};

/// Error returned when a grid would have an unusable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridShapeError {
    /// Width or height is zero.
    #[display("grid must have at least one row and one column, got {width}x{height}")]
    Empty {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A dimension does not fit a signed coordinate, or the cell count
    /// exceeds [`Grid::MAX_AREA`].
    #[display("grid dimensions {width}x{height} are too large")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}

/// Error returned when parsing a grid from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The text contains no rows.
    #[display("grid text contains no rows")]
    NoRows,
    /// A row has a different number of cells than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found in the row.
        found: usize,
        /// Number of cells in the first row.
        expected: usize,
    },
    /// A character is not a known cell symbol.
    #[display("invalid cell character {ch:?} in row {row}")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// The offending character.
        ch: char,
    },
    /// The parsed rows do not form a usable grid.
    #[display("{_0}")]
    Shape(#[error(source)] GridShapeError),
}

/// A rectangular board of [`Cell`]s indexed by `[row][column]`.
///
/// Row 0 is the goal edge; the last row is the start edge and the player
/// always starts at its first column. A grid holds boulders only. The player
/// position lives beside it, so grid equality, hashing and
/// [`layout_hash`](Self::layout_hash) depend on the boulder layout alone.
///
/// Cloning a grid copies the whole cell matrix, so a clone can be mutated
/// without affecting the original.
///
/// # Text format
///
/// One row per line, `#` for a boulder and `.` for an empty cell. Whitespace
/// within a line and blank lines are ignored.
///
/// ```
/// use boulder_core::{Cell, Grid, Position};
///
/// let grid: Grid = "
///     .#.
///     ###.
///     ...
/// "
/// .parse()?;
/// assert_eq!((grid.width(), grid.height()), (3, 3));
/// assert_eq!(grid[Position::new(0, 1)], Cell::Block);
/// assert_eq!(grid.start_position(), Position::new(2, 0));
/// assert_eq!(grid.block_count(), 3);
/// # Ok::<(), boulder_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Largest number of cells a grid may have.
    pub const MAX_AREA: usize = 1 << 20;

    /// Creates an all-empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridShapeError`] if either dimension is zero, does not fit
    /// in a signed 32-bit coordinate, or the grid would have more than
    /// [`MAX_AREA`](Self::MAX_AREA) cells.
    pub fn new(width: usize, height: usize) -> Result<Self, GridShapeError> {
        if width == 0 || height == 0 {
            return Err(GridShapeError::Empty { width, height });
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(GridShapeError::TooLarge { width, height });
        }
        let area = width
            .checked_mul(height)
            .filter(|&area| area <= Self::MAX_AREA)
            .ok_or(GridShapeError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; area],
        })
    }

    /// Builds a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError::NoRows`] for an empty slice,
    /// [`GridParseError::RaggedRow`] if the rows differ in length, and
    /// [`GridParseError::Shape`] if the rows are empty.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridParseError>
    where
        R: AsRef<[Cell]>,
    {
        let first = rows.first().ok_or(GridParseError::NoRows)?;
        let width = first.as_ref().len();
        let mut grid = Self::new(width, rows.len()).map_err(GridParseError::Shape)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridParseError::RaggedRow {
                    row: i,
                    found: row.len(),
                    expected: width,
                });
            }
            grid.cells[i * width..(i + 1) * width].copy_from_slice(row);
        }
        Ok(grid)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Returns the index of the start row (the last row).
    #[must_use]
    pub fn start_row(&self) -> usize {
        self.height - 1
    }

    /// Returns where the player starts: the first column of the last row.
    #[must_use]
    pub fn start_position(&self) -> Position {
        self.position_at(self.start_row() * self.width)
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// Returns the cell at `pos`, or `None` when `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Returns `true` if `pos` is on the board and free.
    #[must_use]
    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_empty)
    }

    /// Returns `true` if `pos` is on the board and holds a boulder.
    #[must_use]
    pub fn is_block(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_block)
    }

    /// Returns `true` if `pos` is on the goal row or the start row.
    #[must_use]
    pub fn is_edge_row(&self, pos: Position) -> bool {
        pos.row() == 0 || usize::try_from(pos.row()).is_ok_and(|row| row == self.start_row())
    }

    /// Sets the cell at `pos` and returns the previous contents.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Cell {
        let Some(i) = self.index_of(pos) else {
            panic!("position {pos} is outside a {}x{} grid", self.width, self.height);
        };
        std::mem::replace(&mut self.cells[i], cell)
    }

    /// Iterates over the rows from the goal row to the start row.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(|i| self.position_at(i))
    }

    /// Returns the number of boulders on the board.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_block()).count()
    }

    /// Returns the layout hash of this grid.
    ///
    /// See [`hash::layout_hash`].
    #[must_use]
    pub fn layout_hash(&self) -> u64 {
        hash::layout_hash(self)
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row()).ok()?;
        let col = usize::try_from(pos.col()).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn position_at(&self, index: usize) -> Position {
        // dimensions are checked to fit i32 on construction
        Position::new((index / self.width) as i32, (index % self.width) as i32)
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        let Some(i) = self.index_of(pos) else {
            panic!("position {pos} is outside a {}x{} grid", self.width, self.height);
        };
        &self.cells[i]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                Display::fmt(cell, f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| line.split_whitespace().collect::<String>())
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .map(|ch| Cell::from_char(ch).ok_or(GridParseError::InvalidCell { row, ch }))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(&rows)
    }
}
