//! Grid pathfinding: connected-maze generation and iterative-deepening
//! depth-first search (IDDFS) on 0/1 grids
//!
//! A [`Grid`] is a rectangular matrix of passable/blocked cells. Grids come
//! from [`maze_generator::MazeGenerator`], from [`Grid::parse_digits`], or
//! from an external editor through [`Grid::accept_edit`]. [`Grid::solve`]
//! runs IDDFS between two cells and returns a shortest 4-connected simple
//! path, or reports that none exists within the depth cap.
//!
//! # Examples
//! ## Solving an edited grid
//! ```
//! use maze_iddfs::{Cell, Grid};
//!
//! let digits = "
//! 00010
//! 01010
//! 01010
//! 01000";
//! let mut grid = Grid::parse_digits(digits.trim()).unwrap();
//! let start = Cell::new(0, 0);
//! let goal = Cell::new(3, 4);
//! grid.force_passable(start).unwrap();
//! grid.force_passable(goal).unwrap();
//!
//! let result = grid.solve(start, goal, 20).unwrap();
//! result.print_report();
//! assert_eq!(result.depth_used, 7);
//! ```
//!
//! ## Generating a grid
//! ```
//! use maze_iddfs::maze_generator::MazeGenerator;
//!
//! let mut generator = MazeGenerator::new(Some(13));
//! let grid = generator.generate(8, 8, 0.3).unwrap();
//! println!("{grid}");
//! ```

pub mod maze_generator;

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for malformed grids, coordinates, and generator inputs.
///
/// An unsolvable maze is not an error: [`Grid::solve`] reports it through
/// [`SolveResult::path`] being `None`.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be at least 1x1 (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
    OutOfBoundsCell {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("wall probability must be within [0, 1] (got {0})")]
    InvalidWallProbability(f64),
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("edited grid is {actual_rows}x{actual_cols}, expected {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
    #[error("unexpected character `{character}` at row {row}, col {col}")]
    UnexpectedCharacter {
        character: char,
        row: usize,
        col: usize,
    },
    #[error("cell state must be 0 or 1 (got {0})")]
    InvalidCellState(u8),
}

/// Location in the grid, zero-indexed `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Binary state of one cell.
///
/// The external representation is `0` for passable, `1` for blocked, both
/// in the digit text format and in serialized form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CellState {
    Passable,
    Blocked,
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> u8 {
        match state {
            CellState::Passable => 0,
            CellState::Blocked => 1,
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, GridError> {
        match value {
            0 => Ok(CellState::Passable),
            1 => Ok(CellState::Blocked),
            _ => Err(GridError::InvalidCellState(value)),
        }
    }
}

/// Rectangular passable/blocked grid
///
/// Dimensions are fixed for the lifetime of the value. Cell states may be
/// edited between solves; one solve call treats the grid as immutable input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cell states, `rows * cols` entries
    cells: Vec<CellState>,
}

/// Outcome of one solve call
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolveResult {
    /// Cells from start to goal inclusive, or `None` when no path exists
    /// within the depth cap
    pub path: Option<Vec<Cell>>,
    /// Depth limit of the first successful iteration, or the exhausted cap
    pub depth_used: usize,
}

impl Grid {
    /// Neighbor enumeration order for the solver: down, up, right, left.
    ///
    /// The order is the tie-break between equal-length paths, so it is part
    /// of the solver's observable behavior.
    const NEIGHBOR_ORDER: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

    /// Create a grid with every cell in the given state.
    pub fn filled(rows: usize, cols: usize, state: CellState) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![state; rows * cols],
        })
    }

    /// Create a fully passable grid, the usual blank slate for manual editing.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::filled(rows, cols, CellState::Passable)
    }

    /// Parse a grid from lines of `0` (passable) and `1` (blocked) digits.
    ///
    /// Returns an error on empty input, rows of unequal length, or any other
    /// character.
    ///
    /// # Examples
    /// ```
    /// use maze_iddfs::Grid;
    ///
    /// let grid = Grid::parse_digits("010\n010\n000").unwrap();
    /// assert_eq!(grid.rows(), 3);
    /// assert_eq!(grid.to_string(), "010\n010\n000");
    /// ```
    pub fn parse_digits(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().collect();
        let rows = lines.len();
        let cols = lines.first().map(|line| line.chars().count()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            let actual = line.chars().count();
            if actual != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    actual,
                });
            }
            for (col, character) in line.chars().enumerate() {
                cells.push(match character {
                    '0' => CellState::Passable,
                    '1' => CellState::Blocked,
                    _ => {
                        return Err(GridError::UnexpectedCharacter {
                            character,
                            row,
                            col,
                        })
                    }
                });
            }
        }
        Ok(Grid { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// State of a cell, or `None` when out of bounds.
    pub fn state(&self, cell: Cell) -> Option<CellState> {
        self.contains(cell).then(|| self.cells[self.index(cell)])
    }

    /// Whether a cell is in bounds and passable.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.state(cell) == Some(CellState::Passable)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Set the state of one cell.
    pub fn set_state(&mut self, cell: Cell, state: CellState) -> Result<(), GridError> {
        self.require_in_bounds(cell)?;
        let index = self.index(cell);
        self.cells[index] = state;
        Ok(())
    }

    /// Mark a cell passable, overriding any blocked marking.
    ///
    /// Applied to start and goal before a solve so that editing input can
    /// never wall off the endpoints.
    pub fn force_passable(&mut self, cell: Cell) -> Result<(), GridError> {
        self.set_state(cell, CellState::Passable)
    }

    /// Snapshot of cell states as a 2D array of 0 (passable) / 1 (blocked),
    /// the read side of the external editing contract.
    pub fn cells(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|state| u8::from(*state)).collect())
            .collect()
    }

    /// Accept an externally edited 2D 0/1 array of equal dimensions, then
    /// re-force `start` and `goal` passable.
    ///
    /// All input is validated before any mutation; a failed call leaves the
    /// grid untouched.
    pub fn accept_edit(
        &mut self,
        cells: &[Vec<u8>],
        start: Cell,
        goal: Cell,
    ) -> Result<(), GridError> {
        self.require_in_bounds(start)?;
        self.require_in_bounds(goal)?;
        if cells.len() != self.rows || cells.iter().any(|row| row.len() != self.cols) {
            return Err(GridError::DimensionMismatch {
                rows: self.rows,
                cols: self.cols,
                actual_rows: cells.len(),
                actual_cols: cells.first().map(Vec::len).unwrap_or(0),
            });
        }

        let mut states = Vec::with_capacity(self.rows * self.cols);
        for value in cells.iter().flatten() {
            states.push(CellState::try_from(*value)?);
        }

        self.cells = states;
        self.force_passable(start)?;
        self.force_passable(goal)?;
        Ok(())
    }

    /// Find a shortest simple path from `start` to `goal` with IDDFS.
    ///
    /// Runs depth-limited searches with limits `0..=max_depth` and returns
    /// on the first success, so the accepted path has minimal length under
    /// 4-connectivity. `max_depth` is conventionally `rows * cols`, which no
    /// simple path can exceed. Exhausting every depth is a normal outcome
    /// reported through [`SolveResult::path`] being `None`, not an error.
    ///
    /// # Examples
    /// ```
    /// use maze_iddfs::{Cell, Grid};
    ///
    /// let grid = Grid::parse_digits("000\n110\n000").unwrap();
    /// let result = grid.solve(Cell::new(0, 0), Cell::new(2, 0), 9).unwrap();
    /// assert_eq!(result.depth_used, 6);
    /// ```
    pub fn solve(
        &self,
        start: Cell,
        goal: Cell,
        max_depth: usize,
    ) -> Result<SolveResult, GridError> {
        self.require_in_bounds(start)?;
        self.require_in_bounds(goal)?;

        for depth in 0..=max_depth {
            // The visited set and path stack are allocated fresh for every
            // depth iteration; reusing them would change which cells each
            // attempt may expand.
            let mut visited = HashSet::new();
            let mut path = Vec::new();
            if self.depth_limited(start, goal, depth, &mut visited, &mut path) {
                // Nodes were pushed goal-to-start on unwind.
                path.reverse();
                return Ok(SolveResult {
                    path: Some(path),
                    depth_used: depth,
                });
            }
        }
        Ok(SolveResult {
            path: None,
            depth_used: max_depth,
        })
    }

    /// One depth-limited search attempt.
    ///
    /// Visited marking persists for the remainder of the attempt: a cell
    /// expanded in one branch cannot be revisited by a sibling branch. This
    /// bounds the search space of a single attempt and is relied on by the
    /// iterative-deepening loop.
    fn depth_limited(
        &self,
        node: Cell,
        goal: Cell,
        depth: usize,
        visited: &mut HashSet<Cell>,
        path: &mut Vec<Cell>,
    ) -> bool {
        if node == goal {
            path.push(node);
            return true;
        }
        visited.insert(node);
        if depth == 0 {
            return false;
        }
        for delta in Self::NEIGHBOR_ORDER {
            let Some(next) = self.neighbor(node, delta) else {
                continue;
            };
            if self.is_passable(next)
                && !visited.contains(&next)
                && self.depth_limited(next, goal, depth - 1, visited, path)
            {
                path.push(node);
                return true;
            }
        }
        false
    }

    /// In-bounds 4-neighbor of a cell, shared by solver and generator.
    pub(crate) fn neighbor(&self, cell: Cell, delta: (i32, i32)) -> Option<Cell> {
        let row = cell.row.checked_add_signed(delta.0 as isize)?;
        let col = cell.col.checked_add_signed(delta.1 as isize)?;
        let cell = Cell { row, col };
        self.contains(cell).then_some(cell)
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    fn require_in_bounds(&self, cell: Cell) -> Result<(), GridError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBoundsCell {
                row: cell.row,
                col: cell.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .cells
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|state| char::from(b'0' + u8::from(*state)))
                    .collect::<String>()
            })
            .join("\n");
        write!(f, "{text}")
    }
}

impl SolveResult {
    /// Print result to console
    pub fn print_report(&self) {
        match &self.path {
            Some(path) => {
                println!("The shortest path is {} steps.", path.len() - 1)
            }
            None => {
                println!("No path found within depth {}.", self.depth_used)
            }
        }
    }
}
