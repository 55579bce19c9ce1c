use thiserror::Error;

use crate::grid::Cell;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be at least 1 x 1, got {rows} x {cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cells {a} and {b} are not adjacent")]
    InvalidAdjacency { a: Cell, b: Cell },

    #[error("cell {cell} is outside the {rows} x {cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },

    #[error("the maze has not finished generating")]
    NotGenerated,

    #[error("no path from {start} to {goal}")]
    NoPathFound { start: Cell, goal: Cell },

    #[error("the search has not finished yet")]
    SearchInProgress,
}
