//! Error types for Labyrinth.

use thiserror::Error;

/// Top-level error type for Labyrinth operations.
#[derive(Debug, Error)]
pub enum LabyrinthError {
    /// Map/level errors
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Map grid errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Cell lies outside the grid
    #[error("Cell at row {row}, col {col} is outside the map")]
    OutOfBounds {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
    },

    /// A row has a different width than the first row
    #[error("Row {row} has {actual} cells, expected {expected}")]
    Ragged {
        /// Offending row
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        actual: usize,
    },

    /// Map has no rows
    #[error("Map has no rows")]
    Empty,
}

/// Result type alias for Labyrinth operations.
pub type LabyrinthResult<T> = Result<T, LabyrinthError>;

/// Result type alias for map operations.
pub type MapResult<T> = Result<T, MapError>;
