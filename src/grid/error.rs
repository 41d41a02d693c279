//! Errors raised by grid construction and access.

use thiserror::Error;

/// Reasons a grid operation or an ASCII grid description can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinates outside the grid.
    #[error("coordinates ({x}, {y}) are out of bounds for grid size {width}x{height}")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A character that is not one of `.`, `#`, `K`, `C`.
    #[error("unknown cell character '{ch}' at ({x}, {y})")]
    UnknownCell { ch: char, x: usize, y: usize },

    /// A row whose width differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// No rows at all.
    #[error("grid description contains no cells")]
    Empty,
}
