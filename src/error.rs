//! Error types for Vyuha.

use crate::core::GridCoord;
use thiserror::Error;

/// Vyuha error type.
#[derive(Error, Debug)]
pub enum MazeError {
    /// The maze file or text did not match the declared format.
    #[error("malformed maze: {reason}")]
    MalformedMaze {
        /// What exactly was wrong with the input.
        reason: String,
    },

    /// A coordinate outside the grid was requested. No state is mutated.
    #[error("({}, {}) is outside the {width}x{height} grid", coord.row, coord.col)]
    OutOfBounds {
        /// The rejected coordinate.
        coord: GridCoord,
        /// Grid width in columns.
        width: usize,
        /// Grid height in rows.
        height: usize,
    },

    /// The adjacency rule forbids revealing this cell right now.
    /// No state is mutated.
    #[error("cannot reveal ({}, {}): no adjacent open cell has been revealed", coord.row, coord.col)]
    NotReachable {
        /// The rejected coordinate.
        coord: GridCoord,
    },

    /// Reading the maze file failed.
    #[error("maze I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl MazeError {
    /// Construct a `MalformedMaze` from anything string-like.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedMaze {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = MazeError::OutOfBounds {
            coord: GridCoord::new(5, -1),
            width: 4,
            height: 4,
        };
        assert_eq!(err.to_string(), "(5, -1) is outside the 4x4 grid");
    }

    #[test]
    fn test_not_reachable_display() {
        let err = MazeError::NotReachable {
            coord: GridCoord::new(2, 3),
        };
        assert_eq!(
            err.to_string(),
            "cannot reveal (2, 3): no adjacent open cell has been revealed"
        );
    }

    #[test]
    fn test_malformed_helper() {
        let err = MazeError::malformed("header missing");
        assert_eq!(err.to_string(), "malformed maze: header missing");
    }
}
