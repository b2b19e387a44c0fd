//! Grid coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, column) cell coordinate.
///
/// Signed so that off-grid requests (including negative ones) are
/// representable and can be rejected with a bounds error instead of
/// wrapping. Row 0 is the top of the maze; column 0 is the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index, increasing downward.
    pub row: i32,
    /// Column index, increasing rightward.
    pub col: i32,
}

impl GridCoord {
    /// Create a new coordinate.
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate.
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The four orthogonal neighbors in the fixed order
    /// down, up, right, left.
    ///
    /// The order is load-bearing: agents push frontier candidates in
    /// exactly this order, which fixes the traversal order within each
    /// frontier discipline.
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.row + 1, self.col), // down
            GridCoord::new(self.row - 1, self.col), // up
            GridCoord::new(self.row, self.col + 1), // right
            GridCoord::new(self.row, self.col - 1), // left
        ]
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
