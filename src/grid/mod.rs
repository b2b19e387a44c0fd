//! The maze grid and the adjacency-gated reveal rule.
//!
//! Cell contents and explored flags live in flat row-major buffers
//! indexed `row * width + col`, validated once at construction. The
//! explored flags are monotonic: they flip `false -> true` via
//! [`MazeGrid::reveal`] (or [`MazeGrid::mark_explored`]) and never reset.

use crate::core::{CellKind, GridCoord};
use crate::error::{MazeError, Result};
use log::trace;

/// A maze with per-cell fog of war.
///
/// Contents are immutable after construction; only the explored flags
/// change, through the reveal rule. One grid is exclusively owned by one
/// session (human or agent) and discarded when the session ends.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    /// Cell contents (CellKind as u8), row-major.
    cells: Vec<u8>,
    /// Explored flags, same indexing as `cells`.
    explored: Vec<bool>,
    /// Grid width in columns.
    width: usize,
    /// Grid height in rows.
    height: usize,
    /// First occurrence of the start symbol.
    start: GridCoord,
    /// First occurrence of the goal symbol.
    goal: GridCoord,
}

impl MazeGrid {
    /// Build a grid from already-parsed cells.
    ///
    /// Scans for the first occurrence of the start and goal symbols.
    /// Fails with `MalformedMaze` if the dimensions are not positive, if
    /// the cell count does not match `width * height`, or if the start
    /// or goal symbol is absent.
    pub fn new(width: usize, height: usize, cells: Vec<CellKind>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::malformed(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if cells.len() != width * height {
            return Err(MazeError::malformed(format!(
                "expected {} cells for a {}x{} grid, got {}",
                width * height,
                width,
                height,
                cells.len()
            )));
        }

        let mut start = None;
        let mut goal = None;
        for (i, kind) in cells.iter().enumerate() {
            let coord = GridCoord::new((i / width) as i32, (i % width) as i32);
            match kind {
                CellKind::Start if start.is_none() => start = Some(coord),
                CellKind::Goal if goal.is_none() => goal = Some(coord),
                _ => {}
            }
        }
        let start = start.ok_or_else(|| MazeError::malformed("no start symbol 'o' in maze"))?;
        let goal = goal.ok_or_else(|| MazeError::malformed("no goal symbol '*' in maze"))?;

        Ok(Self {
            cells: cells.into_iter().map(|k| k as u8).collect(),
            explored: vec![false; width * height],
            width,
            height,
            start,
            goal,
        })
    }

    /// Grid width in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The start coordinate (constant after construction).
    #[inline]
    pub fn start(&self) -> GridCoord {
        self.start
    }

    /// The goal coordinate (constant after construction).
    #[inline]
    pub fn goal(&self) -> GridCoord {
        self.goal
    }

    /// Is the coordinate inside the grid?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.height
            && (coord.col as usize) < self.width
    }

    /// Is the coordinate strictly inside the grid, off the outermost
    /// row and column ring?
    ///
    /// Agents restrict frontier growth to this sub-rectangle (plus the
    /// goal cell); [`MazeGrid::reveal`] itself accepts border cells.
    #[inline]
    pub fn is_interior(&self, coord: GridCoord) -> bool {
        coord.row >= 1
            && coord.col >= 1
            && (coord.row as usize) < self.height.saturating_sub(1)
            && (coord.col as usize) < self.width.saturating_sub(1)
    }

    /// Convert a coordinate to a flat buffer index.
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.width + coord.col as usize)
        } else {
            None
        }
    }

    #[inline]
    fn index_or_oob(&self, coord: GridCoord) -> Result<usize> {
        self.coord_to_index(coord).ok_or(MazeError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        })
    }

    /// Cell content at a coordinate. No side effect.
    #[inline]
    pub fn kind(&self, coord: GridCoord) -> Result<CellKind> {
        let i = self.index_or_oob(coord)?;
        Ok(CellKind::from_u8(self.cells[i]))
    }

    /// Has this cell been revealed?
    #[inline]
    pub fn is_explored(&self, coord: GridCoord) -> Result<bool> {
        let i = self.index_or_oob(coord)?;
        Ok(self.explored[i])
    }

    /// Set the explored flag. Idempotent; nothing else changes.
    #[inline]
    pub fn mark_explored(&mut self, coord: GridCoord) -> Result<()> {
        let i = self.index_or_oob(coord)?;
        self.explored[i] = true;
        Ok(())
    }

    /// Number of cells revealed so far.
    pub fn explored_count(&self) -> usize {
        self.explored.iter().filter(|&&e| e).count()
    }

    /// Attempt to reveal a cell, returning its content on success.
    ///
    /// A cell may be revealed when any of the following holds:
    /// - it is the start cell;
    /// - it is already explored (re-revealing is a legal no-op);
    /// - an in-bounds orthogonal neighbor is already explored and that
    ///   neighbor holds the start or open space. An explored wall or
    ///   goal neighbor does not open up its surroundings.
    ///
    /// Errors (`OutOfBounds`, `NotReachable`) leave all state untouched.
    /// Note that a wall is revealable like any other cell once adjacency
    /// is satisfied: it is "seen", not entered. Callers deciding whether
    /// to keep exploring must branch on the returned [`CellKind`].
    pub fn reveal(&mut self, coord: GridCoord) -> Result<CellKind> {
        let i = self.index_or_oob(coord)?;
        let kind = CellKind::from_u8(self.cells[i]);

        let allowed = kind == CellKind::Start
            || self.explored[i]
            || self.has_explored_open_neighbor(coord);

        if !allowed {
            return Err(MazeError::NotReachable { coord });
        }

        if !self.explored[i] {
            trace!("revealed {} -> '{}'", coord, kind.as_char());
        }
        self.explored[i] = true;
        Ok(kind)
    }

    /// Does any in-bounds orthogonal neighbor satisfy the adjacency
    /// gate (explored, and holding start or open space)?
    fn has_explored_open_neighbor(&self, coord: GridCoord) -> bool {
        coord.neighbors_4().iter().any(|&n| {
            self.coord_to_index(n)
                .map(|i| self.explored[i] && CellKind::from_u8(self.cells[i]).is_expandable())
                .unwrap_or(false)
        })
    }
}
