//! Cell symbols for the maze grid.

use serde::{Deserialize, Serialize};

/// What a maze cell holds.
///
/// The on-disk text format uses one character per cell:
/// `#` wall, `o` start, `*` goal, `.` open space. Unexplored cells are
/// rendered as `?` but that is a display convention, never a cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellKind {
    /// Solid wall. Revealable (the wall is "seen") but never traversable.
    Wall = 0,

    /// The unique starting position. Always revealable.
    Start = 1,

    /// The unique goal position. Reaching it ends a session.
    Goal = 2,

    /// Open space the frontier can grow through.
    Open = 3,
}

impl CellKind {
    /// Parse a maze-format character.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(CellKind::Wall),
            'o' => Some(CellKind::Start),
            '*' => Some(CellKind::Goal),
            '.' => Some(CellKind::Open),
            _ => None,
        }
    }

    /// The maze-format character for this cell.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Start => 'o',
            CellKind::Goal => '*',
            CellKind::Open => '.',
        }
    }

    /// Convert from the stored u8 representation.
    #[inline]
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            1 => CellKind::Start,
            2 => CellKind::Goal,
            3 => CellKind::Open,
            _ => CellKind::Wall,
        }
    }

    /// May an agent grow its frontier outward from this cell?
    ///
    /// Only open space and the start expand; a revealed wall is a dead
    /// end and a revealed goal terminates the run before expansion.
    #[inline]
    pub fn is_expandable(self) -> bool {
        matches!(self, CellKind::Start | CellKind::Open)
    }

    /// Is this the goal?
    #[inline]
    pub fn is_goal(self) -> bool {
        self == CellKind::Goal
    }
}
