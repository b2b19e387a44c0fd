//! The frontier: coordinates pending exploration.

use crate::core::GridCoord;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Frontier discipline: which pending coordinate is taken next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrontierOrder {
    /// First in, first out: breadth-first traversal.
    Fifo,
    /// Last in, first out: depth-first traversal.
    Lifo,
}

/// A frontier of coordinates pending exploration.
///
/// Entries are deliberately not deduplicated: the same coordinate may
/// sit in the frontier more than once before its first reveal. Agents
/// filter candidates by explored state at push time, so duplicate pops
/// are harmless no-ops that never re-expand new work.
#[derive(Clone, Debug)]
pub struct Frontier {
    entries: VecDeque<GridCoord>,
    order: FrontierOrder,
}

impl Frontier {
    /// Create an empty frontier with the given discipline.
    pub fn new(order: FrontierOrder) -> Self {
        Self {
            entries: VecDeque::new(),
            order,
        }
    }

    /// The discipline this frontier pops with.
    #[inline]
    pub fn order(&self) -> FrontierOrder {
        self.order
    }

    /// Add a coordinate to the frontier.
    #[inline]
    pub fn push(&mut self, coord: GridCoord) {
        self.entries.push_back(coord);
    }

    /// Take the next coordinate per the discipline, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<GridCoord> {
        match self.order {
            FrontierOrder::Fifo => self.entries.pop_front(),
            FrontierOrder::Lifo => self.entries.pop_back(),
        }
    }

    /// Number of pending entries (duplicates included).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the frontier empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_pops_oldest_first() {
        let mut f = Frontier::new(FrontierOrder::Fifo);
        f.push(GridCoord::new(0, 0));
        f.push(GridCoord::new(1, 1));
        f.push(GridCoord::new(2, 2));
        assert_eq!(f.pop(), Some(GridCoord::new(0, 0)));
        assert_eq!(f.pop(), Some(GridCoord::new(1, 1)));
        assert_eq!(f.pop(), Some(GridCoord::new(2, 2)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn test_lifo_pops_newest_first() {
        let mut f = Frontier::new(FrontierOrder::Lifo);
        f.push(GridCoord::new(0, 0));
        f.push(GridCoord::new(1, 1));
        f.push(GridCoord::new(2, 2));
        assert_eq!(f.pop(), Some(GridCoord::new(2, 2)));
        assert_eq!(f.pop(), Some(GridCoord::new(1, 1)));
        assert_eq!(f.pop(), Some(GridCoord::new(0, 0)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut f = Frontier::new(FrontierOrder::Fifo);
        f.push(GridCoord::new(3, 3));
        f.push(GridCoord::new(3, 3));
        assert_eq!(f.len(), 2);
    }
}
