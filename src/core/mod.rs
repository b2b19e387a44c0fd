//! Fundamental value types: cell symbols and grid coordinates.

mod cell;
mod coord;

pub use cell::CellKind;
pub use coord::GridCoord;
