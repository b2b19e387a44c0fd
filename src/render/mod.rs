//! Console rendering of the maze grid.
//!
//! Produces a `height`-line, `width`-column character block. With fog
//! enabled, unexplored cells show [`FOG_CHAR`] instead of their content.

use crate::core::GridCoord;
use crate::grid::MazeGrid;

/// Placeholder character for unexplored cells.
pub const FOG_CHAR: char = '?';

/// Render the grid, hiding unexplored cells behind fog when `fog` is set.
pub fn render(grid: &MazeGrid, fog: bool) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let coord = GridCoord::new(row as i32, col as i32);
            // In-range by construction of the loop bounds.
            let explored = grid.is_explored(coord).unwrap_or(false);
            if fog && !explored {
                out.push(FOG_CHAR);
            } else if let Ok(kind) = grid.kind(coord) {
                out.push(kind.as_char());
            }
        }
        out.push('\n');
    }
    out
}

/// Render with fog of war: unexplored cells appear as `?`.
pub fn render_fog(grid: &MazeGrid) -> String {
    render(grid, true)
}

/// Render the full maze, fog disabled.
pub fn render_full(grid: &MazeGrid) -> String {
    render(grid, false)
}
