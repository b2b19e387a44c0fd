//! Text maze format.
//!
//! Format:
//! - Line 1: `width height` (two whitespace-separated positive integers)
//! - Followed by exactly `height` lines of exactly `width` characters
//!   each, drawn from `#` (wall), `o` (start), `*` (goal), `.` (open)
//!
//! Exactly one start and one goal are expected; when a symbol repeats,
//! the first occurrence (row-major) is recorded.

use crate::core::CellKind;
use crate::error::{MazeError, Result};
use crate::grid::MazeGrid;
use log::{debug, info};
use std::path::Path;

/// Load a maze from a file.
pub fn load_maze<P: AsRef<Path>>(path: P) -> Result<MazeGrid> {
    let path = path.as_ref();
    debug!("loading maze from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    let grid = parse_maze(&text)?;
    info!(
        "loaded {}x{} maze from {}, start {}, goal {}",
        grid.width(),
        grid.height(),
        path.display(),
        grid.start(),
        grid.goal()
    );
    Ok(grid)
}

/// Parse a maze from text.
pub fn parse_maze(text: &str) -> Result<MazeGrid> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| MazeError::malformed("empty input, expected `width height` header"))?;
    let (width, height) = parse_header(header)?;

    let mut cells = Vec::with_capacity(width * height);
    for row in 0..height {
        let line = lines.next().ok_or_else(|| {
            MazeError::malformed(format!("expected {} rows, got {}", height, row))
        })?;
        parse_row(line, row, width, &mut cells)?;
    }

    // Anything left over means the declared height was wrong.
    for extra in lines {
        if !extra.trim().is_empty() {
            return Err(MazeError::malformed(format!(
                "expected {} rows, found extra row {:?}",
                height, extra
            )));
        }
    }

    MazeGrid::new(width, height, cells)
}

fn parse_header(header: &str) -> Result<(usize, usize)> {
    let mut fields = header.split_whitespace();
    let width = fields
        .next()
        .ok_or_else(|| MazeError::malformed("header is missing the width"))?;
    let height = fields
        .next()
        .ok_or_else(|| MazeError::malformed("header is missing the height"))?;
    if fields.next().is_some() {
        return Err(MazeError::malformed(format!(
            "header {:?} has trailing fields, expected `width height`",
            header
        )));
    }

    let width: usize = width
        .parse()
        .map_err(|_| MazeError::malformed(format!("width {:?} is not a positive integer", width)))?;
    let height: usize = height.parse().map_err(|_| {
        MazeError::malformed(format!("height {:?} is not a positive integer", height))
    })?;
    Ok((width, height))
}

fn parse_row(line: &str, row: usize, width: usize, cells: &mut Vec<CellKind>) -> Result<()> {
    let mut count = 0;
    for (col, c) in line.chars().enumerate() {
        let kind = CellKind::from_char(c).ok_or_else(|| {
            MazeError::malformed(format!(
                "invalid symbol {:?} at row {}, column {}",
                c, row, col
            ))
        })?;
        cells.push(kind);
        count += 1;
    }
    if count != width {
        return Err(MazeError::malformed(format!(
            "row {} has {} columns, expected {}",
            row, count, width
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;

    #[test]
    fn test_parse_minimal_maze() {
        let g = parse_maze("3 3\n#o#\n#.#\n#*#\n").unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 3);
        assert_eq!(g.start(), GridCoord::new(0, 1));
        assert_eq!(g.goal(), GridCoord::new(2, 1));
        assert_eq!(g.kind(GridCoord::new(1, 1)).unwrap(), CellKind::Open);
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let g = parse_maze("3 3\n#o#\n#.#\n#*#").unwrap();
        assert_eq!(g.height(), 3);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            parse_maze("").unwrap_err(),
            MazeError::MalformedMaze { .. }
        ));
    }

    #[test]
    fn test_bad_header_rejected() {
        for bad in ["3", "three three", "3 3 3", "-1 3", "0 3"] {
            let err = parse_maze(&format!("{}\n#o*\n", bad)).unwrap_err();
            assert!(
                matches!(err, MazeError::MalformedMaze { .. }),
                "header {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_too_few_rows_rejected() {
        let err = parse_maze("3 3\n#o#\n#*#\n").unwrap_err();
        assert!(err.to_string().contains("expected 3 rows"));
    }

    #[test]
    fn test_extra_rows_rejected() {
        let err = parse_maze("3 2\n#o#\n#*#\n###\n").unwrap_err();
        assert!(err.to_string().contains("extra row"));
    }

    #[test]
    fn test_row_width_mismatch_rejected() {
        let err = parse_maze("3 2\n#o#\n#*##\n").unwrap_err();
        assert!(err.to_string().contains("columns"));
    }

    #[test]
    fn test_invalid_symbol_rejected() {
        let err = parse_maze("3 2\n#o#\n#*x\n").unwrap_err();
        assert!(err.to_string().contains("invalid symbol"));
    }

    #[test]
    fn test_missing_start_or_goal_rejected() {
        assert!(parse_maze("3 1\n#*#\n").is_err());
        assert!(parse_maze("3 1\n#o#\n").is_err());
    }

    #[test]
    fn test_trailing_blank_line_tolerated() {
        let g = parse_maze("3 1\no.*\n\n").unwrap();
        assert_eq!(g.width(), 3);
    }
}
