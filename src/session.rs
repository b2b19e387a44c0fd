//! The interactive (human-driven) session loop.
//!
//! Generic over input and output streams so the turn loop is testable
//! with scripted input; the binary wires it to stdin/stdout.

use crate::core::GridCoord;
use crate::grid::MazeGrid;
use crate::render::{render_fog, render_full};
use log::info;
use std::io::{self, BufRead, Write};

/// How an interactive session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player revealed the goal.
    GoalFound,
    /// Input closed (EOF) before the goal was revealed.
    InputClosed,
}

/// Run the interactive turn loop until the goal is revealed or input
/// ends.
///
/// Each turn: show the fog view, prompt for a `row col` pair, attempt
/// the reveal, and report the found symbol or why the reveal was
/// rejected. Malformed lines re-prompt. On the goal, the full maze is
/// shown without fog.
pub fn run_interactive<R, W>(grid: &mut MazeGrid, input: R, out: &mut W) -> io::Result<SessionEnd>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", render_fog(grid))?;
    writeln!(
        out,
        "Starting in {}, {}",
        grid.start().row,
        grid.start().col
    )?;

    let mut lines = input.lines();
    loop {
        writeln!(out, "Enter the row and column you want to explore:")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            info!("input closed before the goal was found");
            return Ok(SessionEnd::InputClosed);
        };
        let line = line?;

        let Some(coord) = parse_turn(&line) else {
            writeln!(out, "Please enter two numbers, like: 2 3")?;
            continue;
        };

        match grid.reveal(coord) {
            Ok(kind) => {
                writeln!(
                    out,
                    "You found a {} in {}, {}",
                    kind.as_char(),
                    coord.row,
                    coord.col
                )?;
                writeln!(out, "{}", render_fog(grid))?;
                if kind.is_goal() {
                    writeln!(out, "You found the finish!")?;
                    writeln!(out, "{}", render_full(grid))?;
                    return Ok(SessionEnd::GoalFound);
                }
            }
            Err(err) => {
                // Recoverable rejection: report and keep playing.
                writeln!(out, "{}", err)?;
                writeln!(out, "{}", render_fog(grid))?;
            }
        }
    }
}

/// Parse a `row col` turn line.
fn parse_turn(line: &str) -> Option<GridCoord> {
    let mut fields = line.split_whitespace();
    let row: i32 = fields.next()?.parse().ok()?;
    let col: i32 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(GridCoord::new(row, col))
}
