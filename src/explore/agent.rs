//! The shared agent skeleton driving the reveal rule.

use crate::core::{CellKind, GridCoord};
use crate::grid::MazeGrid;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::frontier::{Frontier, FrontierOrder};

/// Configuration for a frontier agent.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Maximum number of frontier pops before the run is cut off with
    /// [`Outcome::StepLimitReached`]. `None` means unbounded; the run
    /// still terminates because the frontier drains once every reachable
    /// cell has been revealed.
    pub step_limit: Option<usize>,
}

/// How an agent run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The goal cell was revealed.
    GoalFound {
        /// Where the goal was found.
        at: GridCoord,
    },
    /// The frontier emptied before the goal was revealed: the goal is
    /// unreachable from the explored region.
    Exhausted,
    /// The configured step limit cut the run off.
    StepLimitReached,
}

/// Report of a completed agent run.
#[derive(Clone, Debug)]
pub struct AgentRun {
    /// How the run ended.
    pub outcome: Outcome,
    /// Number of frontier pops consumed (duplicates included).
    pub steps: usize,
    /// First-time reveals in the order they happened.
    pub reveals: Vec<(GridCoord, CellKind)>,
}

/// A frontier-driven exploration agent.
///
/// Seeds its frontier with the start cell and repeatedly pops a
/// coordinate, reveals it, and grows the frontier from open space:
///
/// - revealing the goal ends the run;
/// - revealing open space or the start pushes each not-yet-explored
///   orthogonal neighbor off the border ring (the goal is exempt from
///   the border restriction), in the fixed order down, up, right, left;
/// - a wall, or a rejected reveal, grows nothing.
///
/// Rejected reveals are skip signals, not failures: the run keeps
/// draining the frontier.
#[derive(Clone, Debug)]
pub struct FrontierAgent {
    order: FrontierOrder,
    config: AgentConfig,
}

impl FrontierAgent {
    /// Create an agent with the given frontier discipline.
    pub fn new(order: FrontierOrder) -> Self {
        Self {
            order,
            config: AgentConfig::default(),
        }
    }

    /// Create an agent with an explicit configuration.
    pub fn with_config(order: FrontierOrder, config: AgentConfig) -> Self {
        Self { order, config }
    }

    /// The frontier discipline this agent uses.
    pub fn order(&self) -> FrontierOrder {
        self.order
    }

    /// Run the agent to completion on the given grid.
    pub fn run(&self, grid: &mut MazeGrid) -> AgentRun {
        self.run_with(grid, |_, _, _| {})
    }

    /// Run the agent, invoking `observer` after every first-time reveal.
    ///
    /// The observer sees the grid state with the reveal already applied;
    /// the CLI uses this to redraw the fog view step by step.
    pub fn run_with<F>(&self, grid: &mut MazeGrid, mut observer: F) -> AgentRun
    where
        F: FnMut(&MazeGrid, GridCoord, CellKind),
    {
        let mut frontier = Frontier::new(self.order);
        frontier.push(grid.start());
        debug!(
            "{:?} agent starting at {} on {}x{} maze",
            self.order,
            grid.start(),
            grid.width(),
            grid.height()
        );

        let mut steps = 0;
        let mut reveals = Vec::new();

        loop {
            if let Some(limit) = self.config.step_limit {
                if steps >= limit {
                    debug!("step limit {} reached after {} reveals", limit, reveals.len());
                    return AgentRun {
                        outcome: Outcome::StepLimitReached,
                        steps,
                        reveals,
                    };
                }
            }

            let Some(coord) = frontier.pop() else {
                debug!(
                    "frontier exhausted after {} steps, {} cells revealed",
                    steps,
                    reveals.len()
                );
                return AgentRun {
                    outcome: Outcome::Exhausted,
                    steps,
                    reveals,
                };
            };
            steps += 1;

            let newly = !grid.is_explored(coord).unwrap_or(true);
            match grid.reveal(coord) {
                Ok(kind) => {
                    if newly {
                        reveals.push((coord, kind));
                        observer(grid, coord, kind);
                    }
                    if kind.is_goal() {
                        debug!("goal found at {} after {} steps", coord, steps);
                        return AgentRun {
                            outcome: Outcome::GoalFound { at: coord },
                            steps,
                            reveals,
                        };
                    }
                    if kind.is_expandable() {
                        self.expand(grid, coord, &mut frontier);
                    }
                }
                Err(err) => {
                    // Skip signal, not a failure: out-of-bounds and
                    // unreachable entries just fall off the frontier.
                    trace!("skipping {}: {}", coord, err);
                }
            }
        }
    }

    /// Push each eligible orthogonal neighbor, in the fixed order
    /// down, up, right, left.
    ///
    /// Eligible means not yet explored and inside the interior
    /// sub-rectangle, with the goal cell exempt from the interior
    /// restriction: the goal coordinate is known from the grid accessor
    /// and a goal sitting on the border must still be enqueuable.
    ///
    /// Candidates are not filtered by frontier membership, so duplicates
    /// can accumulate; re-expansion of an already-explored pop is
    /// idempotent for the same reason.
    fn expand(&self, grid: &MazeGrid, coord: GridCoord, frontier: &mut Frontier) {
        for n in coord.neighbors_4() {
            if (grid.is_interior(n) || n == grid.goal()) && !grid.is_explored(n).unwrap_or(true) {
                frontier.push(n);
            }
        }
    }
}
