//! # Vyuha: Fog-of-War Maze Exploration
//!
//! A grid-based maze engine with partial observability. Every cell starts
//! hidden behind fog; a cell can only be revealed once an orthogonally
//! adjacent open cell (or the start) has already been revealed. Three
//! interchangeable drivers consume the engine:
//!
//! - **Interactive**: a human picks coordinates turn by turn
//! - **Queue agent**: breadth-first frontier (FIFO), reveals in layers
//! - **Stack agent**: depth-first frontier (LIFO), dives down branches
//!
//! ## Quick Start
//!
//! ```
//! use vyuha::explore::{FrontierAgent, FrontierOrder, Outcome};
//! use vyuha::io::parse_maze;
//!
//! let mut grid = parse_maze("3 3\n#o#\n#.#\n#*#\n").unwrap();
//! let agent = FrontierAgent::new(FrontierOrder::Fifo);
//! let run = agent.run(&mut grid);
//! assert!(matches!(run.outcome, Outcome::GoalFound { .. }));
//! ```
//!
//! ## Architecture
//!
//! - [`core`](crate::core): fundamental value types ([`CellKind`], [`GridCoord`])
//! - [`grid`](crate::grid): the maze grid and the adjacency-gated reveal rule
//! - [`io`](crate::io): text maze format parsing and file loading
//! - [`explore`](crate::explore): frontier-driven traversal agents
//! - [`render`](crate::render): fog-of-war console rendering
//! - [`session`](crate::session): the interactive turn loop
//!
//! ## Data Flow
//!
//! ```text
//! Agent / Session ──pop──▶ MazeGrid::reveal ──▶ CellKind
//!       ▲                                          │
//!       └──────── grow frontier on Open/Start ◀────┘
//! ```
//!
//! Agents branch on the *returned content*, not on reveal success alone:
//! revealing a wall is legal once adjacency is satisfied (the wall is
//! "seen"), but only open space and the start grow the frontier.

pub mod core;
pub mod error;
pub mod explore;
pub mod grid;
pub mod io;
pub mod render;
pub mod session;

pub use crate::core::{CellKind, GridCoord};
pub use crate::error::{MazeError, Result};
pub use crate::grid::MazeGrid;
