//! Maze file input.

mod maze_format;

pub use maze_format::{load_maze, parse_maze};
