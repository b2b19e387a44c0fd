//! Frontier-driven maze exploration agents.
//!
//! Both agents share one skeleton and differ only in frontier
//! discipline: FIFO ([`FrontierOrder::Fifo`], breadth-first, reveals the
//! maze in layers around the start) versus LIFO ([`FrontierOrder::Lifo`],
//! depth-first, dives down the most recently discovered branch).

mod agent;
mod frontier;

pub use agent::{AgentConfig, AgentRun, FrontierAgent, Outcome};
pub use frontier::{Frontier, FrontierOrder};
