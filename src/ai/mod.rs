//! Search algorithms and the engine facade: the window heuristic, the
//! deterministic minimax searcher, the stochastic chance model, the
//! expectiminimax searcher, trace-tree builders, and the agent seam.

mod agent;
pub mod chance;
mod engine;
mod expected;
pub mod heuristic;
mod minimax;
pub mod tree;

pub use agent::{Agent, RandomAgent, SearchAgent};
pub use chance::chance_outcomes;
pub use engine::{Algorithm, Engine, MoveReport};
pub use expected::Expectiminimax;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::Minimax;
pub use tree::{TraceNode, Tracer};

/// Node and leaf counters threaded through a search as an explicit
/// accumulator, so separate searches stay independently reproducible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes entered, including interior nodes.
    pub nodes: u64,
    /// Positions scored by the heuristic.
    pub leaves: u64,
}
