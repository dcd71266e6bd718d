use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::engine::{Algorithm, Engine};
use crate::game::GameState;

/// Interface for move-selecting players, used by game loops and tests.
pub trait Agent {
    /// Select a column for the current player. Callers must not invoke this
    /// on a terminal state.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let actions = state.legal_actions();
        assert!(!actions.is_empty(), "No legal actions available");
        let idx = self.rng.random_range(0..actions.len());
        actions[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// An agent backed by one of the engine's search variants.
pub struct SearchAgent {
    engine: Engine,
    algorithm: Algorithm,
    depth: u32,
}

impl SearchAgent {
    pub fn new(algorithm: Algorithm, depth: u32) -> Self {
        SearchAgent {
            engine: Engine::new(),
            algorithm,
            depth,
        }
    }
}

impl Agent for SearchAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let legal = state.legal_actions();
        assert!(!legal.is_empty(), "No legal actions available");
        let report = self
            .engine
            .compute_move(state.board(), self.algorithm, self.depth, false)
            .expect("search over a non-terminal board");
        report.column.unwrap_or(legal[0])
    }

    fn name(&self) -> &str {
        self.algorithm.as_str()
    }
}
