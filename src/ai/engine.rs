use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::Serialize;

use crate::ai::expected::Expectiminimax;
use crate::ai::heuristic::{Heuristic, WindowHeuristic};
use crate::ai::minimax::Minimax;
use crate::ai::tree::{serialize_finite, TraceNode, Tracer};
use crate::ai::SearchStats;
use crate::error::EngineError;
use crate::game::Board;

/// The four search variants the engine exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Minimax,
    Alphabeta,
    Expected,
    ExpectedPrune,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::Alphabeta => "alphabeta",
            Algorithm::Expected => "expected",
            Algorithm::ExpectedPrune => "expected_prune",
        }
    }

    fn prunes(self) -> bool {
        matches!(self, Algorithm::Alphabeta | Algorithm::ExpectedPrune)
    }

    fn is_expected(self) -> bool {
        matches!(self, Algorithm::Expected | Algorithm::ExpectedPrune)
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" => Ok(Algorithm::Alphabeta),
            "expected" => Ok(Algorithm::Expected),
            "expected_prune" => Ok(Algorithm::ExpectedPrune),
            other => Err(EngineError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one move computation.
#[derive(Debug, Clone, Serialize)]
pub struct MoveReport {
    pub algorithm: Algorithm,
    /// Best column, or `None` when the board is terminal at entry.
    #[serde(rename = "move")]
    pub column: Option<usize>,
    #[serde(serialize_with = "serialize_finite")]
    pub score: f64,
    pub nodes: u64,
    pub leaves: u64,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<TraceNode>,
}

/// Facade over the search variants, the heuristic and the tracer. One
/// engine serves any number of independent move computations; nothing is
/// shared between them.
pub struct Engine {
    heuristic: Box<dyn Heuristic>,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        Engine { heuristic }
    }

    /// Direct heuristic query, no search.
    pub fn evaluate_board(&self, board: &Board) -> f64 {
        self.heuristic.evaluate(board)
    }

    /// Compute the best column for the AI on `board` using `algorithm` at
    /// `depth`. The optional trace tree is built side-band and never
    /// affects the returned move or score.
    pub fn compute_move(
        &self,
        board: &Board,
        algorithm: Algorithm,
        depth: u32,
        include_tree: bool,
    ) -> Result<MoveReport, EngineError> {
        let start = Instant::now();
        let mut stats = SearchStats::default();

        let heuristic = self.heuristic.as_ref();
        let (score, column) = if algorithm.is_expected() {
            Expectiminimax::new(heuristic, algorithm.prunes()).choose(board, depth, &mut stats)?
        } else {
            Minimax::new(heuristic, algorithm.prunes()).search(board, depth, &mut stats)?
        };

        let tree = if include_tree {
            let tracer = Tracer::new(heuristic, algorithm.prunes());
            Some(if algorithm.is_expected() {
                tracer.expected(board, depth)?
            } else {
                tracer.minimax(board, depth)?
            })
        } else {
            None
        };

        Ok(MoveReport {
            algorithm,
            column,
            score,
            nodes: stats.nodes,
            leaves: stats.leaves,
            elapsed_ms: start.elapsed().as_millis() as u64,
            tree,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
