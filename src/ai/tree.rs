//! Side-band trace trees for visualization. A tracer walks the same tree as
//! the corresponding search and records every node it visits; the engine's
//! move and score always come from the plain search, so producing a trace
//! can never change the answer handed to a caller.

use serde::ser::Serializer;
use serde::Serialize;

use crate::ai::chance::chance_outcomes;
use crate::ai::heuristic::Heuristic;
use crate::game::{Board, Cell, MoveError, Player};

/// Expectiminimax traces are capped at this depth; the full search may go
/// deeper, but the recorded tree stays renderable.
pub const TRACE_DEPTH_CAP: u32 = 4;

/// Serialize a score, substituting `null` for non-finite values so that
/// ±infinity sentinels never leak across a serialization boundary.
pub(crate) fn serialize_finite<S: Serializer>(score: &f64, s: S) -> Result<S::Ok, S::Error> {
    if score.is_finite() {
        s.serialize_some(score)
    } else {
        s.serialize_none()
    }
}

/// One node of a recorded search tree.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum TraceNode {
    Max {
        #[serde(skip_serializing_if = "Option::is_none")]
        column: Option<usize>,
        #[serde(serialize_with = "serialize_finite")]
        score: f64,
        children: Vec<TraceNode>,
    },
    Min {
        #[serde(skip_serializing_if = "Option::is_none")]
        column: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        prob: Option<f64>,
        #[serde(serialize_with = "serialize_finite")]
        score: f64,
        children: Vec<TraceNode>,
    },
    Chance {
        column: usize,
        #[serde(serialize_with = "serialize_finite")]
        score: f64,
        children: Vec<TraceNode>,
    },
    Leaf {
        #[serde(skip_serializing_if = "Option::is_none")]
        column: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        prob: Option<f64>,
        #[serde(serialize_with = "serialize_finite")]
        score: f64,
    },
    /// A sibling cut off by an alpha-beta cutoff: never explored at all.
    Pruned { column: usize },
}

impl TraceNode {
    /// Score carried by an explored node. Pruned siblings carry none.
    pub fn score(&self) -> f64 {
        match self {
            TraceNode::Max { score, .. }
            | TraceNode::Min { score, .. }
            | TraceNode::Chance { score, .. }
            | TraceNode::Leaf { score, .. } => *score,
            TraceNode::Pruned { .. } => f64::NAN,
        }
    }
}

/// Rebuilds the tree a search walks, mirroring its bounds and cutoffs.
pub struct Tracer<'a> {
    heuristic: &'a dyn Heuristic,
    prune: bool,
}

impl<'a> Tracer<'a> {
    pub fn new(heuristic: &'a dyn Heuristic, prune: bool) -> Self {
        Tracer { heuristic, prune }
    }

    /// Trace a deterministic minimax search at full depth.
    pub fn minimax(&self, board: &Board, depth: u32) -> Result<TraceNode, MoveError> {
        self.minimax_node(
            board,
            depth,
            true,
            f64::NEG_INFINITY,
            f64::INFINITY,
            None,
        )
    }

    /// Trace an expectiminimax search, capped at [`TRACE_DEPTH_CAP`].
    pub fn expected(&self, board: &Board, depth: u32) -> Result<TraceNode, MoveError> {
        self.expected_node(
            board,
            depth.min(TRACE_DEPTH_CAP),
            true,
            f64::NEG_INFINITY,
            f64::INFINITY,
            None,
            None,
        )
    }

    fn minimax_node(
        &self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
        column: Option<usize>,
    ) -> Result<TraceNode, MoveError> {
        if depth == 0 || board.is_full() {
            return Ok(TraceNode::Leaf {
                column,
                prob: None,
                score: self.heuristic.evaluate(board),
            });
        }

        let mover = if maximizing { Player::Ai } else { Player::Human };
        let valid = board.valid_moves();
        let mut children = Vec::with_capacity(valid.len());
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for (i, &col) in valid.iter().enumerate() {
            let child_board = board.with_move(col, mover.to_cell())?;
            let child =
                self.minimax_node(&child_board, depth - 1, !maximizing, alpha, beta, Some(col))?;
            let score = child.score();
            children.push(child);

            if maximizing {
                best = best.max(score);
                if self.prune {
                    alpha = alpha.max(best);
                }
            } else {
                best = best.min(score);
                if self.prune {
                    beta = beta.min(best);
                }
            }
            if self.prune && alpha >= beta {
                for &rest in &valid[i + 1..] {
                    children.push(TraceNode::Pruned { column: rest });
                }
                break;
            }
        }

        Ok(if maximizing {
            TraceNode::Max {
                column,
                score: best,
                children,
            }
        } else {
            TraceNode::Min {
                column,
                prob: None,
                score: best,
                children,
            }
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn expected_node(
        &self,
        board: &Board,
        depth: u32,
        is_max: bool,
        mut alpha: f64,
        mut beta: f64,
        column: Option<usize>,
        prob: Option<f64>,
    ) -> Result<TraceNode, MoveError> {
        if depth == 0 || board.is_full() {
            return Ok(TraceNode::Leaf {
                column,
                prob,
                score: self.heuristic.evaluate(board),
            });
        }

        let valid = board.valid_moves();
        let mut children = Vec::with_capacity(valid.len());

        if is_max {
            let mut best = f64::NEG_INFINITY;
            for (i, &col) in valid.iter().enumerate() {
                let chance = self.chance_node(board, col, depth, alpha, beta)?;
                best = best.max(chance.score());
                children.push(chance);

                if self.prune {
                    alpha = alpha.max(best);
                    if alpha >= beta {
                        for &rest in &valid[i + 1..] {
                            children.push(TraceNode::Pruned { column: rest });
                        }
                        break;
                    }
                }
            }
            Ok(TraceNode::Max {
                column,
                score: best,
                children,
            })
        } else {
            let mut best = f64::INFINITY;
            for (i, &col) in valid.iter().enumerate() {
                let child_board = board.with_move(col, Cell::Human)?;
                let child = self.expected_node(
                    &child_board,
                    depth - 1,
                    true,
                    alpha,
                    beta,
                    Some(col),
                    None,
                )?;
                best = best.min(child.score());
                children.push(child);

                if self.prune {
                    beta = beta.min(best);
                    if alpha >= beta {
                        for &rest in &valid[i + 1..] {
                            children.push(TraceNode::Pruned { column: rest });
                        }
                        break;
                    }
                }
            }
            Ok(TraceNode::Min {
                column,
                prob,
                score: best,
                children,
            })
        }
    }

    fn chance_node(
        &self,
        board: &Board,
        chosen: usize,
        depth: u32,
        alpha: f64,
        beta: f64,
    ) -> Result<TraceNode, MoveError> {
        let outcomes = chance_outcomes(board, chosen);
        let mut children = Vec::with_capacity(outcomes.len());
        let mut expected = 0.0;

        for (landed, prob) in outcomes {
            let child_board = board.with_move(landed, Cell::Ai)?;
            let child = self.expected_node(
                &child_board,
                depth - 1,
                false,
                alpha,
                beta,
                Some(landed),
                Some(prob),
            )?;
            expected += prob * child.score();
            children.push(child);
        }

        Ok(TraceNode::Chance {
            column: chosen,
            score: expected,
            children,
        })
    }
}
