use crate::ai::chance::chance_outcomes;
use crate::ai::heuristic::Heuristic;
use crate::ai::SearchStats;
use crate::game::{Board, Cell, MoveError, CENTER_COL};

/// Expectiminimax: a three-tier recursion alternating Max → Chance → Min.
/// Only the AI's moves pass through a chance node; the human always moves
/// deterministically. One searcher covers the plain and pruned variants
/// via the `prune` flag.
pub struct Expectiminimax<'a> {
    heuristic: &'a dyn Heuristic,
    prune: bool,
}

impl<'a> Expectiminimax<'a> {
    pub fn new(heuristic: &'a dyn Heuristic, prune: bool) -> Self {
        Expectiminimax { heuristic, prune }
    }

    /// Root move selection. Candidates are scored exactly as in the Max
    /// layer; an exact tie in expected value is broken towards the column
    /// closer to the center (root only — one layer down, ties keep the
    /// first-seen candidate).
    pub fn choose(
        &self,
        board: &Board,
        depth: u32,
        stats: &mut SearchStats,
    ) -> Result<(f64, Option<usize>), MoveError> {
        let valid = board.valid_moves();
        if valid.is_empty() {
            stats.leaves += 1;
            return Ok((self.heuristic.evaluate(board), None));
        }

        let mut best_col: Option<usize> = None;
        let mut best_val = f64::NEG_INFINITY;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        for col in valid {
            let expected = self.chance_value(board, col, depth, alpha, beta, stats)?;
            let better = match best_col {
                None => true,
                Some(best) => {
                    expected > best_val
                        || (expected == best_val
                            && center_distance(col) < center_distance(best))
                }
            };
            if better {
                best_val = expected;
                best_col = Some(col);
            }
            if self.prune {
                alpha = alpha.max(best_val);
                if alpha >= beta {
                    break;
                }
            }
        }

        Ok((best_val, best_col))
    }

    /// Chance layer: weight each realized landing column by its probability
    /// and sum the Min-layer values of the resulting boards.
    fn chance_value(
        &self,
        board: &Board,
        chosen: usize,
        depth: u32,
        alpha: f64,
        beta: f64,
        stats: &mut SearchStats,
    ) -> Result<f64, MoveError> {
        let mut expected = 0.0;
        for (landed, prob) in chance_outcomes(board, chosen) {
            let child = board.with_move(landed, Cell::Ai)?;
            expected +=
                prob * self.min_node(&child, depth.saturating_sub(1), alpha, beta, stats)?;
        }
        Ok(expected)
    }

    fn max_node(
        &self,
        board: &Board,
        depth: u32,
        mut alpha: f64,
        beta: f64,
        stats: &mut SearchStats,
    ) -> Result<f64, MoveError> {
        stats.nodes += 1;
        if depth == 0 || board.is_full() {
            stats.leaves += 1;
            return Ok(self.heuristic.evaluate(board));
        }

        let mut value = f64::NEG_INFINITY;
        for col in board.valid_moves() {
            let expected = self.chance_value(board, col, depth, alpha, beta, stats)?;
            value = value.max(expected);
            if self.prune {
                alpha = alpha.max(value);
                if alpha >= beta {
                    return Ok(value);
                }
            }
        }
        Ok(value)
    }

    fn min_node(
        &self,
        board: &Board,
        depth: u32,
        alpha: f64,
        mut beta: f64,
        stats: &mut SearchStats,
    ) -> Result<f64, MoveError> {
        stats.nodes += 1;
        if depth == 0 || board.is_full() {
            stats.leaves += 1;
            return Ok(self.heuristic.evaluate(board));
        }

        let mut value = f64::INFINITY;
        for col in board.valid_moves() {
            let child = board.with_move(col, Cell::Human)?;
            value = value.min(self.max_node(&child, depth - 1, alpha, beta, stats)?);
            if self.prune {
                beta = beta.min(value);
                if alpha >= beta {
                    return Ok(value);
                }
            }
        }
        Ok(value)
    }
}

fn center_distance(col: usize) -> usize {
    col.abs_diff(CENTER_COL)
}
