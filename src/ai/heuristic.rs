use crate::game::{Board, Cell, CENTER_COL, COLS, ROWS};

/// Scores a board from the AI's perspective: positive favours the AI,
/// negative favours the human. Queried only at search leaves.
pub trait Heuristic {
    fn evaluate(&self, board: &Board) -> f64;
}

/// Weight of a 4-cell window holding `n` pieces of a single player.
const WINDOW_WEIGHTS: [f64; 5] = [0.0, 1.0, 10.0, 100.0, 100_000.0];
/// Bonus per AI piece in the center column.
const CENTER_BONUS: f64 = 3.0;

/// The fixed evaluator: every contiguous 4-cell window (horizontal, vertical
/// and both diagonals) scores `±weight(n)` when only one player occupies it
/// and 0 when contested, plus a center-column bonus for the AI.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(window: [Cell; 4]) -> f64 {
        let ai = window.iter().filter(|&&c| c == Cell::Ai).count();
        let human = window.iter().filter(|&&c| c == Cell::Human).count();
        if ai > 0 && human > 0 {
            return 0.0;
        }
        if ai > 0 {
            WINDOW_WEIGHTS[ai]
        } else if human > 0 {
            -WINDOW_WEIGHTS[human]
        } else {
            0.0
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board) -> f64 {
        let mut score = 0.0;

        for row in 0..ROWS {
            if board.get(row, CENTER_COL) == Cell::Ai {
                score += CENTER_BONUS;
            }
        }

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - 4 {
                score +=
                    Self::score_window(std::array::from_fn(|i| board.get(row, col + i)));
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - 4 {
                score +=
                    Self::score_window(std::array::from_fn(|i| board.get(row + i, col)));
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..=ROWS - 4 {
            for col in 0..=COLS - 4 {
                score += Self::score_window(std::array::from_fn(|i| {
                    board.get(row + i, col + i)
                }));
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 3..ROWS {
            for col in 0..=COLS - 4 {
                score += Self::score_window(std::array::from_fn(|i| {
                    board.get(row - i, col + i)
                }));
            }
        }

        score
    }
}
