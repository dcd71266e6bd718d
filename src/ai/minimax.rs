use crate::ai::heuristic::Heuristic;
use crate::ai::SearchStats;
use crate::game::{Board, MoveError, Player};

/// Depth-limited minimax over deterministic play for both sides. One
/// searcher covers the plain and alpha-beta variants: pruning applies in
/// exactly two places, the bound update and the sibling early-exit, and
/// never changes the result — only the nodes visited.
pub struct Minimax<'a> {
    heuristic: &'a dyn Heuristic,
    prune: bool,
}

impl<'a> Minimax<'a> {
    pub fn new(heuristic: &'a dyn Heuristic, prune: bool) -> Self {
        Minimax { heuristic, prune }
    }

    /// Search from the root with the AI to move. Returns the score and the
    /// column that produced it, or `None` when the board is terminal at
    /// entry.
    pub fn search(
        &self,
        board: &Board,
        depth: u32,
        stats: &mut SearchStats,
    ) -> Result<(f64, Option<usize>), MoveError> {
        self.node(
            board,
            depth,
            true,
            f64::NEG_INFINITY,
            f64::INFINITY,
            stats,
        )
    }

    fn node(
        &self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
        stats: &mut SearchStats,
    ) -> Result<(f64, Option<usize>), MoveError> {
        stats.nodes += 1;
        if depth == 0 || board.is_full() {
            stats.leaves += 1;
            return Ok((self.heuristic.evaluate(board), None));
        }

        let mover = if maximizing { Player::Ai } else { Player::Human };
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        // Ascending column order: ties keep the first-seen column via the
        // strict comparisons below.
        for col in board.valid_moves() {
            let child = board.with_move(col, mover.to_cell())?;
            let (score, _) = self.node(&child, depth - 1, !maximizing, alpha, beta, stats)?;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(col);
                }
                if self.prune {
                    alpha = alpha.max(best_score);
                    if alpha >= beta {
                        break;
                    }
                }
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(col);
                }
                if self.prune {
                    beta = beta.min(best_score);
                    if alpha >= beta {
                        break;
                    }
                }
            }
        }

        Ok((best_score, best_move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::WindowHeuristic;

    const MIDGAME: &str = "\
        .......\n\
        .......\n\
        ..XO...\n\
        .XOXO..\n\
        XOXOXO.\n\
        OXOXOX.\n";

    fn search(board: &Board, depth: u32, prune: bool) -> ((f64, Option<usize>), SearchStats) {
        let mut stats = SearchStats::default();
        let result = Minimax::new(&WindowHeuristic, prune)
            .search(board, depth, &mut stats)
            .unwrap();
        (result, stats)
    }

    #[test]
    fn empty_board_depth_one_picks_center() {
        // All columns are symmetric at depth 1 except for the center bonus.
        let ((score, best), _) = search(&Board::new(), 1, false);
        assert_eq!(best, Some(3));
        assert_eq!(score, 10.0);
    }

    #[test]
    fn terminal_board_returns_no_move() {
        let mut board = Board::new();
        for col in 0..7 {
            for _ in 0..6 {
                board = board.with_move(col, crate::game::Cell::Ai).unwrap();
            }
        }
        let ((score, best), stats) = search(&board, 3, false);
        assert_eq!(best, None);
        assert_eq!(score, WindowHeuristic.evaluate(&board));
        assert_eq!(stats.leaves, 1);
    }

    #[test]
    fn depth_zero_evaluates_in_place() {
        let board: Board = MIDGAME.parse().unwrap();
        let ((score, best), _) = search(&board, 0, false);
        assert_eq!(best, None);
        assert_eq!(score, WindowHeuristic.evaluate(&board));
    }

    #[test]
    fn ties_keep_the_lowest_column() {
        // Only the two outer columns are open; the filled middle is mirror
        // symmetric, so both moves score identically and the first-seen
        // column must win.
        let board: Board = "\
            .XOXOX.\n\
            .OXOXO.\n\
            .XOXOX.\n\
            .OXOXO.\n\
            .XOXOX.\n\
            .OXOXO.\n"
            .parse()
            .unwrap();
        let ((_, best), _) = search(&board, 1, false);
        assert_eq!(best, Some(0));
        let ((_, best), _) = search(&board, 1, true);
        assert_eq!(best, Some(0));
    }

    #[test]
    fn pruning_never_changes_the_result() {
        let boards: Vec<Board> = vec![
            Board::new(),
            MIDGAME.parse().unwrap(),
            "\
                .......\n\
                .......\n\
                .......\n\
                ...X...\n\
                ..OX...\n\
                .OXXOO.\n"
                .parse()
                .unwrap(),
        ];
        for board in &boards {
            for depth in 1..=4 {
                let (plain, _) = search(board, depth, false);
                let (pruned, _) = search(board, depth, true);
                assert_eq!(plain, pruned, "depth {depth} diverged on:\n{board}");
            }
        }
    }

    #[test]
    fn pruning_explores_strictly_fewer_leaves() {
        let board: Board = MIDGAME.parse().unwrap();
        let (plain, plain_stats) = search(&board, 4, false);
        let (pruned, pruned_stats) = search(&board, 4, true);
        assert_eq!(plain, pruned);
        assert!(
            pruned_stats.leaves < plain_stats.leaves,
            "pruned {} vs plain {}",
            pruned_stats.leaves,
            plain_stats.leaves
        );
        assert!(pruned_stats.nodes < plain_stats.nodes);
    }
}
