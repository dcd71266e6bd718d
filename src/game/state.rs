use super::{Board, MoveError, Player};

/// Immutable game state: a board plus the player to move. The game is over
/// exactly when the board is full; there is no in-state win detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Create initial game state with the AI to move.
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Ai,
        }
    }

    /// Create a state from an existing position.
    pub fn from_board(board: Board, current_player: Player) -> Self {
        GameState {
            board,
            current_player,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The game ends when no column accepts a piece.
    pub fn is_terminal(&self) -> bool {
        self.board.is_full()
    }

    /// Get list of legal columns (not full), in ascending order.
    pub fn legal_actions(&self) -> Vec<usize> {
        self.board.valid_moves()
    }

    /// Apply a move and return the new state (immutable).
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let board = self.board.with_move(column, self.current_player.to_cell())?;
        Ok(GameState {
            board,
            current_player: self.current_player.other(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Ai);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn apply_move_places_and_toggles() {
        let state = GameState::initial();
        let next = state.apply_move(3).unwrap();

        assert_eq!(next.current_player(), Player::Human);
        assert_eq!(next.board().get(5, 3), Cell::Ai);
        // prior state untouched
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn full_column_propagates_error() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state = state.apply_move(0).unwrap();
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn terminal_when_board_full() {
        let mut state = GameState::initial();
        for col in 0..7 {
            for _ in 0..6 {
                state = state.apply_move(col).unwrap();
            }
        }
        assert!(state.is_terminal());
        assert!(state.legal_actions().is_empty());
    }
}
