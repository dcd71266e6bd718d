use super::board::Cell;

/// The two sides of the game. The AI is the maximizer, the human the
/// minimizer; the search assumes the human plays to minimize the AI's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Ai,
    Human,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Ai => Player::Human,
            Player::Human => Player::Ai,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Ai => Cell::Ai,
            Player::Human => Cell::Human,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Ai => "AI",
            Player::Human => "Human",
        }
    }
}
