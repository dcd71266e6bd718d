//! Core Connect Four game logic: board representation, player types, and
//! immutable state transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, CENTER_COL, COLS, ROWS};
pub use player::Player;
pub use state::GameState;
