//! # Connect Four AI
//!
//! A game-tree search engine for a 6×7 Connect Four variant. The engine
//! computes the best column for the AI player using exhaustive minimax,
//! alpha-beta pruned minimax, or expectiminimax (with and without pruning)
//! over a fixed positional heuristic. The expectiminimax variants model
//! uncertainty in the AI's own drops: a chosen column may land in a
//! neighbouring column with fixed probability.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, immutable state transitions
//! - [`ai`] — Heuristic evaluator, search algorithms, chance model, engine facade
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
