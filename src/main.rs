use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four_ai::ai::{Algorithm, Engine};
use connect_four_ai::config::EngineConfig;
use connect_four_ai::game::Board;

/// Compute the best move for a Connect Four position.
#[derive(Parser)]
#[command(name = "connect-four-ai", about = "Connect Four game-tree search engine")]
struct Cli {
    /// Path to a board file: 6 rows of 7 markers (X = AI, O = human, . = empty).
    /// Uses an empty board when omitted.
    #[arg(long)]
    board: Option<PathBuf>,

    /// Search algorithm: minimax, alphabeta, expected or expected_prune
    #[arg(long)]
    algorithm: Option<String>,

    /// Search depth override
    #[arg(long)]
    depth: Option<u32>,

    /// Include the search tree in the output
    #[arg(long)]
    tree: bool,

    /// Print the heuristic value of the board and exit
    #[arg(long)]
    evaluate: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    if let Some(algorithm) = cli.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if cli.tree {
        config.include_tree = true;
    }
    config.validate()?;

    let board = match &cli.board {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading board file {}", path.display()))?;
            text.parse::<Board>()
                .with_context(|| format!("parsing board file {}", path.display()))?
        }
        None => Board::new(),
    };

    let engine = Engine::new();
    if cli.evaluate {
        println!("{}", engine.evaluate_board(&board));
        return Ok(());
    }

    let algorithm: Algorithm = config.algorithm()?;
    let report = engine.compute_move(&board, algorithm, config.depth, config.include_tree)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
