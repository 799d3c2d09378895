//! Selfplay command - engine plays both sides
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_out(), report_result()
//! - Level 4: formatting

use anyhow::Result;
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use hexai_cli::{render_board, AppConfig, MAX_BOARD_SIZE};
use hexai_core::config::MAX_DEPTH;
use hexai_core::{Board, EngineConfig, MinimaxAI, Player};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SelfplayArgs {
    /// Board size n
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u8).range(1..=MAX_BOARD_SIZE as i64))]
    pub size: u8,

    /// Search depth (defaults to the config file value)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_DEPTH as i64))]
    pub depth: Option<u32>,

    /// Seed for a random opening stone (deterministic game when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search root moves in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Print a JSON summary instead of the board
    #[arg(long)]
    pub json: bool,
}

/// Finished game
#[derive(Debug, Serialize)]
struct SelfplayReport {
    size: usize,
    depth: u32,
    winner: Option<Player>,
    moves: Vec<String>,
    board: Board,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: SelfplayArgs, config: AppConfig) -> Result<()> {
    let engine = EngineConfig {
        depth: args.depth.unwrap_or(config.engine.depth),
        parallel: args.parallel || config.engine.parallel,
    };
    engine.validate()?;

    tracing::info!(size = args.size, depth = engine.depth, seed = ?args.seed, "starting selfplay");

    let report = play_out(Board::new(args.size as usize)?, engine, args.seed)?;
    report_result(&report, &config, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn play_out(board: Board, engine: EngineConfig, seed: Option<u64>) -> Result<SelfplayReport> {
    let depth = engine.depth;
    let ai = MinimaxAI::new(engine);
    let mut moves = Vec::new();
    let mut start = board;
    let mut first = Player::Blue;

    // Random opening so seeded runs explore different games
    if let Some(seed) = seed {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        if let Some(&opening) = start.vacant_cells().choose(&mut rng) {
            start.play(Player::Blue, opening)?;
            moves.push(format!("{:?} {}", Player::Blue, opening));
            first = Player::Red;
        }
    }

    let (final_board, history) = ai.play_game(start, first);
    moves.extend(history.iter().map(|(player, mv)| format!("{:?} {}", player, mv)));

    Ok(SelfplayReport {
        size: final_board.size(),
        depth,
        winner: final_board.winner(),
        moves,
        board: final_board,
    })
}

fn report_result(report: &SelfplayReport, config: &AppConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for (i, mv) in report.moves.iter().enumerate() {
        println!("{:>3}. {}", i + 1, mv);
    }
    print!("{}", render_board(&report.board, &config.display));
    match report.winner {
        Some(winner) => println!("Player {} ({:?}) won!", winner.number(), winner),
        None => println!("No winner."),
    }
    Ok(())
}
