//! Play command - human versus engine in the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: resolve_settings(), run_session()
//! - Level 3: (delegated to hexai_cli::console)
//! - Level 4: argument types

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use hexai_cli::bootstrap::prompt_number;
use hexai_cli::{run_session, AppConfig, ConsoleOptions, Session, MAX_BOARD_SIZE};
use hexai_core::config::MAX_DEPTH;
use hexai_core::{EngineConfig, MinimaxAI, Player};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// Player 1, moves first, connects left-right
    Blue,
    /// Player 2, connects top-bottom
    Red,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Blue => Player::Blue,
            Side::Red => Player::Red,
        }
    }
}

#[derive(Args)]
pub struct PlayArgs {
    /// Board size n (asked for when omitted)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_BOARD_SIZE as i64))]
    pub size: Option<u8>,

    /// Search depth in plies (asked for when omitted)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_DEPTH as i64))]
    pub depth: Option<u32>,

    /// Side the human plays
    #[arg(long, value_enum, default_value = "blue")]
    pub human: Side,

    /// Wait for the `ai` command instead of answering every human move
    #[arg(long)]
    pub manual: bool,

    /// Search root moves in parallel
    #[arg(long)]
    pub parallel: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Settle board size and engine settings (prompting if needed)
/// 2. Hand the terminal to the interactive loop
pub fn run(args: PlayArgs, config: AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let Some((size, engine)) = resolve_settings(&args, &config, &mut input, &mut output)? else {
        return Ok(());
    };

    tracing::info!(size, depth = engine.depth, human = ?args.human, "starting game");

    let mut session = Session::new(size, args.human.into(), MinimaxAI::new(engine))?;
    let options = ConsoleOptions {
        auto_reply: !args.manual,
        display: config.display,
    };

    run_session(&mut session, &mut input, &mut output, &options)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Board size and engine config; `None` if input ended during a prompt
fn resolve_settings<R: BufRead, W: Write>(
    args: &PlayArgs,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Option<(usize, EngineConfig)>> {
    let size = match args.size {
        Some(size) => size as usize,
        None => match prompt_number(input, output, "Enter the board size n", 1, MAX_BOARD_SIZE, None)? {
            Some(size) => size,
            None => return Ok(None),
        },
    };

    let depth = match args.depth {
        Some(depth) => depth,
        None => {
            let default = Some(config.engine.depth as usize);
            match prompt_number(input, output, "Enter the search depth d", 0, MAX_DEPTH as usize, default)? {
                Some(depth) => depth as u32,
                None => return Ok(None),
            }
        }
    };

    let engine = EngineConfig {
        depth,
        parallel: args.parallel || config.engine.parallel,
    };
    engine.validate().context("Invalid engine settings")?;

    writeln!(output, "A new {}x{} board has been created.", size, size)?;
    Ok(Some((size, engine)))
}
