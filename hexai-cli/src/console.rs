//! Read-eval loop for an interactive game
//!
//! Generic over the reader and writer so scripted games can drive it.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::render::{legend, render_board};
use crate::session::{Command, Session, TurnOutcome, HELP};
use crate::settings::DisplayConfig;

/// Loop options
#[derive(Clone, Debug)]
pub struct ConsoleOptions {
    /// Engine answers human moves without waiting for `ai`
    pub auto_reply: bool,
    pub display: DisplayConfig,
}

/// Run commands from `input` until `quit` or end of input
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    options: &ConsoleOptions,
) -> Result<()> {
    writeln!(output, "{}", legend(&options.display))?;
    writeln!(output, "Type 'help' for commands.")?;
    write!(output, "{}", render_board(session.board(), &options.display))?;

    loop {
        if options.auto_reply && session.engine_to_move() {
            engine_turn(session, output, options)?;
        }

        write!(output, "{:?} to move> ", session.to_move())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "Invalid input: {}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => return Ok(()),
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Show => write!(output, "{}", render_board(session.board(), &options.display))?,
            Command::Restart => {
                session.restart();
                writeln!(output, "New game.")?;
                write!(output, "{}", render_board(session.board(), &options.display))?;
            }
            Command::Ai => engine_turn(session, output, options)?,
            Command::Place(coord) => match session.play_human(coord) {
                Ok(outcome) => report_turn(session, output, options, &outcome)?,
                Err(e) => writeln!(output, "Move rejected: {}", e)?,
            },
        }
    }
}

fn engine_turn<W: Write>(session: &mut Session, output: &mut W, options: &ConsoleOptions) -> Result<()> {
    match session.play_engine() {
        Ok((outcome, result)) => {
            writeln!(
                output,
                "Engine ({:?}) plays {} (score {})",
                outcome.player,
                outcome.coord,
                result.score()
            )?;
            report_turn(session, output, options, &outcome)
        }
        Err(e) => {
            writeln!(output, "Engine cannot move: {}", e)?;
            Ok(())
        }
    }
}

fn report_turn<W: Write>(
    session: &Session,
    output: &mut W,
    options: &ConsoleOptions,
    outcome: &TurnOutcome,
) -> Result<()> {
    write!(output, "{}", render_board(session.board(), &options.display))?;
    if let Some(winner) = outcome.winner {
        writeln!(output, "Player {} ({:?}) won!", winner.number(), winner)?;
        writeln!(output, "Type 'restart' for a new game or 'quit' to leave.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexai_core::{MinimaxAI, Player};
    use std::io::Cursor;

    fn run(script: &str, size: usize, auto_reply: bool) -> (Session, String) {
        let mut session = Session::new(size, Player::Blue, MinimaxAI::with_depth(1)).unwrap();
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let options = ConsoleOptions {
            auto_reply,
            display: DisplayConfig::default(),
        };
        run_session(&mut session, &mut input, &mut output, &options).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_bad_input_is_reported_not_fatal() {
        let (session, text) = run("zz\nA9\n\nA1\nA1\nquit\n", 3, false);
        assert!(text.contains("Invalid input: invalid cell notation 'zz'"));
        assert!(text.contains("Move rejected: cell (0, 8) is outside a 3x3 board"));
        assert!(text.contains("Move rejected: it is not the human player's turn"));
        assert_eq!(session.board().vacant_cells().len(), 8);
    }

    #[test]
    fn test_single_cell_win_and_restart() {
        let (session, text) = run("a1\nb1\nrestart\n", 1, true);
        assert!(text.contains("Player 1 (Blue) won!"));
        assert!(text.contains("Move rejected: the game is over"));
        assert!(text.contains("New game."));
        assert_eq!(session.winner(), None);
    }

    #[test]
    fn test_auto_reply_moves_engine() {
        let (session, text) = run("b2\nq\n", 3, true);
        assert!(text.contains("Engine (Red) plays"));
        assert_eq!(session.board().vacant_cells().len(), 7);
        assert_eq!(session.to_move(), Player::Blue);
    }
}
