//! Interactive game session: turn order, win announcement, restart
//!
//! The engine core has no notion of whose turn it is; the session owns the
//! authoritative board and that bookkeeping.

use hexai_core::{Board, Coord, GameError, MinimaxAI, Player, SearchResult};

/// A line typed at the game prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Place(Coord),
    Ai,
    Restart,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, GameError> {
        let word = line.trim().to_ascii_lowercase();
        match word.as_str() {
            "ai" | "i" => Ok(Command::Ai),
            "restart" | "r" => Ok(Command::Restart),
            "show" | "s" => Ok(Command::Show),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => word.parse().map(Command::Place),
        }
    }
}

pub const HELP: &str = "\
Commands:
  <cell>     place a stone, e.g. B3 (row letter, column number)
  ai, i      let the engine move for the side to play
  restart, r start a new game on an empty board
  show, s    redraw the board
  help, h    show this help
  quit, q    leave";

/// Reasons a move request is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("the game is over: Player {} ({:?}) won", .0.number(), .0)]
    GameOver(Player),

    #[error("it is not the human player's turn")]
    NotYourTurn,
}

/// Result of a move that was accepted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player: Player,
    pub coord: Coord,
    pub winner: Option<Player>,
}

/// One game of human versus engine
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    to_move: Player,
    human: Player,
    winner: Option<Player>,
    engine: MinimaxAI,
}

impl Session {
    pub fn new(size: usize, human: Player, engine: MinimaxAI) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(size)?,
            to_move: Player::Blue,
            human,
            winner: None,
            engine,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whether the engine should move next without being asked
    pub fn engine_to_move(&self) -> bool {
        self.winner.is_none() && self.to_move != self.human
    }

    /// Human stone at `coord`
    pub fn play_human(&mut self, coord: Coord) -> Result<TurnOutcome, SessionError> {
        self.ensure_ongoing()?;
        if self.to_move != self.human {
            return Err(SessionError::NotYourTurn);
        }
        self.place(coord)
    }

    /// Engine move for whichever side is to play
    pub fn play_engine(&mut self) -> Result<(TurnOutcome, SearchResult), SessionError> {
        self.ensure_ongoing()?;
        let result = self.engine.choose(&self.board, self.to_move);
        let coord = result.best_move().ok_or(GameError::NoVacantCells)?;
        let outcome = self.place(coord)?;
        Ok((outcome, result))
    }

    /// Discard the board and start over with Blue to move
    pub fn restart(&mut self) {
        self.board = self.board.cleared();
        self.to_move = Player::Blue;
        self.winner = None;
        tracing::info!(size = self.board.size(), "game restarted");
    }

    fn ensure_ongoing(&self) -> Result<(), SessionError> {
        match self.winner {
            Some(winner) => Err(SessionError::GameOver(winner)),
            None => Ok(()),
        }
    }

    fn place(&mut self, coord: Coord) -> Result<TurnOutcome, SessionError> {
        let player = self.to_move;
        self.board.play(player, coord)?;
        tracing::info!(player = ?player, cell = %coord, "stone placed");

        if self.board.is_connected(player) {
            self.winner = Some(player);
            tracing::info!(winner = ?player, "game over");
        }
        self.to_move = player.opponent();

        Ok(TurnOutcome {
            player,
            coord,
            winner: self.winner,
        })
    }
}
