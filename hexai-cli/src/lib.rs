//! HEXAI CLI - terminal front end for the Hex engine
//!
//! Stands in for a windowed front end: it owns the authoritative board,
//! validates human input, asks the engine for moves and draws the board
//! as text.

pub mod bootstrap;
pub mod console;
pub mod render;
pub mod session;
pub mod settings;

pub use console::{run_session, ConsoleOptions};
pub use render::{render_board, MAX_BOARD_SIZE};
pub use session::{Command, Session, SessionError, TurnOutcome};
pub use settings::{AppConfig, DisplayConfig};
