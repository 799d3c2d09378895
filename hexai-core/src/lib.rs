//! HEXAI Core - Hex engine and AI
//!
//! This crate provides the core logic for playing Hex against the computer:
//! - Board geometry (n x n rhombus with six-way adjacency)
//! - Board state, validated move application and win detection
//! - Shortest-path evaluation of how close a player is to connecting
//! - Depth-bounded minimax AI

pub mod board;
pub mod error;
pub mod game;
pub mod eval;
pub mod ai;
pub mod config;

// Re-exports for convenient access
pub use board::{neighbors, row_label, Coord, DIRECTIONS};
pub use error::GameError;
pub use game::{Board, Cell, Player};
pub use eval::{path_cost, static_score, UNREACHABLE, WIN_SCORE};
pub use ai::{best_move, score_moves, search, search_parallel, MinimaxAI, SearchResult};
pub use config::EngineConfig;
