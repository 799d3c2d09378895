//! Depth-bounded minimax search

use std::time::Instant;

use crate::board::Coord;
use crate::config::EngineConfig;
use crate::eval::{path_cost, static_score, WIN_SCORE};
use crate::game::{Board, Player};
use rayon::prelude::*;

// ============================================================================
// SEARCH RESULT
// ============================================================================

/// Outcome of a search call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// Decided position, depth cutoff, or nothing left to play
    Terminal(i32),
    /// Best score together with the move that reaches it
    Scored(i32, Coord),
}

impl SearchResult {
    pub fn score(&self) -> i32 {
        match *self {
            SearchResult::Terminal(score) | SearchResult::Scored(score, _) => score,
        }
    }

    pub fn best_move(&self) -> Option<Coord> {
        match *self {
            SearchResult::Terminal(_) => None,
            SearchResult::Scored(_, mv) => Some(mv),
        }
    }

    /// Whether the score reports a decided game
    pub fn is_decisive(&self) -> bool {
        self.score().abs() >= WIN_SCORE
    }
}

// ============================================================================
// MINIMAX
// ============================================================================

/// Best move for `mover` searched `depth` plies deep
///
/// Scores are from `maximizer`'s point of view. Among equal scores the move
/// that comes first in row-major order wins.
pub fn best_move(
    board: &Board,
    depth: i32,
    mover: Player,
    opponent: Player,
    maximizer: Player,
) -> SearchResult {
    search(board, depth, mover, opponent, maximizer).0
}

/// `best_move` plus the number of nodes visited
pub fn search(
    board: &Board,
    depth: i32,
    mover: Player,
    opponent: Player,
    maximizer: Player,
) -> (SearchResult, u64) {
    let mut nodes = 0;
    let result = minimax(board, depth, mover, opponent, maximizer, &mut nodes);
    (result, nodes)
}

/// Child scores for every vacant cell, row-major
///
/// Empty when the position is already decided, at the depth cutoff, or full.
pub fn score_moves(
    board: &Board,
    depth: i32,
    mover: Player,
    opponent: Player,
    maximizer: Player,
) -> Vec<(Coord, i32)> {
    if depth <= 0 || path_cost(board, opponent) == 0 {
        return Vec::new();
    }
    let mut nodes = 0;
    expand(board, depth, mover, opponent, maximizer, &mut nodes)
}

fn minimax(
    board: &Board,
    depth: i32,
    mover: Player,
    opponent: Player,
    maximizer: Player,
    nodes: &mut u64,
) -> SearchResult {
    *nodes += 1;

    // The opponent's last stone may have completed their connection
    if path_cost(board, opponent) == 0 {
        return SearchResult::Terminal(win_score(opponent, maximizer));
    }

    if depth <= 0 {
        return SearchResult::Terminal(static_score(board, mover, opponent, maximizer));
    }

    // An immediate connection can't be beaten; take the first one
    if let Some(mv) = winning_move(board, mover) {
        return SearchResult::Scored(win_score(mover, maximizer), mv);
    }

    let children = expand(board, depth, mover, opponent, maximizer, nodes);
    select(&children, mover == maximizer)
        .unwrap_or_else(|| SearchResult::Terminal(static_score(board, mover, opponent, maximizer)))
}

fn expand(
    board: &Board,
    depth: i32,
    mover: Player,
    opponent: Player,
    maximizer: Player,
    nodes: &mut u64,
) -> Vec<(Coord, i32)> {
    board
        .vacant_cells()
        .into_iter()
        .map(|mv| {
            let child = board.with_stone(mover, mv);
            let score = minimax(&child, depth - 1, opponent, mover, maximizer, nodes).score();
            (mv, score)
        })
        .collect()
}

/// First vacant cell (row-major) that completes `player`'s connection
fn winning_move(board: &Board, player: Player) -> Option<Coord> {
    if path_cost(board, player) != 1 {
        return None;
    }
    board
        .vacant_cells()
        .into_iter()
        .find(|&mv| board.with_stone(player, mv).is_connected(player))
}

fn win_score(winner: Player, maximizer: Player) -> i32 {
    if winner == maximizer {
        WIN_SCORE
    } else {
        -WIN_SCORE
    }
}

/// Pick the max (or min) score; the earliest child wins ties
fn select(children: &[(Coord, i32)], maximize: bool) -> Option<SearchResult> {
    let mut best: Option<(Coord, i32)> = None;
    for &(mv, score) in children {
        let better = match best {
            None => true,
            Some((_, current)) if maximize => score > current,
            Some((_, current)) => score < current,
        };
        if better {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, score)| SearchResult::Scored(score, mv))
}

/// Same result as `search`, with root children searched on the rayon pool
pub fn search_parallel(
    board: &Board,
    depth: i32,
    mover: Player,
    opponent: Player,
    maximizer: Player,
) -> (SearchResult, u64) {
    if depth <= 0 || path_cost(board, opponent) == 0 {
        return search(board, depth, mover, opponent, maximizer);
    }
    if let Some(mv) = winning_move(board, mover) {
        return (SearchResult::Scored(win_score(mover, maximizer), mv), 1);
    }

    // collect() keeps row-major order, so select() breaks ties as before
    let scored: Vec<(Coord, i32, u64)> = board
        .vacant_cells()
        .par_iter()
        .map(|&mv| {
            let child = board.with_stone(mover, mv);
            let (result, nodes) = search(&child, depth - 1, opponent, mover, maximizer);
            (mv, result.score(), nodes)
        })
        .collect();

    let nodes = 1 + scored.iter().map(|&(_, _, n)| n).sum::<u64>();
    let children: Vec<(Coord, i32)> = scored.into_iter().map(|(mv, s, _)| (mv, s)).collect();
    let result = select(&children, mover == maximizer)
        .unwrap_or_else(|| SearchResult::Terminal(static_score(board, mover, opponent, maximizer)));
    (result, nodes)
}

// ============================================================================
// MINIMAX AI
// ============================================================================

/// Minimax player driven by an `EngineConfig`
#[derive(Clone, Debug)]
pub struct MinimaxAI {
    pub config: EngineConfig,
}

impl MinimaxAI {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn with_depth(depth: u32) -> Self {
        Self::new(EngineConfig {
            depth,
            ..Default::default()
        })
    }

    /// Search for `mover`, maximizing for `mover`
    pub fn choose(&self, board: &Board, mover: Player) -> SearchResult {
        let started = Instant::now();
        let depth = self.config.depth as i32;
        let opponent = mover.opponent();

        let (result, nodes) = if self.config.parallel {
            search_parallel(board, depth, mover, opponent, mover)
        } else {
            search(board, depth, mover, opponent, mover)
        };

        tracing::debug!(
            player = ?mover,
            depth,
            nodes,
            score = result.score(),
            best = ?result.best_move().map(|mv| mv.to_string()),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search finished"
        );

        result
    }

    /// Play both sides until someone connects or the board fills
    pub fn play_game(&self, initial: Board, first: Player) -> (Board, Vec<(Player, Coord)>) {
        let mut board = initial;
        let mut history = Vec::new();
        let mut mover = first;

        while board.winner().is_none() {
            let Some(mv) = self.choose(&board, mover).best_move() else {
                break;
            };
            board = board.with_stone(mover, mv);
            history.push((mover, mv));
            mover = mover.opponent();
        }

        (board, history)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::UNREACHABLE;

    #[test]
    fn test_depth_zero_is_static_difference() {
        let board = Board::from_rows(&["B..", ".R.", "..."]).unwrap();
        for mover in [Player::Blue, Player::Red] {
            let opponent = mover.opponent();
            let expected = path_cost(&board, opponent) as i32 - path_cost(&board, mover) as i32;
            assert_eq!(
                best_move(&board, 0, mover, opponent, mover),
                SearchResult::Terminal(expected)
            );
            assert_eq!(best_move(&board, -3, mover, opponent, mover).best_move(), None);
        }
    }

    #[test]
    fn test_finds_immediate_win() {
        // Blue completes row 1 by playing B3
        let board = Board::from_rows(&[
            "R...",
            "BB.B",
            "R...",
            "R...",
        ])
        .unwrap();
        for depth in 1..=3 {
            let result = best_move(&board, depth, Player::Blue, Player::Red, Player::Blue);
            assert_eq!(result, SearchResult::Scored(WIN_SCORE, Coord::new(1, 2)), "depth {}", depth);
        }
    }

    #[test]
    fn test_immediate_win_beats_earlier_forced_win() {
        // A3 threatens both B3 and A4, so it also wins within three plies,
        // but B3 connects right away
        let board = Board::from_rows(&[
            "R...",
            "BB.B",
            "R...",
            "R...",
        ])
        .unwrap();
        let scores = score_moves(&board, 3, Player::Blue, Player::Red, Player::Blue);
        let first_win = scores.iter().find(|&&(_, s)| s == WIN_SCORE).unwrap().0;
        assert_eq!(first_win, Coord::new(0, 2));
        assert!(scores.contains(&(Coord::new(1, 2), WIN_SCORE)));

        let result = best_move(&board, 3, Player::Blue, Player::Red, Player::Blue);
        assert_eq!(result, SearchResult::Scored(WIN_SCORE, Coord::new(1, 2)));
        assert_eq!(winning_move(&board, Player::Blue), Some(Coord::new(1, 2)));
    }

    #[test]
    fn test_blocks_opponent_win() {
        // Red finishes column 0 at C1 unless Blue takes it
        let board = Board::from_rows(&[
            "R..",
            "R..",
            "...",
        ])
        .unwrap();
        let result = best_move(&board, 2, Player::Blue, Player::Red, Player::Blue);
        assert_eq!(result.best_move(), Some(Coord::new(2, 0)));
        assert!(result.score() > -WIN_SCORE);
    }

    #[test]
    fn test_already_decided_position() {
        let won = Board::from_rows(&["R.", "R."]).unwrap();
        assert_eq!(
            best_move(&won, 3, Player::Blue, Player::Red, Player::Blue),
            SearchResult::Terminal(-WIN_SCORE)
        );
        assert_eq!(
            best_move(&won, 3, Player::Blue, Player::Red, Player::Red),
            SearchResult::Terminal(WIN_SCORE)
        );
    }

    #[test]
    fn test_full_board_terminates() {
        // Red's anti-diagonal joins top and bottom; Blue is cut off
        let board = Board::from_rows(&["BR", "RB"]).unwrap();
        assert!(board.vacant_cells().is_empty());

        let result = best_move(&board, 4, Player::Red, Player::Blue, Player::Blue);
        assert_eq!(result, SearchResult::Terminal(-(UNREACHABLE as i32)));

        let result = best_move(&board, 4, Player::Blue, Player::Red, Player::Blue);
        assert_eq!(result, SearchResult::Terminal(-WIN_SCORE));
        assert!(result.is_decisive());
    }

    #[test]
    fn test_ties_go_to_first_row_major_move() {
        let board = Board::new(3).unwrap();
        let scores = score_moves(&board, 1, Player::Blue, Player::Red, Player::Blue);
        assert_eq!(scores.len(), 9);
        let top = scores.iter().map(|&(_, s)| s).max().unwrap();
        let first_best = scores.iter().find(|&&(_, s)| s == top).unwrap().0;

        let result = best_move(&board, 1, Player::Blue, Player::Red, Player::Blue);
        assert_eq!(result, SearchResult::Scored(top, first_best));
        for _ in 0..5 {
            assert_eq!(best_move(&board, 1, Player::Blue, Player::Red, Player::Blue), result);
        }
    }

    #[test]
    fn test_minimizer_picks_lowest() {
        let board = Board::from_rows(&["B..", "...", "..."]).unwrap();
        let scores = score_moves(&board, 1, Player::Red, Player::Blue, Player::Blue);
        let low = scores.iter().map(|&(_, s)| s).min().unwrap();
        let first_low = scores.iter().find(|&&(_, s)| s == low).unwrap().0;
        assert_eq!(
            best_move(&board, 1, Player::Red, Player::Blue, Player::Blue),
            SearchResult::Scored(low, first_low)
        );
    }

    #[test]
    fn test_select_strict_comparison() {
        let children = vec![
            (Coord::new(0, 1), 3),
            (Coord::new(1, 0), 5),
            (Coord::new(1, 1), 5),
            (Coord::new(2, 0), -1),
            (Coord::new(2, 2), -1),
        ];
        assert_eq!(select(&children, true), Some(SearchResult::Scored(5, Coord::new(1, 0))));
        assert_eq!(select(&children, false), Some(SearchResult::Scored(-1, Coord::new(2, 0))));
        assert_eq!(select(&[], true), None);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let board = Board::from_rows(&["B...", ".R..", "....", "...."]).unwrap();
        for depth in 0..=2 {
            let (parallel, parallel_nodes) =
                search_parallel(&board, depth, Player::Red, Player::Blue, Player::Red);
            let (sequential, sequential_nodes) =
                search(&board, depth, Player::Red, Player::Blue, Player::Red);
            assert_eq!(parallel, sequential);
            assert_eq!(parallel_nodes, sequential_nodes);
        }
    }

    #[test]
    fn test_play_game_ends_with_winner() {
        let ai = MinimaxAI::with_depth(1);
        let (board, history) = ai.play_game(Board::new(3).unwrap(), Player::Blue);
        assert!(!history.is_empty());
        assert!(board.winner().is_some());
        assert_eq!(history[0].0, Player::Blue);
    }
}
