//! Board state, move application and win detection

use crate::board::{neighbors, Coord};
use crate::error::GameError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
///
/// Blue (player 1) connects the left and right edges, Red (player 2)
/// connects the top and bottom edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Blue = 0,
    Red = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    /// 1 for Blue, 2 for Red
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Red is evaluated on the transposed grid
    fn is_transposed(self) -> bool {
        self == Player::Red
    }
}

/// Contents of one cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Owned(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Square hex board (clone to explore)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    /// Row-major cell states
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty n x n board
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Empty board of the same size
    pub fn cleared(&self) -> Self {
        Self {
            size: self.size,
            cells: vec![Cell::Empty; self.cells.len()],
        }
    }

    /// Build a board from rows of `.`, `B` and `R` characters
    ///
    /// Whitespace inside a row is ignored, so `"B . R"` and `"B.R"` are equal.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GameError> {
        let mut board = Board::new(rows.len())?;
        for (row, text) in rows.iter().enumerate() {
            let glyphs: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != board.size {
                return Err(GameError::InvalidSize(glyphs.len()));
            }
            for (col, glyph) in glyphs.into_iter().enumerate() {
                let cell = match glyph.to_ascii_uppercase() {
                    'B' => Cell::Owned(Player::Blue),
                    'R' => Cell::Owned(Player::Red),
                    '.' => Cell::Empty,
                    _ => return Err(GameError::InvalidNotation(text.to_string())),
                };
                let idx = board.index(Coord::new(row, col));
                board.cells[idx] = cell;
            }
        }
        Ok(board)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell state at `coord`, or `None` off the board
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        coord.is_valid(self.size).then(|| self.cells[self.index(coord)])
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i / size, i % size), cell))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Return a copy of the board with `player`'s stone at (row, col)
    pub fn apply_move(&self, player: Player, row: usize, col: usize) -> Result<Self, GameError> {
        let mut next = self.clone();
        next.play(player, Coord::new(row, col))?;
        Ok(next)
    }

    /// Place `player`'s stone at `coord` in place
    pub fn play(&mut self, player: Player, coord: Coord) -> Result<(), GameError> {
        let cell = self.get(coord).ok_or(GameError::OutOfRange {
            row: coord.row,
            col: coord.col,
            size: self.size,
        })?;
        if !cell.is_empty() {
            return Err(GameError::CellOccupied(coord));
        }
        let idx = self.index(coord);
        self.cells[idx] = Cell::Owned(player);
        Ok(())
    }

    /// Copy with a stone on a cell already known to be vacant
    pub(crate) fn with_stone(&self, player: Player, coord: Coord) -> Self {
        let mut next = self.clone();
        let idx = next.index(coord);
        debug_assert!(next.cells[idx].is_empty());
        next.cells[idx] = Cell::Owned(player);
        next
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// All empty cells, row-major
    pub fn vacant_cells(&self) -> Vec<Coord> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Read-only view in which `player` connects column 0 to column n-1
    pub(crate) fn oriented(&self, player: Player) -> OrientedView<'_> {
        OrientedView {
            board: self,
            transposed: player.is_transposed(),
        }
    }

    /// True iff `player` owns a chain joining their two edges
    pub fn is_connected(&self, player: Player) -> bool {
        let view = self.oriented(player);
        let target = self.size - 1;
        let owned = Cell::Owned(player);

        let mut visited: FxHashSet<Coord> = FxHashSet::default();
        let mut stack: Vec<Coord> = view
            .start_edge()
            .filter(|&c| view.get(c) == owned)
            .collect();
        visited.extend(stack.iter().copied());

        while let Some(coord) = stack.pop() {
            if coord.col == target {
                return true;
            }
            for next in neighbors(coord, self.size) {
                if view.get(next) == owned && visited.insert(next) {
                    stack.push(next);
                }
            }
        }

        false
    }

    /// The connected player, if any
    pub fn winner(&self) -> Option<Player> {
        [Player::Blue, Player::Red]
            .into_iter()
            .find(|&p| self.is_connected(p))
    }
}

/// Transposition-aware read access used by the evaluators
#[derive(Clone, Copy)]
pub(crate) struct OrientedView<'a> {
    board: &'a Board,
    transposed: bool,
}

impl OrientedView<'_> {
    pub fn size(&self) -> usize {
        self.board.size
    }

    pub fn get(&self, coord: Coord) -> Cell {
        let actual = if self.transposed { coord.transposed() } else { coord };
        self.board.cells[self.board.index(actual)]
    }

    /// Column 0 of the oriented grid
    pub fn start_edge(&self) -> impl Iterator<Item = Coord> {
        (0..self.board.size).map(|row| Coord::new(row, 0))
    }
}

// ============================================================================
// TESTS
// ============================================================================
