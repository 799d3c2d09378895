//! Hex board geometry on an n x n rhombus

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// Cell coordinates, 0-indexed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate lies on an n x n board
    pub fn is_valid(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Same cell with row and column swapped
    pub fn transposed(self) -> Self {
        Self::new(self.col, self.row)
    }

    /// Get neighbor in direction (0-5), if it is on the board
    pub fn neighbor(&self, direction: u8, size: usize) -> Option<Coord> {
        let (dr, dc) = DIRECTIONS[direction as usize % 6];
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Coord::new(row, col);
        next.is_valid(size).then_some(next)
    }
}

/// Direction vectors (drow, dcol)
/// Index: 0=Up, 1=UpRight, 2=Down, 3=DownLeft, 4=Left, 5=Right
///
/// Search tie-breaking depends on this order.
pub const DIRECTIONS: [(isize, isize); 6] = [
    (-1, 0),  // Up
    (-1, 1),  // UpRight
    (1, 0),   // Down
    (1, -1),  // DownLeft
    (0, -1),  // Left
    (0, 1),   // Right
];

/// All on-board neighbors of `coord`, in `DIRECTIONS` order
pub fn neighbors(coord: Coord, size: usize) -> impl Iterator<Item = Coord> {
    (0..6u8).filter_map(move |dir| coord.neighbor(dir, size))
}

// ============================================================================
// NOTATION
// ============================================================================

/// Row label: `A`..`Z`, then `AA`, `AB`, ... like spreadsheet columns
pub fn row_label(row: usize) -> String {
    let mut letters = Vec::new();
    let mut rest = row;
    loop {
        letters.push((b'A' + (rest % 26) as u8) as char);
        if rest < 26 {
            break;
        }
        rest = rest / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Row label followed by a 1-based column: `A1` is (0, 0), `C2` is (2, 1)
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_label(self.row), self.col + 1)
    }
}

impl FromStr for Coord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || GameError::InvalidNotation(text.to_string());

        let split = text
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(text.len());
        let (letters, digits) = text.split_at(split);
        if letters.is_empty() {
            return Err(invalid());
        }

        let mut row: usize = 0;
        for letter in letters.bytes().map(|b| b.to_ascii_uppercase()) {
            row = row
                .checked_mul(26)
                .and_then(|r| r.checked_add((letter - b'A') as usize + 1))
                .ok_or_else(invalid)?;
        }
        let col: usize = digits.parse().map_err(|_| invalid())?;
        if col == 0 {
            return Err(invalid());
        }

        Ok(Coord::new(row - 1, col - 1))
    }
}
