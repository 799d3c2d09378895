//! Position evaluation: shortest-path distance to a connection

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::board::{neighbors, Coord};
use crate::game::{Board, Cell, Player};
use rustc_hash::FxHashMap;

/// Path cost when every route to the target edge is blocked
///
/// A finite cost never exceeds the number of cells, so this stays above it
/// for every board side below 32768.
pub const UNREACHABLE: u32 = (1 << 30) - 1;

/// Score of a decided position
///
/// Costs lie in `0..=UNREACHABLE`, so no cost difference reaches it.
pub const WIN_SCORE: i32 = UNREACHABLE as i32 + 1;

/// Cost for `player` to pass through a cell; `None` if the opponent holds it
fn cell_cost(cell: Cell, player: Player) -> Option<u32> {
    match cell {
        Cell::Empty => Some(1),
        Cell::Owned(owner) if owner == player => Some(0),
        Cell::Owned(_) => None,
    }
}

/// Minimum number of empty cells `player` must still claim to connect
///
/// Returns 0 iff `player` is already connected and `UNREACHABLE` when the
/// opponent has cut every route.
pub fn path_cost(board: &Board, player: Player) -> u32 {
    let view = board.oriented(player);
    let target = view.size() - 1;

    let mut best: FxHashMap<Coord, u32> = FxHashMap::default();
    let mut queue: BinaryHeap<Reverse<(u32, Coord)>> = BinaryHeap::new();

    for start in view.start_edge() {
        if let Some(cost) = cell_cost(view.get(start), player) {
            best.insert(start, cost);
            queue.push(Reverse((cost, start)));
        }
    }

    while let Some(Reverse((cost, coord))) = queue.pop() {
        if best.get(&coord).is_some_and(|&known| known < cost) {
            continue; // stale entry
        }
        if coord.col == target {
            return cost;
        }
        for next in neighbors(coord, view.size()) {
            let Some(step) = cell_cost(view.get(next), player) else {
                continue;
            };
            let candidate = cost + step;
            if best.get(&next).map_or(true, |&known| candidate < known) {
                best.insert(next, candidate);
                queue.push(Reverse((candidate, next)));
            }
        }
    }

    UNREACHABLE
}

/// Static score from `maximizer`'s point of view
///
/// Positive when the maximizer is closer to connecting than the other side.
pub fn static_score(board: &Board, mover: Player, opponent: Player, maximizer: Player) -> i32 {
    let diff = path_cost(board, opponent) as i32 - path_cost(board, mover) as i32;
    if mover == maximizer {
        diff
    } else {
        -diff
    }
}
