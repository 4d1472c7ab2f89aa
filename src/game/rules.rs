//! Four-in-a-row detection.
//!
//! Both entry points take the candidate player explicitly instead of reading
//! an engine-held "current player", so they are pure functions over a board
//! value and testable on their own.

use super::board::{Board, Cell};
use super::player::PlayerId;

/// Contiguous own pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// The four forward direction vectors as (row, col) deltas: horizontal,
/// vertical, diagonal down-right, diagonal down-left. Trying only these from
/// every origin cell still covers all eight geometric directions, because a
/// line found going up-left from one end is found going down-right from the
/// other.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Scan the whole board for a four-in-a-row owned by `player`.
///
/// Every cell is tried as a line origin against each forward direction.
/// Cost is proportional to the board area, fine to run after every move at
/// typical sizes; [`check_win_at`] is the cheaper choice when the last
/// landing cell is known.
pub fn check_win(board: &Board, player: PlayerId) -> bool {
    for row in 0..board.height() {
        for col in 0..board.width() {
            for (dr, dc) in DIRECTIONS {
                if line_matches(board, player, row, col, dr, dc) {
                    return true;
                }
            }
        }
    }
    false
}

/// Check only the lines passing through `(row, col)` — the cell the last
/// disc landed on. Constant work per call regardless of board size; this is
/// what the engine runs after each drop.
///
/// Agrees with [`check_win`] whenever the board held no win before that
/// disc landed, since any new four-in-a-row must pass through it.
pub fn check_win_at(board: &Board, player: PlayerId, row: usize, col: usize) -> bool {
    if board.cell(row, col) != Some(Cell::Occupied(player)) {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        // The cell itself plus the runs extending both ways along the axis.
        let run = 1 + run_length(board, player, row, col, dr, dc)
            + run_length(board, player, row, col, -dr, -dc);
        run >= WIN_LENGTH
    })
}

/// True when all `WIN_LENGTH` cells starting at `(row, col)` and stepping by
/// `(dr, dc)` are in bounds and owned by `player`.
fn line_matches(
    board: &Board,
    player: PlayerId,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
) -> bool {
    (0..WIN_LENGTH as isize).all(|step| {
        let r = row as isize + dr * step;
        let c = col as isize + dc * step;
        r >= 0 && c >= 0 && board.cell(r as usize, c as usize) == Some(Cell::Occupied(player))
    })
}

/// Consecutive `player` pieces strictly beyond `(row, col)` in direction
/// `(dr, dc)`.
fn run_length(
    board: &Board,
    player: PlayerId,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
) -> usize {
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while r >= 0 && c >= 0 && board.cell(r as usize, c as usize) == Some(Cell::Occupied(player)) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}
