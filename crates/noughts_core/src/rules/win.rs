//! Win detection.

use super::super::{Board, Cell, Line, Player};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`Line::ALL`] order and the first line holding
/// three equal marks is returned, so a move completing two lines at once
/// reports only the earlier one.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = board.line(line);
        match a {
            Cell::Occupied(player) if a == b && b == c => Some((player, line)),
            _ => None,
        }
    })
}
