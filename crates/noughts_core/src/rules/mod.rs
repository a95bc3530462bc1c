//! Game rules.
//!
//! Pure functions over a [`Board`]; the engine calls [`evaluate`] after
//! every accepted move.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Computes the status a board is in: the first completed line wins,
/// otherwise a full board is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = check_winner(board) {
        GameStatus::Won { winner, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
