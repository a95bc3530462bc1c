//! Balanced marks: X never trails O, and never leads by more than one.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: mark counts agree with the turn indicator.
///
/// X moves first, so while the game runs X is to move exactly when both
/// players have placed the same number of marks. After the final move the
/// turn indicator stays on whoever made it.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);

        let last_mover = match x.checked_sub(o) {
            Some(0) if x == 0 => None,
            Some(0) => Some(Player::O),
            Some(1) => Some(Player::X),
            _ => return false,
        };

        let expected = if engine.is_over() {
            match last_mover {
                Some(player) => player,
                None => return false,
            }
        } else {
            last_mover.map_or(Player::X, Player::opponent)
        };

        engine.to_move() == expected
    }

    fn description() -> &'static str {
        "Mark counts match the player to move (X first, strictly alternating)"
    }
}
