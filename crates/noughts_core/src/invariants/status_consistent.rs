//! Status consistency: the stored status is what the board says.

use super::super::{rules, GameEngine};
use super::Invariant;

/// Invariant: the engine's status equals a fresh evaluation of its board.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        rules::evaluate(engine.board()) == engine.status()
    }

    fn description() -> &'static str {
        "Status matches the board (first completed line wins, full board draws)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player, Position};

    #[test]
    fn test_holds_for_new_engine() {
        assert!(StatusConsistentInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_unrecorded_win_violates() {
        let mut engine = GameEngine::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            engine.board.set(pos, Cell::Occupied(Player::X));
        }
        assert!(!StatusConsistentInvariant::holds(&engine));
    }
}
