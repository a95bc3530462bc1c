//! Noughts core - game engine for noughts and crosses.
//!
//! A [`GameEngine`] owns a 3x3 [`Board`], the player to move and the
//! [`GameStatus`]. Views drive it through two operations:
//!
//! - [`GameEngine::select_cell`] marks a cell for the player to move and
//!   reports the resulting status, or rejects the move with a
//!   [`MoveError`] without touching any state.
//! - [`GameEngine::reset`] starts a new game.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameEngine, GameStatus, MoveError, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 1, 3, 4, 6] {
//!     engine.select_cell(index)?;
//! }
//! assert_eq!(engine.status().winner(), Some(Player::X));
//! assert_eq!(engine.select_cell(2), Err(MoveError::GameAlreadyEnded));
//!
//! engine.reset();
//! assert_eq!(engine.status(), GameStatus::InProgress);
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod line;
mod position;
pub mod rules;
mod types;

pub use action::{MoveError, MoveOutcome};
pub use engine::{GameEngine, Snapshot};
pub use line::Line;
pub use position::Position;
pub use types::{Board, Cell, GameStatus, Player};
