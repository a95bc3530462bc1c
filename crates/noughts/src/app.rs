//! Application state and logic.

use super::config::Config;
use super::input::{self, Action};
use noughts_core::{GameEngine, GameStatus, MoveError, Position};
use tracing::{debug, instrument};

/// Main application state.
///
/// Holds the one engine for the session and forwards user intents to it.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    status_message: String,
    auto_restart: bool,
    show_hints: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            status_message: String::new(),
            auto_restart: *config.auto_restart(),
            show_hints: *config.show_hints(),
        };
        app.status_message = app.turn_message();
        app
    }

    /// Gets the current game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether empty cells are numbered.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Applies a non-quit action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::SelectCursor => self.select(self.cursor),
            Action::Select(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Action::Restart => self.restart(),
            Action::Quit => {}
        }
    }

    /// Marks `pos` for the player to move.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) {
        match self.engine.select(pos) {
            Ok(outcome) => {
                debug!(%outcome, "Move applied");
                self.status_message = self.turn_message();
            }
            Err(MoveError::GameAlreadyEnded) if self.auto_restart => self.restart(),
            Err(MoveError::GameAlreadyEnded) => {
                self.status_message = "Game has already ended. Press 'r' to restart.".to_string();
            }
            Err(e) => {
                self.status_message = format!("Invalid move: {}. Try again.", e);
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.status_message = self.turn_message();
    }

    fn turn_message(&self) -> String {
        let again = if self.auto_restart {
            "Select any cell to play again."
        } else {
            "Press 'r' to restart."
        };
        match self.engine.status() {
            GameStatus::InProgress if self.show_hints => format!(
                "Player {}'s turn. Arrows + Enter or 1-9 to mark, Esc to quit.",
                self.engine.to_move()
            ),
            GameStatus::InProgress => format!("Player {}'s turn.", self.engine.to_move()),
            GameStatus::Won { winner, .. } => format!("Player {} wins! {}", winner, again),
            GameStatus::Draw => format!("Draw! {}", again),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Cell, Player};

    fn finished(config: &Config) -> App {
        let mut app = App::new(config);
        for index in [0, 1, 3, 4, 6] {
            app.select(Position::from_index(index).unwrap());
        }
        app
    }

    #[test]
    fn test_select_marks_cell() {
        let mut app = App::new(&Config::default());
        app.apply(Action::Select(Position::TopRight));
        assert_eq!(app.engine().board().get(Position::TopRight), Cell::Occupied(Player::X));
        assert_eq!(app.cursor(), Position::TopRight);
        assert!(app.status_message().starts_with("Player O's turn"));
    }

    #[test]
    fn test_occupied_cell_reports() {
        let mut app = App::new(&Config::default());
        app.select(Position::Center);
        app.select(Position::Center);
        assert_eq!(
            app.status_message(),
            "Invalid move: Center is already occupied. Try again."
        );
        assert_eq!(app.engine().to_move(), Player::O);
    }

    #[test]
    fn test_win_message() {
        let app = finished(&Config::default());
        assert_eq!(
            app.status_message(),
            "Player X wins! Select any cell to play again."
        );
    }

    #[test]
    fn test_selection_after_end_restarts() {
        let mut app = finished(&Config::default());
        app.apply(Action::SelectCursor);
        assert_eq!(app.engine(), &GameEngine::new());
    }

    #[test]
    fn test_selection_after_end_waits_without_auto_restart() {
        let config = Config::default().with_auto_restart(false);
        let mut app = finished(&config);
        app.select(Position::TopRight);
        assert!(app.engine().is_over());
        assert_eq!(
            app.status_message(),
            "Game has already ended. Press 'r' to restart."
        );

        app.apply(Action::Restart);
        assert_eq!(app.engine(), &GameEngine::new());
    }

    #[test]
    fn test_cursor_selection() {
        let mut app = App::new(&Config::default().with_show_hints(false));
        app.apply(Action::MoveCursor(crossterm::event::KeyCode::Up));
        app.apply(Action::SelectCursor);
        assert_eq!(app.engine().board().get(Position::TopCenter), Cell::Occupied(Player::X));
        assert_eq!(app.status_message(), "Player O's turn.");
    }
}
