//! Keyboard mapping.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// What the user asked for with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    MoveCursor(KeyCode),
    /// Mark the cell under the cursor.
    SelectCursor,
    /// Mark a specific cell.
    Select(Position),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action; unmapped keys yield `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(Action::Select)
        }
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the edges of the grid.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (column, row) = (cursor.column(), cursor.row());
    let target = match key {
        KeyCode::Left => column.checked_sub(1).map(|c| (c, row)),
        KeyCode::Right => Some((column + 1, row)),
        KeyCode::Up => row.checked_sub(1).map(|r| (column, r)),
        KeyCode::Down => Some((column, row + 1)),
        _ => None,
    };
    target
        .and_then(|(c, r)| Position::from_coords(c, r))
        .unwrap_or(cursor)
}
