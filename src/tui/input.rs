//! Key mapping and cursor movement for keyboard play.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use timeline_tictactoe::Position;

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Leave the application.
    Quit,
    /// Move keyboard focus between the board and the move list.
    SwitchFocus,
    /// Reverse the move list display order.
    ToggleOrder,
    /// Discard the history and start over.
    NewGame,
    /// Click a cell directly (digit keys).
    Click(Position),
    /// Arrow key, interpreted by the focused panel.
    Navigate(KeyCode),
    /// Activate whatever the focused panel has selected.
    Activate,
}

/// Decodes a key event. Releases and unbound keys map to `None`.
pub fn command_for(key: KeyEvent) -> Option<KeyCommand> {
    // crossterm reports both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(KeyCommand::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(KeyCommand::SwitchFocus),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyCommand::ToggleOrder),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(KeyCommand::NewGame),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(KeyCommand::Click),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Home
        | KeyCode::End => Some(KeyCommand::Navigate(key.code)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyCommand::Activate),
        _ => None,
    }
}

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digits_click_cells() {
        assert_eq!(
            command_for(press(KeyCode::Char('1'))),
            Some(KeyCommand::Click(Position::TopLeft))
        );
        assert_eq!(
            command_for(press(KeyCode::Char('9'))),
            Some(KeyCommand::Click(Position::BottomRight))
        );
        assert_eq!(command_for(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for(key), None);
    }
}
