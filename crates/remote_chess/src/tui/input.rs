//! Keyboard and mouse mapping.

use crate::chess::Square;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

/// Lines moved by one log scroll step.
const LOG_SCROLL_STEP: usize = 5;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the client.
    Quit,
    /// Ask the service for a new game.
    Reset,
    /// Select the square under the keyboard cursor.
    SelectCursor,
    /// Drop the pending selection.
    CancelSelection,
    /// Move the keyboard cursor by `(rows, cols)`.
    MoveCursor(i8, i8),
    /// Scroll the log towards older entries.
    ScrollLogUp(usize),
    /// Scroll the log towards the newest entry.
    ScrollLogDown(usize),
    /// Mouse click at a terminal position.
    Click {
        /// Terminal column.
        x: u16,
        /// Terminal row.
        y: u16,
    },
}

/// Maps a key press to an action. Releases and unbound keys map to nothing.
pub fn key_action(key: KeyEvent) -> Option<Action> {
    // crossterm reports both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Backspace | KeyCode::Char('c') => Some(Action::CancelSelection),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(-1, 0)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(1, 0)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(0, -1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(0, 1)),
        KeyCode::PageUp => Some(Action::ScrollLogUp(LOG_SCROLL_STEP)),
        KeyCode::PageDown => Some(Action::ScrollLogDown(LOG_SCROLL_STEP)),
        _ => None,
    }
}

/// Maps a left click to an action.
pub fn mouse_action(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            x: mouse.column,
            y: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(Action::ScrollLogUp(1)),
        MouseEventKind::ScrollDown => Some(Action::ScrollLogDown(1)),
        _ => None,
    }
}

/// Moves the cursor, staying put at the board edge.
pub fn move_cursor(cursor: Square, d_row: i8, d_col: i8) -> Square {
    cursor.offset(d_row, d_col).unwrap_or(cursor)
}
