//! Decoded keystrokes.
//!
//! The terminal backend delivers crossterm events; everything past the
//! event loop works with [`Key`] so editing and search logic never
//! depends on the backend.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character, or a tab.
    Char(char),
    /// A Ctrl-modified letter, lowercase.
    Ctrl(char),
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
    Backspace,
    Enter,
    Escape,
}

impl Key {
    /// Map a crossterm key event.
    ///
    /// Returns `None` for releases, repeats of unsupported keys and
    /// anything the editor has no binding for.
    pub fn from_event(event: KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let key = match event.code {
            KeyCode::Char('h') if ctrl => Self::Backspace,
            KeyCode::Char(c) if ctrl => Self::Ctrl(c.to_ascii_lowercase()),
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Tab => Self::Char('\t'),
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            KeyCode::Delete => Self::Delete,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Enter => Self::Enter,
            KeyCode::Esc => Self::Escape,
            _ => return None,
        };
        Some(key)
    }

    /// The byte to insert for this key, if it inserts text.
    pub fn insertable_byte(self) -> Option<u8> {
        match self {
            Self::Char(c) if c == '\t' || c.is_ascii_graphic() || c == ' ' => u8::try_from(c).ok(),
            _ => None,
        }
    }
}
