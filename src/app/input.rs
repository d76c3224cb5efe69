use crossterm::event::Event;

use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::input::Key;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Key::from_event(*key).and_then(|key| Self::handle_key(key, model)),
            Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: Key, model: &Model) -> Option<Message> {
        // An open prompt takes every key.
        if model.prompt.is_some() {
            return Some(Message::PromptKey(key));
        }

        match key {
            // Application
            Key::Ctrl('q') => Some(Message::Quit),
            Key::Ctrl('s') => Some(Message::Save),
            Key::Ctrl('f') => Some(Message::Find),
            Key::Ctrl('l') | Key::Escape => Some(Message::Redraw),

            // Navigation
            Key::Up => Some(Message::MoveCursor(Direction::Up)),
            Key::Down => Some(Message::MoveCursor(Direction::Down)),
            Key::Left => Some(Message::MoveCursor(Direction::Left)),
            Key::Right => Some(Message::MoveCursor(Direction::Right)),
            Key::PageUp => Some(Message::PageUp),
            Key::PageDown => Some(Message::PageDown),
            Key::Home => Some(Message::MoveHome),
            Key::End => Some(Message::MoveEnd),

            // Editing
            Key::Enter => Some(Message::InsertNewline),
            Key::Backspace => Some(Message::DeleteBackward),
            Key::Delete => Some(Message::DeleteForward),
            // Other Ctrl letters insert their control byte.
            Key::Ctrl(c) if c.is_ascii_lowercase() => {
                u8::try_from(c).ok().map(|b| Message::InsertChar(b & 0x1f))
            }
            Key::Ctrl(_) => None,
            Key::Char(c) if !c.is_ascii() && !c.is_control() => {
                Some(Message::InsertText(c.to_string()))
            }
            Key::Char(_) => key.insertable_byte().map(Message::InsertChar),
        }
    }
}
