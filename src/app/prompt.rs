//! Single-line input on the message bar.

use crate::input::Key;
use crate::search::SearchSession;

/// What a prompt's input is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Search(SearchSession),
}

/// Result of feeding one key to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still collecting input.
    Pending,
    /// Escape was pressed.
    Cancelled,
    /// Enter was pressed with non-empty input.
    Confirmed(String),
}

/// An open prompt and the text typed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub const fn save_as() -> Self {
        Self {
            kind: PromptKind::SaveAs,
            input: String::new(),
        }
    }

    pub const fn search(session: SearchSession) -> Self {
        Self {
            kind: PromptKind::Search(session),
            input: String::new(),
        }
    }

    /// The text shown on the message bar.
    pub fn message(&self) -> String {
        match self.kind {
            PromptKind::SaveAs => format!("Save as: {} (ESC to cancel)", self.input),
            PromptKind::Search(_) => format!("Search: {} (Use ESC/Arrows/Enter)", self.input),
        }
    }

    /// Apply one keystroke to the input line.
    pub fn handle_key(&mut self, key: Key) -> PromptOutcome {
        match key {
            Key::Backspace | Key::Delete => {
                self.input.pop();
            }
            Key::Escape => return PromptOutcome::Cancelled,
            Key::Enter if !self.input.is_empty() => {
                return PromptOutcome::Confirmed(self.input.clone());
            }
            Key::Char(c) if c.is_ascii() && !c.is_ascii_control() => self.input.push(c),
            _ => {}
        }
        PromptOutcome::Pending
    }
}
