use std::time::{Duration, Instant};

use crate::editor::{Cursor, Direction, Document};
use crate::ui::viewport::Viewport;

use super::prompt::Prompt;

/// How long a status message stays on the message bar.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Warnings shown before Ctrl-Q quits a document with unsaved changes.
pub const DEFAULT_QUIT_TIMES: u8 = 3;

pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// A message shown on the bottom bar, with the time it was set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    set_at: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, set_at: Instant) -> Self {
        Self {
            text: text.into(),
            set_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the message is still young enough to display at `now`.
    pub fn is_fresh(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.set_at) < MESSAGE_TIMEOUT
    }
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The document being edited
    pub document: Document,
    /// Cursor position in the document
    pub cursor: Cursor,
    /// Visible part of the document
    pub viewport: Viewport,
    /// Open line-input prompt, if any
    pub prompt: Option<Prompt>,
    /// Whether syntax highlighting is applied
    pub highlight_enabled: bool,
    /// Ctrl-Q warnings before a dirty document quits
    pub quit_times: u8,
    /// Warnings left before a dirty quit goes through
    pub(super) quit_remaining: u8,
    /// Whether the app should quit
    pub should_quit: bool,
    status: Option<StatusMessage>,
    save_requested: bool,
}

impl Model {
    /// Create a new model with default settings.
    pub fn new(document: Document, terminal_size: (u16, u16)) -> Self {
        Self {
            document,
            cursor: Cursor::default(),
            viewport: Viewport::new(terminal_size.0, terminal_size.1),
            prompt: None,
            highlight_enabled: true,
            quit_times: DEFAULT_QUIT_TIMES,
            quit_remaining: DEFAULT_QUIT_TIMES,
            should_quit: false,
            status: None,
            save_requested: false,
        }
    }

    /// Set how many extra Ctrl-Q presses a dirty document needs before
    /// quitting. Zero quits at once.
    #[must_use]
    pub const fn with_quit_times(mut self, times: u8) -> Self {
        self.quit_times = times;
        self.quit_remaining = self.quit_times;
        self
    }

    /// Enable or disable syntax highlighting for the document.
    #[must_use]
    pub fn with_highlight(mut self, enabled: bool) -> Self {
        self.highlight_enabled = enabled;
        if !enabled {
            self.document.set_syntax(None);
        }
        self
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.set_status_at(text, Instant::now());
    }

    pub fn set_status_at(&mut self, text: impl Into<String>, now: Instant) {
        let message = StatusMessage::new(text, now);
        tracing::debug!(message = message.text(), "status message");
        self.status = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// The status message to display at `now`, if it has not expired.
    pub fn status_message(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|message| message.is_fresh(now))
            .map(StatusMessage::text)
    }

    /// Recompute `rx` and keep the cursor inside the viewport.
    pub fn scroll(&mut self) {
        self.viewport.scroll(&self.document, &mut self.cursor);
    }

    /// Pick the syntax profile for the current filename, if highlighting is on.
    pub fn select_syntax(&mut self) {
        if self.highlight_enabled {
            self.document.select_syntax();
        }
    }

    pub(super) const fn request_save(&mut self) {
        self.save_requested = true;
    }

    /// Take a pending save request raised by [`update`](super::update).
    pub(super) const fn take_save_request(&mut self) -> bool {
        std::mem::replace(&mut self.save_requested, false)
    }

    /// Insert a byte at the cursor. On the virtual last line a row is
    /// appended first.
    pub(super) fn insert_char(&mut self, byte: u8) {
        if self.cursor.cy == self.document.row_count() {
            self.document.insert_row(self.document.row_count(), b"");
        }
        self.document.insert_char(self.cursor.cy, self.cursor.cx, byte);
        self.cursor.cx += 1;
    }

    /// Split the current row at the cursor (Enter).
    pub(super) fn insert_newline(&mut self) {
        self.document.split_row(self.cursor.cy, self.cursor.cx);
        self.cursor.cy += 1;
        self.cursor.cx = 0;
    }

    /// Delete the byte left of the cursor, joining rows at column 0.
    pub(super) fn delete_char(&mut self) {
        let Cursor { cx, cy, .. } = self.cursor;
        if cy == self.document.row_count() || (cx == 0 && cy == 0) {
            return;
        }
        if cx > 0 {
            self.document.delete_char(cy, cx - 1);
            self.cursor.cx -= 1;
        } else if let Some(join_at) = self.document.join_row_into_previous(cy) {
            self.cursor.cy -= 1;
            self.cursor.cx = join_at;
        }
    }

    /// Move the cursor one screen up or down (PageUp/PageDown).
    pub(super) fn page(&mut self, direction: Direction) {
        let screen_rows = self.viewport.screen_rows();
        match direction {
            Direction::Up => self.cursor.cy = self.viewport.row_offset(),
            Direction::Down => {
                let bottom = (self.viewport.row_offset() + screen_rows).saturating_sub(1);
                self.cursor.cy = bottom.min(self.document.row_count());
            }
            Direction::Left | Direction::Right => return,
        }
        for _ in 0..screen_rows {
            self.cursor.move_in(&self.document, direction);
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Document::new(), (80, 24))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_expires_after_timeout() {
        let mut model = Model::default();
        let start = Instant::now();
        model.set_status_at("hello", start);
        assert_eq!(model.status_message(start), Some("hello"));
        assert_eq!(model.status_message(start + Duration::from_secs(4)), Some("hello"));
        assert_eq!(model.status_message(start + MESSAGE_TIMEOUT), None);
    }

    #[test]
    fn test_with_quit_times_resets_counter() {
        let model = Model::default().with_quit_times(1);
        assert_eq!(model.quit_times, 1);
        assert_eq!(model.quit_remaining, 1);
    }

    #[test]
    fn test_save_request_is_taken_once() {
        let mut model = Model::default();
        model.request_save();
        assert!(model.take_save_request());
        assert!(!model.take_save_request());
    }
}
