//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod prompt;
mod terminal;
mod update;

pub use model::{DEFAULT_QUIT_TIMES, HELP_MESSAGE, MESSAGE_TIMEOUT, Model, StatusMessage};
pub use prompt::{Prompt, PromptKind, PromptOutcome};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
#[derive(Debug)]
pub struct App {
    file_path: Option<PathBuf>,
    quit_times: u8,
    highlight: bool,
}

impl App {
    /// Create a new application, optionally editing an existing file.
    pub const fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            quit_times: DEFAULT_QUIT_TIMES,
            highlight: true,
        }
    }

    /// Set how many Ctrl-Q warnings a dirty document gets before quitting.
    #[must_use]
    pub const fn with_quit_times(mut self, times: u8) -> Self {
        self.quit_times = times;
        self
    }

    /// Enable or disable syntax highlighting.
    #[must_use]
    pub const fn with_highlight(mut self, enabled: bool) -> Self {
        self.highlight = enabled;
        self
    }
}

#[cfg(test)]
mod tests;
