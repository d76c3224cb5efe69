// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. search::SearchSession)
    clippy::module_name_repetitions
)]

//! # Quill
//!
//! A small screen-oriented text editor for the terminal.
//!
//! Quill edits one file at a time with:
//! - Syntax highlighting for C, Rust and Python, including block comments
//!   that span rows
//! - Incremental search that moves as you type
//! - A status bar, a timed message bar and a quit guard for unsaved edits
//!
//! ## Architecture
//!
//! Quill uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: Rows, the document and cursor
//! - [`highlight`]: Syntax highlighting
//! - [`search`]: Incremental search
//! - [`ui`]: Terminal UI components
//! - [`input`]: Key decoding
//! - [`config`]: Saved default flags

pub mod app;
pub mod config;
pub mod editor;
pub mod highlight;
pub mod input;
pub mod perf;
pub mod search;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::Document;
    pub use crate::ui::viewport::Viewport;
}
