//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position and cursor visibility
//! - [`frame`]: Draw commands and their terminal encoding
//! - [`style`]: Highlight colors

pub mod frame;
pub mod style;
pub mod viewport;

mod render;
mod status;

pub use frame::{DrawCommand, Frame};
pub use render::render_frame;
pub use status::{message_bar, status_bar};
