//! Text storage for the editor.
//!
//! A [`Document`] owns an ordered list of [`Row`]s. Each row keeps its raw
//! bytes plus a tab-expanded rendering and per-byte highlight tags, so the
//! renderer and search never need to recompute them.

mod cursor;
mod document;
mod error;
mod row;

pub use cursor::{Cursor, Direction};
pub use document::Document;
pub use error::DocumentError;
pub use row::{Row, TAB_STOP};
