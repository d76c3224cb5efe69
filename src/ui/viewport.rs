//! Viewport management for scrolling.
//!
//! The [`Viewport`] struct tracks which part of the document is mapped
//! onto the terminal and keeps the cursor inside it.

use std::ops::Range;

use crate::editor::{Cursor, Document};

/// Rows reserved below the text area for the status and message bars.
pub const RESERVED_ROWS: u16 = 2;

/// The visible sub-rectangle of a document.
///
/// The viewport tracks:
/// - Text area dimensions (`screen_rows`, `screen_cols`)
/// - First visible row (`row_offset`)
/// - First visible rendered column (`col_offset`)
///
/// # Example
///
/// ```
/// use quill::editor::{Cursor, Document};
/// use quill::ui::viewport::Viewport;
///
/// let doc = Document::from_lines((0..100).map(|i| format!("line {i}").into_bytes()));
/// let mut vp = Viewport::new(80, 24);
/// let mut cursor = Cursor::at(0, 50);
/// vp.scroll(&doc, &mut cursor);
/// assert_eq!(vp.visible_rows(), 29..51);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    row_offset: usize,
    col_offset: usize,
    screen_rows: usize,
    screen_cols: usize,
}

impl Viewport {
    /// Create a viewport for a terminal of `cols` x `rows` cells.
    ///
    /// Two rows are kept back for the status and message bars.
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen_rows: rows.saturating_sub(RESERVED_ROWS) as usize,
            screen_cols: cols as usize,
        }
    }

    /// Get the first visible row.
    pub const fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Get the first visible rendered column.
    pub const fn col_offset(&self) -> usize {
        self.col_offset
    }

    /// Get the number of text rows.
    pub const fn screen_rows(&self) -> usize {
        self.screen_rows
    }

    /// Get the number of text columns.
    pub const fn screen_cols(&self) -> usize {
        self.screen_cols
    }

    /// Get the document rows mapped onto the screen, ignoring document length.
    pub const fn visible_rows(&self) -> Range<usize> {
        self.row_offset..self.row_offset + self.screen_rows
    }

    /// Recompute `cursor.rx` and clamp the offsets so the cursor is visible.
    ///
    /// This is a pure function of the cursor and the current offsets; the
    /// viewport keeps no other state between calls.
    pub fn scroll(&mut self, doc: &Document, cursor: &mut Cursor) {
        cursor.rx = doc.row(cursor.cy).map_or(0, |row| row.cx_to_rx(cursor.cx));

        if cursor.cy < self.row_offset {
            self.row_offset = cursor.cy;
        }
        if self.screen_rows > 0 && cursor.cy >= self.row_offset + self.screen_rows {
            self.row_offset = cursor.cy + 1 - self.screen_rows;
        }
        if cursor.rx < self.col_offset {
            self.col_offset = cursor.rx;
        }
        if self.screen_cols > 0 && cursor.rx >= self.col_offset + self.screen_cols {
            self.col_offset = cursor.rx + 1 - self.screen_cols;
        }
    }

    /// Put `row` at the top of the screen.
    ///
    /// The next [`scroll`](Self::scroll) pulls the offset back if this
    /// leaves the cursor outside the text area.
    pub const fn reveal_at_top(&mut self, row: usize) {
        self.row_offset = row;
    }

    /// Set both scroll offsets, leaving the screen size alone.
    pub const fn set_offsets(&mut self, row_offset: usize, col_offset: usize) {
        self.row_offset = row_offset;
        self.col_offset = col_offset;
    }

    /// Resize the viewport to a terminal of `cols` x `rows` cells.
    pub const fn resize(&mut self, cols: u16, rows: u16) {
        self.screen_rows = rows.saturating_sub(RESERVED_ROWS) as usize;
        self.screen_cols = cols as usize;
    }

    /// Screen position of the cursor, relative to the text area.
    pub const fn cursor_position(&self, cursor: &Cursor) -> (usize, usize) {
        (
            cursor.rx.saturating_sub(self.col_offset),
            cursor.cy.saturating_sub(self.row_offset),
        )
    }
}
