use super::Document;

/// Cursor position in the document.
///
/// `cx`/`cy` are raw coordinates (byte offset in the row, row index).
/// `cy` may equal the row count, which addresses the empty virtual line
/// after the last row. `rx` is derived from `cx` by
/// [`Viewport::scroll`](crate::ui::viewport::Viewport::scroll).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based byte column in the raw row.
    pub cx: usize,
    /// Zero-based row index.
    pub cy: usize,
    /// Rendered column of `cx`.
    pub rx: usize,
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Cursor {
    /// Create a cursor at a raw position.
    pub const fn at(cx: usize, cy: usize) -> Self {
        Self { cx, cy, rx: 0 }
    }

    /// Move one step, wrapping across line ends, then clamp `cx` to the
    /// length of the row the cursor lands on.
    pub fn move_in(&mut self, doc: &Document, direction: Direction) {
        let row_len = doc.row(self.cy).map(super::Row::len);
        match direction {
            Direction::Left => {
                if self.cx > 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = doc.row(self.cy).map_or(0, super::Row::len);
                }
            }
            Direction::Right => match row_len {
                Some(len) if self.cx < len => self.cx += 1,
                Some(len) if self.cx == len => {
                    self.cy += 1;
                    self.cx = 0;
                }
                _ => {}
            },
            Direction::Up => self.cy = self.cy.saturating_sub(1),
            Direction::Down => {
                if self.cy < doc.row_count() {
                    self.cy += 1;
                }
            }
        }
        self.clamp_to_row(doc);
    }

    /// Move cursor to the beginning of the line (Home).
    pub const fn move_home(&mut self) {
        self.cx = 0;
    }

    /// Move cursor to the end of the line (End).
    pub fn move_end(&mut self, doc: &Document) {
        if let Some(row) = doc.row(self.cy) {
            self.cx = row.len();
        }
    }

    /// Clamp `cx` to the current row and `cy` to the virtual last line.
    pub fn clamp_to_row(&mut self, doc: &Document) {
        self.cy = self.cy.min(doc.row_count());
        let len = doc.row(self.cy).map_or(0, super::Row::len);
        self.cx = self.cx.min(len);
    }
}
