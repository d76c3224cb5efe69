//! Incremental search.
//!
//! A [`SearchSession`] lives for the duration of one search prompt. After
//! every keystroke it looks for the query in the rendered rows, moves the
//! cursor to the match and overlays [`Highlight::Match`] on the matched
//! span. The row's previous tags are kept aside and put back before the
//! next step, so the overlay never leaks into the document.

use memchr::memmem;

use crate::editor::{Cursor, Document};
use crate::highlight::Highlight;
use crate::input::Key;
use crate::ui::viewport::Viewport;

/// Direction in which the next match is looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// Highlight tags of one row, as they were before the match overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedHighlight {
    row: usize,
    highlight: Vec<Highlight>,
}

/// Cursor and scroll offsets captured when a session begins.
///
/// The screen size is not part of the snapshot, so a resize during the
/// search survives a cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub cursor: Cursor,
    pub row_offset: usize,
    pub col_offset: usize,
}

/// State of one incremental search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    last_match: Option<usize>,
    direction: SearchDirection,
    saved_highlight: Option<SavedHighlight>,
    origin: CursorSnapshot,
    found: bool,
}

impl SearchSession {
    /// Start a session, remembering where the cursor was.
    pub const fn begin(cursor: Cursor, viewport: Viewport) -> Self {
        Self {
            last_match: None,
            direction: SearchDirection::Forward,
            saved_highlight: None,
            origin: CursorSnapshot {
                cursor,
                row_offset: viewport.row_offset(),
                col_offset: viewport.col_offset(),
            },
            found: false,
        }
    }

    pub const fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub const fn direction(&self) -> SearchDirection {
        self.direction
    }

    pub const fn origin(&self) -> CursorSnapshot {
        self.origin
    }

    /// Whether the query currently shown has a match in the document.
    pub const fn found(&self) -> bool {
        self.found
    }

    /// Run one search step for `query` after `key` was pressed.
    ///
    /// Enter and Escape only clear the overlay and reset the step state.
    /// Arrow keys pick the direction; any other key (an edit of the query)
    /// restarts the search from the top. The cursor and viewport are left
    /// untouched when nothing matches.
    pub fn advance(
        &mut self,
        query: &str,
        key: Key,
        doc: &mut Document,
        cursor: &mut Cursor,
        viewport: &mut Viewport,
    ) {
        self.restore_highlight(doc);

        match key {
            Key::Enter | Key::Escape => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
                return;
            }
            Key::Right | Key::Down => self.direction = SearchDirection::Forward,
            Key::Left | Key::Up => self.direction = SearchDirection::Backward,
            _ => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
            }
        }
        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }

        let needle = query.as_bytes();
        let total = doc.row_count();
        if needle.is_empty() || total == 0 {
            self.found = false;
            return;
        }

        let _scope = crate::perf::scope("search.advance");
        let finder = memmem::Finder::new(needle);
        let mut current = self.last_match;
        for _ in 0..total {
            let at = next_row(current, self.direction, total);
            current = Some(at);
            let Some(row) = doc.row(at) else {
                continue;
            };
            let Some(offset) = finder.find(&row.rendered) else {
                continue;
            };

            self.last_match = Some(at);
            self.found = true;
            cursor.cy = at;
            cursor.cx = row.rx_to_cx(offset);
            viewport.reveal_at_top(at);

            if let Some(tags) = doc.highlight_mut(at) {
                self.saved_highlight = Some(SavedHighlight {
                    row: at,
                    highlight: tags.to_vec(),
                });
                let end = (offset + needle.len()).min(tags.len());
                tags[offset..end].fill(Highlight::Match);
            }
            tracing::trace!(row = at, offset, "search match");
            return;
        }

        self.found = false;
    }

    /// Finish the session.
    ///
    /// The match overlay is always removed. When `commit` is false the
    /// cursor and scroll offsets go back to where they were at
    /// [`begin`](Self::begin).
    pub fn end(
        mut self,
        commit: bool,
        doc: &mut Document,
        cursor: &mut Cursor,
        viewport: &mut Viewport,
    ) {
        self.restore_highlight(doc);
        if !commit {
            *cursor = self.origin.cursor;
            viewport.set_offsets(self.origin.row_offset, self.origin.col_offset);
        }
    }

    fn restore_highlight(&mut self, doc: &mut Document) {
        let Some(saved) = self.saved_highlight.take() else {
            return;
        };
        if let Some(tags) = doc.highlight_mut(saved.row)
            && tags.len() == saved.highlight.len()
        {
            tags.copy_from_slice(&saved.highlight);
        }
    }
}

/// Row after `current` in `direction`, wrapping at both ends. `None`
/// starts at the top.
const fn next_row(current: Option<usize>, direction: SearchDirection, total: usize) -> usize {
    match (current, direction) {
        (None, _) => 0,
        (Some(row), SearchDirection::Forward) => {
            if row + 1 >= total {
                0
            } else {
                row + 1
            }
        }
        (Some(row), SearchDirection::Backward) => {
            if row == 0 {
                total - 1
            } else {
                row - 1
            }
        }
    }
}
