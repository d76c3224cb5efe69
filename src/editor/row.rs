use crate::highlight::Highlight;

/// Tab stops are fixed at every eighth rendered column.
pub const TAB_STOP: usize = 8;

/// One logical line of the document.
///
/// `rendered` and `highlight` are derived from `raw` and always have the
/// same length. `rendered` is rebuilt by [`Row::set_raw`] and the other
/// mutators; `highlight` is filled in by the highlighter afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Position of this row in the document.
    pub index: usize,
    /// Editable bytes, without the trailing newline.
    pub raw: Vec<u8>,
    /// `raw` with tabs expanded to spaces.
    pub rendered: Vec<u8>,
    /// One tag per byte of `rendered`.
    pub highlight: Vec<Highlight>,
    /// Whether a block comment is still open at the end of this row.
    pub open_comment: bool,
}

impl Row {
    pub fn new(index: usize, raw: &[u8]) -> Self {
        let mut row = Self {
            index,
            raw: raw.to_vec(),
            rendered: Vec::new(),
            highlight: Vec::new(),
            open_comment: false,
        };
        row.render();
        row
    }

    /// Replace the raw bytes and rebuild the derived data.
    pub fn set_raw(&mut self, raw: Vec<u8>) {
        self.raw = raw;
        self.render();
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Insert `byte` at `at`, clamped to the end of the row.
    pub(crate) fn insert(&mut self, at: usize, byte: u8) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, byte);
        self.render();
    }

    /// Remove the byte at `at`. Returns `false` when `at` is out of range.
    pub(crate) fn remove(&mut self, at: usize) -> bool {
        if at >= self.raw.len() {
            return false;
        }
        self.raw.remove(at);
        self.render();
        true
    }

    pub(crate) fn append(&mut self, text: &[u8]) {
        self.raw.extend_from_slice(text);
        self.render();
    }

    /// Cut the row at `at`, keeping the prefix and returning the suffix.
    pub(crate) fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.raw.len());
        let tail = self.raw.split_off(at);
        self.render();
        tail
    }

    /// Convert a raw column to a rendered column.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        self.raw.iter().take(cx).fold(0, |rx, &byte| {
            if byte == b'\t' {
                rx + TAB_STOP - (rx % TAB_STOP)
            } else {
                rx + 1
            }
        })
    }

    /// Convert a rendered column back to a raw column.
    ///
    /// Returns the first raw column whose rendered extent passes `rx`, so
    /// every column inside an expanded tab maps to the tab itself.
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, &byte) in self.raw.iter().enumerate() {
            if byte == b'\t' {
                cur_rx += TAB_STOP - (cur_rx % TAB_STOP);
            } else {
                cur_rx += 1;
            }
            if cur_rx > rx {
                return cx;
            }
        }
        self.raw.len()
    }

    fn render(&mut self) {
        let tabs = self.raw.iter().filter(|&&b| b == b'\t').count();
        let mut rendered = Vec::with_capacity(self.raw.len() + tabs * (TAB_STOP - 1));
        for &byte in &self.raw {
            if byte == b'\t' {
                rendered.push(b' ');
                while rendered.len() % TAB_STOP != 0 {
                    rendered.push(b' ');
                }
            } else {
                rendered.push(byte);
            }
        }
        self.rendered = rendered;
        // Keep the length invariant until the highlighter runs.
        self.highlight.clear();
        self.highlight.resize(self.rendered.len(), Highlight::Normal);
    }
}
