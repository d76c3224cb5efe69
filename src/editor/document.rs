use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::highlight::{self, Highlight, SyntaxProfile};

use super::{DocumentError, Row};

/// An ordered sequence of rows plus file metadata.
///
/// Every mutation rebuilds the touched row, re-runs the highlighter on it
/// and carries block-comment state forward to the following rows until it
/// stops changing.
#[derive(Debug, Default)]
pub struct Document {
    rows: Vec<Row>,
    filename: Option<PathBuf>,
    dirty: usize,
    syntax: Option<&'static SyntaxProfile>,
}

impl Document {
    /// Create an empty, unnamed document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an unnamed document from raw lines.
    pub fn from_lines(lines: impl IntoIterator<Item = Vec<u8>>) -> Self {
        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Row::new(index, &raw))
            .collect();
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Read `path` into a new document, one row per line.
    ///
    /// Trailing CR/LF bytes are stripped from each line. The syntax
    /// profile is chosen from the filename.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Open`] if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let _scope = crate::perf::scope("document.open");
        let bytes = std::fs::read(path).map_err(|source| DocumentError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut lines: Vec<&[u8]> = bytes.split(|&b| b == b'\n').collect();
        if lines.last().is_some_and(|last| last.is_empty()) {
            lines.pop();
        }
        let mut doc = Self::from_lines(lines.into_iter().map(|line| {
            let end = line.iter().rposition(|&b| b != b'\r').map_or(0, |i| i + 1);
            line[..end].to_vec()
        }));
        doc.filename = Some(path.to_path_buf());
        doc.select_syntax();
        tracing::debug!(
            path = %path.display(),
            rows = doc.row_count(),
            syntax = doc.syntax_name(),
            "opened document"
        );
        Ok(doc)
    }

    /// Write every row followed by `\n` to the document's file.
    ///
    /// The file is created if needed and truncated to exactly the written
    /// length. On success the dirty counter is cleared and the number of
    /// bytes written is returned; on failure the document is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NoFilename`] for an unnamed document and
    /// [`DocumentError::Save`] for any I/O failure.
    pub fn save(&mut self) -> Result<usize, DocumentError> {
        let path = self.filename.as_ref().ok_or(DocumentError::NoFilename)?;
        let bytes = self.to_bytes();

        let write = || -> std::io::Result<()> {
            let mut file = OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)?;
            file.set_len(bytes.len() as u64)?;
            file.write_all(&bytes)?;
            file.flush()
        };
        write().map_err(|source| DocumentError::Save {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved document");
        self.dirty = 0;
        Ok(bytes.len())
    }

    /// Serialize all rows, each terminated by `\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(&row.raw);
            out.push(b'\n');
        }
        out
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Name the document. Does not change the syntax profile.
    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        self.filename = Some(path.into());
    }

    /// Number of mutations since the last load or successful save.
    pub const fn dirty(&self) -> usize {
        self.dirty
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    pub const fn syntax(&self) -> Option<&'static SyntaxProfile> {
        self.syntax
    }

    pub fn syntax_name(&self) -> Option<&'static str> {
        self.syntax.map(|s| s.name)
    }

    /// Pick the syntax profile matching the filename and rehighlight.
    pub fn select_syntax(&mut self) {
        let syntax = self.filename.as_deref().and_then(highlight::profile_for_file);
        self.set_syntax(syntax);
    }

    /// Replace the active profile and rehighlight every row.
    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxProfile>) {
        self.syntax = syntax;
        self.rehighlight_all();
    }

    /// Classify every row from the top.
    pub fn rehighlight_all(&mut self) {
        let _scope = crate::perf::scope("document.rehighlight_all");
        let syntax = self.syntax;
        let mut open = false;
        for row in &mut self.rows {
            highlight::classify(row, syntax, open);
            open = row.open_comment;
        }
    }

    /// Mutable view of one row's highlight tags. The length is fixed, so
    /// callers can overlay tags without breaking the row invariant.
    pub fn highlight_mut(&mut self, at: usize) -> Option<&mut [Highlight]> {
        self.rows.get_mut(at).map(|row| row.highlight.as_mut_slice())
    }

    /// Insert a new row holding `text` at `at` (`0..=row_count()`).
    pub fn insert_row(&mut self, at: usize, text: &[u8]) {
        if at > self.rows.len() {
            return;
        }
        let mut row = Row::new(at, text);
        // Start from the state the displaced row was classified with, so
        // propagation notices when the new row changes it.
        row.open_comment = at > 0 && self.rows[at - 1].open_comment;
        self.rows.insert(at, row);
        self.reindex_from(at + 1);
        self.highlight_from(at);
        self.dirty += 1;
    }

    /// Remove the row at `at`. Out-of-range indices are ignored.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.reindex_from(at);
        self.highlight_from(at);
        self.dirty += 1;
    }

    /// Insert `byte` into row `at`, column clamped to the row length.
    pub fn insert_char(&mut self, at: usize, col: usize, byte: u8) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        row.insert(col, byte);
        self.highlight_from(at);
        self.dirty += 1;
    }

    /// Delete the byte at `col` in row `at`. Out-of-range is a no-op.
    pub fn delete_char(&mut self, at: usize, col: usize) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        if row.remove(col) {
            self.highlight_from(at);
            self.dirty += 1;
        }
    }

    pub fn append_to_row(&mut self, at: usize, text: &[u8]) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        row.append(text);
        self.highlight_from(at);
        self.dirty += 1;
    }

    /// Split row `at` at `col` (Enter).
    ///
    /// At column 0 an empty row is inserted before `at`; otherwise the
    /// suffix moves to a new row after it.
    pub fn split_row(&mut self, at: usize, col: usize) {
        if at > self.rows.len() {
            return;
        }
        if col == 0 || at == self.rows.len() {
            self.insert_row(at, b"");
            return;
        }
        let tail = self.rows[at].split_off(col);
        self.insert_row(at + 1, &tail);
        self.highlight_from(at);
    }

    /// Append row `at` to the previous row and remove it (Backspace at
    /// column 0).
    ///
    /// Returns the join column, i.e. the previous row's old length, or
    /// `None` when there is no previous row.
    pub fn join_row_into_previous(&mut self, at: usize) -> Option<usize> {
        if at == 0 || at >= self.rows.len() {
            return None;
        }
        let join_at = self.rows[at - 1].len();
        let text = std::mem::take(&mut self.rows[at].raw);
        self.delete_row(at);
        self.append_to_row(at - 1, &text);
        Some(join_at)
    }

    fn reindex_from(&mut self, start: usize) {
        for (index, row) in self.rows.iter_mut().enumerate().skip(start) {
            row.index = index;
        }
    }

    /// Reclassify row `at`, then each following row while the previous
    /// row's trailing comment state keeps changing.
    fn highlight_from(&mut self, mut at: usize) {
        let syntax = self.syntax;
        let start = at;
        while at < self.rows.len() {
            let starts_in_comment = at > 0 && self.rows[at - 1].open_comment;
            if !highlight::classify(&mut self.rows[at], syntax, starts_in_comment) {
                break;
            }
            at += 1;
        }
        if at > start + 1 {
            tracing::trace!(start, end = at, "propagated highlight");
        }
    }
}
