//! Syntax classification for document rows.
//!
//! Classification is a single left-to-right scan over a row's rendered
//! bytes. The only state carried between rows is whether a block comment
//! is still open at the end of a row; the document re-runs the scan on
//! following rows while that state keeps changing.

pub mod syntax;

pub use syntax::{SyntaxFlags, SyntaxProfile, profile_for_file};

use crate::editor::Row;

/// Classification tag for one rendered byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    BlockComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    /// Temporary overlay used by incremental search.
    Match,
}

/// Bytes that end a token, besides whitespace and end of row.
const SEPARATORS: &[u8] = b",.()+-/*=~%<>[];";

pub fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\0' || SEPARATORS.contains(&byte)
}

/// Classify `row.rendered` into `row.highlight`.
///
/// `starts_in_comment` is the previous row's `open_comment`. Returns
/// `true` when the row's own `open_comment` changed, meaning the next row
/// must be reclassified too.
pub fn classify(row: &mut Row, syntax: Option<&SyntaxProfile>, starts_in_comment: bool) -> bool {
    row.highlight.clear();
    row.highlight.resize(row.rendered.len(), Highlight::Normal);

    let Some(syntax) = syntax else {
        let changed = row.open_comment;
        row.open_comment = false;
        return changed;
    };

    let text = row.rendered.as_slice();
    let hl = &mut row.highlight;
    let line_comment = syntax.line_comment.map(str::as_bytes).filter(|s| !s.is_empty());
    let block_comment = syntax
        .block_comment
        .map(|(start, end)| (start.as_bytes(), end.as_bytes()))
        .filter(|(start, end)| !start.is_empty() && !end.is_empty());

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = starts_in_comment && block_comment.is_some();

    let mut i = 0;
    while i < text.len() {
        let c = text[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { Highlight::Normal };

        if let Some(marker) = line_comment
            && in_string.is_none()
            && !in_comment
            && text[i..].starts_with(marker)
        {
            hl[i..].fill(Highlight::Comment);
            break;
        }

        if let Some((start, end)) = block_comment
            && in_string.is_none()
        {
            if in_comment {
                if text[i..].starts_with(end) {
                    hl[i..i + end.len()].fill(Highlight::BlockComment);
                    i += end.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    hl[i] = Highlight::BlockComment;
                    i += 1;
                }
                continue;
            } else if text[i..].starts_with(start) {
                hl[i..i + start.len()].fill(Highlight::BlockComment);
                i += start.len();
                in_comment = true;
                continue;
            }
        }

        if syntax.flags.contains(SyntaxFlags::STRINGS) {
            if let Some(quote) = in_string {
                hl[i] = Highlight::String;
                if c == b'\\' && i + 1 < text.len() {
                    hl[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = Some(c);
                hl[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if syntax.flags.contains(SyntaxFlags::NUMBERS)
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            hl[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep && let Some((len, tag)) = keyword_at(syntax, &text[i..]) {
            hl[i..i + len].fill(tag);
            i += len;
            prev_sep = false;
            continue;
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    let changed = row.open_comment != in_comment;
    row.open_comment = in_comment;
    changed
}

/// Match a separator-bounded keyword at the start of `rest`.
fn keyword_at(syntax: &SyntaxProfile, rest: &[u8]) -> Option<(usize, Highlight)> {
    let primary = syntax.keywords.iter().map(|kw| (kw, Highlight::Keyword1));
    let secondary = syntax.types.iter().map(|kw| (kw, Highlight::Keyword2));
    primary.chain(secondary).find_map(|(kw, tag)| {
        let kw = kw.as_bytes();
        let bounded = rest.get(kw.len()).is_none_or(|&next| is_separator(next));
        (rest.starts_with(kw) && bounded).then_some((kw.len(), tag))
    })
}
