//! Built-in syntax profiles.
//!
//! Each profile is a static, read-only description of how one language
//! should be classified. A document picks at most one profile, based on
//! its filename.

use std::path::Path;

use bitflags::bitflags;

bitflags! {
    /// Optional classification passes enabled for a profile.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SyntaxFlags: u8 {
        /// Tag numeric literals.
        const NUMBERS = 1 << 0;
        /// Tag single- and double-quoted string literals.
        const STRINGS = 1 << 1;
    }
}

/// Language-specific classification rules.
#[derive(Debug, PartialEq, Eq)]
pub struct SyntaxProfile {
    /// Filetype name shown in the status bar.
    pub name: &'static str,
    /// Filename patterns. A pattern starting with `.` matches the file
    /// extension exactly; anything else matches as a substring.
    pub file_match: &'static [&'static str],
    /// Primary keywords, tagged `Keyword1`.
    pub keywords: &'static [&'static str],
    /// Secondary keywords (usually type names), tagged `Keyword2`.
    pub types: &'static [&'static str],
    pub line_comment: Option<&'static str>,
    /// Block comment start and end delimiters.
    pub block_comment: Option<(&'static str, &'static str)>,
    pub flags: SyntaxFlags,
}

impl SyntaxProfile {
    /// Whether this profile claims the given filename.
    pub fn matches(&self, path: &Path) -> bool {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        if name.is_empty() {
            return false;
        }
        let extension = name.rfind('.').map(|idx| &name[idx..]);
        self.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                extension == Some(*pattern)
            } else {
                name.contains(pattern)
            }
        })
    }
}

pub static C: SyntaxProfile = SyntaxProfile {
    name: "c",
    file_match: &[".c", ".h", ".cpp"],
    keywords: &[
        "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
        "typedef", "static", "enum", "class", "case",
    ],
    types: &[
        "int", "long", "double", "float", "char", "unsigned", "signed", "void",
    ],
    line_comment: Some("//"),
    block_comment: Some(("/*", "*/")),
    flags: SyntaxFlags::NUMBERS.union(SyntaxFlags::STRINGS),
};

pub static RUST: SyntaxProfile = SyntaxProfile {
    name: "rust",
    file_match: &[".rs"],
    keywords: &[
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "fn", "for", "if",
        "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
        "self", "Self", "static", "struct", "super", "trait", "type", "unsafe", "use", "where",
        "while",
    ],
    types: &[
        "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16",
        "u32", "u64", "u128", "usize", "str", "String", "Vec", "Option", "Result",
    ],
    line_comment: Some("//"),
    block_comment: Some(("/*", "*/")),
    flags: SyntaxFlags::NUMBERS.union(SyntaxFlags::STRINGS),
};

pub static PYTHON: SyntaxProfile = SyntaxProfile {
    name: "python",
    file_match: &[".py"],
    keywords: &[
        "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else",
        "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
        "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
    ],
    types: &["int", "float", "str", "bytes", "list", "dict", "set", "tuple", "bool", "None"],
    line_comment: Some("#"),
    block_comment: None,
    flags: SyntaxFlags::NUMBERS.union(SyntaxFlags::STRINGS),
};

/// All built-in profiles, checked in order.
pub static DATABASE: &[&SyntaxProfile] = &[&C, &RUST, &PYTHON];

/// Find the first built-in profile matching `path`.
pub fn profile_for_file(path: &Path) -> Option<&'static SyntaxProfile> {
    DATABASE.iter().copied().find(|profile| profile.matches(path))
}
