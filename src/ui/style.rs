//! Color definitions.
//!
//! Uses the eight standard ANSI colors so the terminal's own palette applies.

use crossterm::style::Color;

use crate::highlight::Highlight;

/// Foreground color for a highlight tag. `None` means the terminal's
/// default foreground.
pub const fn color_for(highlight: Highlight) -> Option<Color> {
    match highlight {
        Highlight::Normal => None,
        Highlight::Comment | Highlight::BlockComment => Some(Color::DarkCyan),
        Highlight::Keyword1 => Some(Color::DarkYellow),
        Highlight::Keyword2 => Some(Color::DarkGreen),
        Highlight::String => Some(Color::DarkMagenta),
        Highlight::Number => Some(Color::DarkRed),
        Highlight::Match => Some(Color::DarkBlue),
    }
}
