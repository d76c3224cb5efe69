/// The inverse-video bar below the text area.
pub mod status_bar {
    use crate::app::Model;
    use crate::ui::frame::{DrawCommand, Frame};

    /// Left and right halves of the status bar.
    pub fn text(model: &Model) -> (String, String) {
        let doc = &model.document;
        let name = doc
            .filename()
            .map_or_else(|| "[No Name]".to_string(), |path| path.display().to_string());
        let modified = if doc.is_dirty() { " (modified)" } else { "" };
        let left = format!("{name:.20} - {} lines{modified}", doc.row_count());
        let right = format!(
            "{} | {}/{}",
            doc.syntax_name().unwrap_or("no filetype"),
            model.cursor.cy + 1,
            doc.row_count()
        );
        (left, right)
    }

    pub fn draw(frame: &mut Frame, model: &Model) {
        let cols = model.viewport.screen_cols();
        let (left, right) = text(model);
        let left = super::truncate(&left, cols);

        frame.push(DrawCommand::Inverse(true));
        frame.push_text(left.as_bytes());
        let mut len = left.chars().count();
        let right_len = right.chars().count();
        while len < cols {
            if cols - len == right_len {
                frame.push_text(right.as_bytes());
                break;
            }
            frame.push_text(b" ");
            len += 1;
        }
        frame.push(DrawCommand::Inverse(false));
        frame.push(DrawCommand::NewLine);
    }
}

/// The last screen line: an open prompt or the latest status message.
pub mod message_bar {
    use std::time::Instant;

    use crate::app::Model;
    use crate::ui::frame::{DrawCommand, Frame};

    pub fn draw(frame: &mut Frame, model: &Model, now: Instant) {
        frame.push(DrawCommand::ClearLine);
        let cols = model.viewport.screen_cols();
        if let Some(prompt) = &model.prompt {
            frame.push_text(super::truncate(&prompt.message(), cols).as_bytes());
        } else if let Some(message) = model.status_message(now) {
            frame.push_text(super::truncate(message, cols).as_bytes());
        }
    }
}

/// Cut `text` to at most `width` characters.
fn truncate(text: &str, width: usize) -> &str {
    text.char_indices()
        .nth(width)
        .map_or(text, |(idx, _)| &text[..idx])
}
