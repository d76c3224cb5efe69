use std::time::Instant;

use crossterm::style::Color;

use crate::app::Model;
use crate::editor::{Document, Row};
use crate::highlight::Highlight;
use crate::ui::frame::{DrawCommand, Frame};
use crate::ui::style::color_for;
use crate::ui::viewport::Viewport;
use crate::ui::{message_bar, status_bar};

/// Build the complete frame for one screen refresh.
pub fn render_frame(model: &Model, now: Instant) -> Frame {
    let _scope = crate::perf::scope("ui.render_frame");
    let mut frame = Frame::new();
    frame.push(DrawCommand::HideCursor);
    frame.push(DrawCommand::MoveTo { col: 0, row: 0 });

    draw_rows(&mut frame, &model.document, &model.viewport);
    status_bar::draw(&mut frame, model);
    message_bar::draw(&mut frame, model, now);

    let (col, row) = model.viewport.cursor_position(&model.cursor);
    frame.push(DrawCommand::MoveTo {
        col: u16::try_from(col).unwrap_or(u16::MAX),
        row: u16::try_from(row).unwrap_or(u16::MAX),
    });
    frame.push(DrawCommand::ShowCursor);
    frame
}

fn draw_rows(frame: &mut Frame, doc: &Document, viewport: &Viewport) {
    let screen_rows = viewport.screen_rows();
    let screen_cols = viewport.screen_cols();
    for (y, file_row) in viewport.visible_rows().enumerate() {
        if let Some(row) = doc.row(file_row) {
            draw_row(frame, row, viewport.col_offset(), screen_cols);
        } else if doc.is_empty() && y == screen_rows / 3 {
            draw_welcome(frame, screen_cols);
        } else {
            frame.push_text(b"~");
        }
        frame.push(DrawCommand::ResetColor);
        frame.push(DrawCommand::ClearLine);
        frame.push(DrawCommand::NewLine);
    }
}

fn draw_welcome(frame: &mut Frame, screen_cols: usize) {
    let welcome = format!("Quill editor -- version {}", env!("CARGO_PKG_VERSION"));
    let len = welcome.len().min(screen_cols);
    let mut padding = (screen_cols - len) / 2;
    if padding > 0 {
        frame.push_text(b"~");
        padding -= 1;
    }
    frame.push_text(&b" ".repeat(padding));
    frame.push_text(&welcome.as_bytes()[..len]);
}

/// Draw the visible slice of one row, switching color only when the
/// tag's color differs from the previous byte's.
fn draw_row(frame: &mut Frame, row: &Row, col_offset: usize, screen_cols: usize) {
    let start = col_offset.min(row.rendered.len());
    let end = (start + screen_cols).min(row.rendered.len());
    let mut current: Option<Color> = None;

    for (&byte, &tag) in row.rendered[start..end].iter().zip(&row.highlight[start..end]) {
        if byte.is_ascii_control() {
            let glyph = if byte <= 26 { b'@' + byte } else { b'?' };
            frame.push(DrawCommand::Inverse(true));
            frame.push_text(&[glyph]);
            frame.push(DrawCommand::Inverse(false));
            if let Some(color) = current {
                frame.push(DrawCommand::SetColor(color));
            }
        } else if tag == Highlight::Normal {
            if current.take().is_some() {
                frame.push(DrawCommand::ResetColor);
            }
            frame.push_text(&[byte]);
        } else {
            let color = color_for(tag);
            if color != current {
                current = color;
                frame.push(color.map_or(DrawCommand::ResetColor, DrawCommand::SetColor));
            }
            frame.push_text(&[byte]);
        }
    }
}
