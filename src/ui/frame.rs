//! Draw commands for one screen refresh.
//!
//! Rendering builds a [`Frame`] of commands first and only turns it into
//! terminal escape sequences in [`Frame::encode`], so the whole refresh
//! reaches the terminal in a single write.

use std::io;

use crossterm::queue;
use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use crossterm::{cursor, terminal};

/// One terminal operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    HideCursor,
    ShowCursor,
    MoveTo { col: u16, row: u16 },
    /// Clear from the cursor to the end of the line.
    ClearLine,
    NewLine,
    Text(Vec<u8>),
    SetColor(Color),
    /// Back to the default foreground color.
    ResetColor,
    Inverse(bool),
}

/// An ordered list of draw commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Append text, extending the previous command when it is text too.
    pub fn push_text(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        if let Some(DrawCommand::Text(text)) = self.commands.last_mut() {
            text.extend_from_slice(bytes);
        } else {
            self.commands.push(DrawCommand::Text(bytes.to_vec()));
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Serialize every command into terminal bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if crossterm fails to format a command.
    pub fn encode(&self) -> io::Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.commands.len() * 8);
        for command in &self.commands {
            match command {
                DrawCommand::HideCursor => queue!(out, cursor::Hide)?,
                DrawCommand::ShowCursor => queue!(out, cursor::Show)?,
                DrawCommand::MoveTo { col, row } => queue!(out, cursor::MoveTo(*col, *row))?,
                DrawCommand::ClearLine => {
                    queue!(out, terminal::Clear(terminal::ClearType::UntilNewLine))?;
                }
                DrawCommand::NewLine => out.extend_from_slice(b"\r\n"),
                DrawCommand::Text(bytes) => out.extend_from_slice(bytes),
                DrawCommand::SetColor(color) => queue!(out, SetForegroundColor(*color))?,
                DrawCommand::ResetColor => queue!(out, SetForegroundColor(Color::Reset))?,
                DrawCommand::Inverse(on) => {
                    let attribute = if *on {
                        Attribute::Reverse
                    } else {
                        Attribute::NoReverse
                    };
                    queue!(out, SetAttribute(attribute))?;
                }
            }
        }
        Ok(out)
    }
}
