use std::io::{self, Write};

use crossterm::{cursor, execute, terminal};

/// Raw-mode terminal session, restored on drop.
///
/// Dropping the guard leaves raw mode and clears the screen, so an error
/// returned from the event loop is printed on a usable terminal.
#[derive(Debug)]
pub(super) struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    pub(super) fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { restored: false })
    }

    /// Best-effort restore: try every step even if one fails.
    pub(super) fn restore(&mut self) -> io::Result<()> {
        if std::mem::replace(&mut self.restored, true) {
            return Ok(());
        }
        let mut first_err: Option<io::Error> = None;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Show
        ) {
            first_err.get_or_insert(err);
        }
        if let Err(err) = stdout.flush() {
            first_err.get_or_insert(err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            first_err.get_or_insert(err);
        }
        first_err.map_or(Ok(()), Err)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}
