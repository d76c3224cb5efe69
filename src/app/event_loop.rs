use std::io::{Write, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{event, terminal};

use crate::app::model::HELP_MESSAGE;
use crate::app::terminal::TerminalGuard;
use crate::app::{App, Model, update};
use crate::editor::Document;

/// Upper bound on one wait for terminal input.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the terminal cannot
    /// be put into raw mode, or reading events or writing frames fails.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        let document = match &self.file_path {
            Some(path) => Document::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?,
            None => Document::new(),
        };

        let mut guard = TerminalGuard::new()
            .context("Failed to initialize terminal: quill requires an interactive terminal")?;
        let size = terminal::size().context("Failed to read terminal size")?;
        tracing::debug!(cols = size.0, rows = size.1, "terminal initialized");

        let mut model = Model::new(document, size)
            .with_quit_times(self.quit_times)
            .with_highlight(self.highlight);
        model.set_status(HELP_MESSAGE);
        model.scroll();

        let result = Self::event_loop(&mut model);
        guard.restore().context("Failed to restore terminal")?;
        result
    }

    fn event_loop(model: &mut Model) -> Result<()> {
        let mut out = stdout();
        let mut needs_render = true;
        let mut last_message_visible = false;

        loop {
            let now = Instant::now();
            // Repaint once more when the status message times out.
            let message_visible = model.status_message(now).is_some();
            if message_visible != last_message_visible {
                needs_render = true;
            }
            last_message_visible = message_visible;

            if needs_render {
                Self::draw(&mut out, model, now)?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let event = event::read()?;
            if let Some(msg) = Self::handle_event(&event, model) {
                tracing::trace!(?msg, "message");
                *model = update(std::mem::take(model), msg);
                Self::handle_side_effects(model);
                needs_render = true;
            }
        }

        Ok(())
    }

    /// Build a frame and write it in one go.
    fn draw(out: &mut impl Write, model: &Model, now: Instant) -> Result<()> {
        let _scope = crate::perf::scope("app.draw");
        let bytes = crate::ui::render_frame(model, now)
            .encode()
            .context("Failed to encode frame")?;
        out.write_all(&bytes)?;
        out.flush()?;
        Ok(())
    }
}
