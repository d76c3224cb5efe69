use crate::app::Model;
use crate::app::prompt::{Prompt, PromptKind, PromptOutcome};
use crate::editor::Direction;
use crate::input::Key;
use crate::search::SearchSession;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a byte at the cursor
    InsertChar(u8),
    /// Insert a character as its UTF-8 bytes
    InsertText(String),
    /// Split the row at the cursor (Enter)
    InsertNewline,
    /// Delete the byte left of the cursor (Backspace)
    DeleteBackward,
    /// Delete the byte under the cursor (Delete)
    DeleteForward,

    // Navigation
    /// Move the cursor one step
    MoveCursor(Direction),
    /// Move one screen up
    PageUp,
    /// Move one screen down
    PageDown,
    /// Move to the start of the row (Home)
    MoveHome,
    /// Move to the end of the row (End)
    MoveEnd,

    // File
    /// Save, asking for a filename first if there is none
    Save,

    // Search
    /// Open the incremental search prompt
    Find,

    // Prompt
    /// A key typed while a prompt is open
    PromptKey(Key),

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// Disk writes are only requested here and carried out by the effects
/// handler.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Any key other than Ctrl-Q re-arms the unsaved-changes warning.
    if !matches!(msg, Message::Quit | Message::Resize(..)) {
        model.quit_remaining = model.quit_times;
    }

    match msg {
        // Editing
        Message::InsertChar(byte) => model.insert_char(byte),
        Message::InsertText(text) => {
            for byte in text.bytes() {
                model.insert_char(byte);
            }
        }
        Message::InsertNewline => model.insert_newline(),
        Message::DeleteBackward => model.delete_char(),
        Message::DeleteForward => {
            model.cursor.move_in(&model.document, Direction::Right);
            model.delete_char();
        }

        // Navigation
        Message::MoveCursor(direction) => model.cursor.move_in(&model.document, direction),
        Message::PageUp => model.page(Direction::Up),
        Message::PageDown => model.page(Direction::Down),
        Message::MoveHome => model.cursor.move_home(),
        Message::MoveEnd => model.cursor.move_end(&model.document),

        // File
        Message::Save => {
            if model.document.filename().is_some() {
                model.request_save();
            } else {
                model.prompt = Some(Prompt::save_as());
            }
        }

        // Search
        Message::Find => {
            let session = SearchSession::begin(model.cursor, model.viewport);
            model.prompt = Some(Prompt::search(session));
        }

        // Prompt
        Message::PromptKey(key) => handle_prompt_key(&mut model, key),

        // Window
        Message::Resize(width, height) => model.viewport.resize(width, height),
        Message::Redraw => {}

        // Application
        Message::Quit => {
            if model.document.is_dirty() && model.quit_remaining > 0 {
                model.set_status(format!(
                    "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                    model.quit_remaining
                ));
                model.quit_remaining -= 1;
            } else {
                model.should_quit = true;
            }
        }
    }

    model.scroll();
    model
}

fn handle_prompt_key(model: &mut Model, key: Key) {
    let Some(prompt) = model.prompt.as_mut() else {
        return;
    };
    let outcome = prompt.handle_key(key);
    if let PromptKind::Search(session) = &mut prompt.kind {
        session.advance(
            &prompt.input,
            key,
            &mut model.document,
            &mut model.cursor,
            &mut model.viewport,
        );
    }
    match outcome {
        PromptOutcome::Pending => {}
        PromptOutcome::Cancelled => close_prompt(model, None),
        PromptOutcome::Confirmed(input) => close_prompt(model, Some(input)),
    }
}

fn close_prompt(model: &mut Model, input: Option<String>) {
    let Some(prompt) = model.prompt.take() else {
        return;
    };
    model.clear_status();
    match (prompt.kind, input) {
        (PromptKind::SaveAs, Some(name)) => {
            model.document.set_filename(name);
            model.select_syntax();
            model.request_save();
        }
        (PromptKind::SaveAs, None) => model.set_status("Save aborted"),
        (PromptKind::Search(session), input) => {
            let commit = input.is_some();
            let found = session.found();
            session.end(
                commit,
                &mut model.document,
                &mut model.cursor,
                &mut model.viewport,
            );
            if commit {
                model.set_status(if found { "Found" } else { "Not found" });
            }
        }
    }
}
