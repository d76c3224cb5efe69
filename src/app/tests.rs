use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tempfile::tempdir;

use crate::editor::{Cursor, Direction, Document};
use crate::input::Key;

use super::{App, HELP_MESSAGE, Message, Model, update};

fn create_test_model(lines: &[&str]) -> Model {
    let doc = Document::from_lines(lines.iter().map(|l| l.as_bytes().to_vec()));
    Model::new(doc, (80, 24))
}

fn create_long_test_model() -> Model {
    let lines: Vec<String> = (0..100).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    create_test_model(&refs)
}

fn raw_lines(model: &Model) -> Vec<String> {
    model
        .document
        .rows()
        .iter()
        .map(|row| String::from_utf8_lossy(&row.raw).into_owned())
        .collect()
}

fn apply(model: Model, messages: impl IntoIterator<Item = Message>) -> Model {
    messages.into_iter().fold(model, |model, msg| {
        let mut model = update(model, msg);
        App::handle_side_effects(&mut model);
        model
    })
}

fn type_text(model: Model, text: &str) -> Model {
    apply(model, text.bytes().map(Message::InsertChar))
}

fn prompt_keys(model: Model, text: &str) -> Model {
    apply(model, text.chars().map(|c| Message::PromptKey(Key::Char(c))))
}

fn status(model: &Model) -> Option<&str> {
    model.status_message(Instant::now())
}

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

// Input mapping

#[test]
fn test_ctrl_keys_map_to_commands() {
    let model = create_test_model(&[]);
    let cases = [
        ('q', Message::Quit),
        ('s', Message::Save),
        ('f', Message::Find),
        ('l', Message::Redraw),
    ];
    for (c, expected) in cases {
        let event = key_event(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(App::handle_event(&event, &model), Some(expected), "ctrl-{c}");
    }
}

#[test]
fn test_arrow_and_edit_keys_map_to_messages() {
    let model = create_test_model(&[]);
    let cases = [
        (KeyCode::Up, Message::MoveCursor(Direction::Up)),
        (KeyCode::Right, Message::MoveCursor(Direction::Right)),
        (KeyCode::PageDown, Message::PageDown),
        (KeyCode::Home, Message::MoveHome),
        (KeyCode::End, Message::MoveEnd),
        (KeyCode::Enter, Message::InsertNewline),
        (KeyCode::Backspace, Message::DeleteBackward),
        (KeyCode::Delete, Message::DeleteForward),
        (KeyCode::Tab, Message::InsertChar(b'\t')),
        (KeyCode::Esc, Message::Redraw),
        (KeyCode::Char('x'), Message::InsertChar(b'x')),
    ];
    for (code, expected) in cases {
        let event = key_event(code, KeyModifiers::NONE);
        assert_eq!(App::handle_event(&event, &model), Some(expected), "{code:?}");
    }
}

#[test]
fn test_other_ctrl_letter_inserts_control_byte() {
    let model = create_test_model(&[]);
    let event = key_event(KeyCode::Char('a'), KeyModifiers::CONTROL);
    assert_eq!(App::handle_event(&event, &model), Some(Message::InsertChar(1)));
}

#[test]
fn test_non_ascii_char_inserts_utf8_bytes() {
    let model = create_test_model(&[]);
    let event = key_event(KeyCode::Char('é'), KeyModifiers::NONE);
    let msg = App::handle_event(&event, &model).unwrap();
    assert_eq!(msg, Message::InsertText("é".to_string()));

    let model = apply(model, [msg]);
    assert_eq!(model.document.rows()[0].raw, "é".as_bytes());
    assert_eq!(model.cursor.cx, 2);
}

#[test]
fn test_open_prompt_receives_all_keys() {
    let model = update(create_test_model(&["a"]), Message::Find);
    let event = key_event(KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert_eq!(
        App::handle_event(&event, &model),
        Some(Message::PromptKey(Key::Ctrl('q')))
    );
}

#[test]
fn test_resize_event_maps_to_message() {
    let model = create_test_model(&[]);
    assert_eq!(
        App::handle_event(&Event::Resize(100, 40), &model),
        Some(Message::Resize(100, 40))
    );
}

// Editing

#[test]
fn test_typing_into_empty_document_creates_row() {
    let model = type_text(create_test_model(&[]), "hi");
    assert_eq!(raw_lines(&model), ["hi"]);
    assert_eq!(model.cursor.cx, 2);
    assert!(model.document.is_dirty());
}

#[test]
fn test_typing_on_virtual_last_line_appends_row() {
    let mut model = create_test_model(&["a"]);
    model.cursor = Cursor::at(0, 1);
    let model = type_text(model, "b");
    assert_eq!(raw_lines(&model), ["a", "b"]);
}

#[test]
fn test_enter_splits_row() {
    let mut model = create_test_model(&["hello world"]);
    model.cursor = Cursor::at(5, 0);
    let model = update(model, Message::InsertNewline);
    assert_eq!(raw_lines(&model), ["hello", " world"]);
    assert_eq!((model.cursor.cx, model.cursor.cy), (0, 1));
}

#[test]
fn test_backspace_at_column_zero_joins_rows() {
    let mut model = create_test_model(&["foo", "bar"]);
    model.cursor = Cursor::at(0, 1);
    let model = update(model, Message::DeleteBackward);
    assert_eq!(raw_lines(&model), ["foobar"]);
    assert_eq!((model.cursor.cx, model.cursor.cy), (3, 0));
}

#[test]
fn test_backspace_at_origin_is_noop() {
    let model = update(create_test_model(&["foo"]), Message::DeleteBackward);
    assert_eq!(raw_lines(&model), ["foo"]);
    assert!(!model.document.is_dirty());
}

#[test]
fn test_backspace_on_virtual_line_is_noop() {
    let mut model = create_test_model(&["foo"]);
    model.cursor = Cursor::at(0, 1);
    let model = update(model, Message::DeleteBackward);
    assert_eq!(raw_lines(&model), ["foo"]);
}

#[test]
fn test_delete_removes_char_under_cursor() {
    let mut model = create_test_model(&["abc"]);
    model.cursor = Cursor::at(1, 0);
    let model = update(model, Message::DeleteForward);
    assert_eq!(raw_lines(&model), ["ac"]);
    assert_eq!(model.cursor.cx, 1);
}

#[test]
fn test_delete_at_end_of_row_joins_next() {
    let mut model = create_test_model(&["ab", "cd"]);
    model.cursor = Cursor::at(2, 0);
    let model = update(model, Message::DeleteForward);
    assert_eq!(raw_lines(&model), ["abcd"]);
    assert_eq!((model.cursor.cx, model.cursor.cy), (2, 0));
}

// Navigation

#[test]
fn test_page_down_moves_a_screen_past_bottom() {
    let model = update(create_long_test_model(), Message::PageDown);
    // Bottom of the first screen is row 21; one more screen is 43.
    assert_eq!(model.cursor.cy, 43);
    assert_eq!(model.viewport.row_offset(), 22);
}

#[test]
fn test_page_up_returns_toward_top() {
    let mut model = create_long_test_model();
    model.cursor = Cursor::at(0, 60);
    model.scroll();
    let model = update(model, Message::PageUp);
    assert_eq!(model.cursor.cy, 39 - 22);
}

#[test]
fn test_page_down_stops_at_virtual_last_line() {
    let model = apply(create_test_model(&["a", "b"]), [Message::PageDown]);
    assert_eq!(model.cursor.cy, 2);
}

#[test]
fn test_move_end_and_home() {
    let model = apply(create_test_model(&["hello"]), [Message::MoveEnd]);
    assert_eq!(model.cursor.cx, 5);
    let model = update(model, Message::MoveHome);
    assert_eq!(model.cursor.cx, 0);
}

#[test]
fn test_scroll_follows_cursor() {
    let model = apply(
        create_long_test_model(),
        std::iter::repeat_n(Message::MoveCursor(Direction::Down), 30),
    );
    assert_eq!(model.cursor.cy, 30);
    assert_eq!(model.viewport.row_offset(), 9);
}

#[test]
fn test_resize_changes_screen_rows() {
    let model = update(create_test_model(&[]), Message::Resize(100, 50));
    assert_eq!(model.viewport.screen_rows(), 48);
    assert_eq!(model.viewport.screen_cols(), 100);
}

// Quit

#[test]
fn test_quit_clean_document_exits_immediately() {
    let model = update(create_test_model(&["a"]), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_quit_dirty_document_needs_repeated_presses() {
    let mut model = type_text(create_test_model(&[]), "x");
    for remaining in (1..=3).rev() {
        model = update(model, Message::Quit);
        assert!(!model.should_quit);
        let expected = format!(
            "WARNING!!! File has unsaved changes. Press Ctrl-Q {remaining} more times to quit."
        );
        assert_eq!(status(&model), Some(expected.as_str()));
    }
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_other_key_rearms_quit_warning() {
    let model = type_text(create_test_model(&[]), "x");
    let model = apply(model, [Message::Quit, Message::Quit]);
    let model = update(model, Message::MoveCursor(Direction::Left));
    let model = update(model, Message::Quit);
    assert!(!model.should_quit);
    assert!(status(&model).is_some_and(|s| s.contains("Press Ctrl-Q 3 more")));
}

#[test]
fn test_custom_quit_times() {
    let model = type_text(create_test_model(&[]).with_quit_times(0), "x");
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

// Save

#[test]
fn test_save_writes_file_and_reports_bytes() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("notes.txt");
    let mut model = create_test_model(&["ab", "cd"]);
    model.document.set_filename(&file_path);
    let model = apply(model, [Message::InsertChar(b'x'), Message::Save]);

    assert_eq!(std::fs::read(&file_path).unwrap(), b"xab\ncd\n");
    assert_eq!(status(&model), Some("7 bytes written to disk"));
    assert!(!model.document.is_dirty());
}

#[test]
fn test_save_without_filename_prompts_then_saves() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("new.c");
    let model = type_text(create_test_model(&[]), "int x;");
    let model = apply(model, [Message::Save]);
    assert!(model.prompt.is_some());
    assert!(model.document.filename().is_none());

    let model = prompt_keys(model, &file_path.display().to_string());
    let model = apply(model, [Message::PromptKey(Key::Enter)]);

    assert!(model.prompt.is_none());
    assert_eq!(model.document.filename(), Some(file_path.as_path()));
    assert_eq!(model.document.syntax_name(), Some("c"));
    assert_eq!(std::fs::read(&file_path).unwrap(), b"int x;\n");
    assert_eq!(status(&model), Some("7 bytes written to disk"));
}

#[test]
fn test_save_as_escape_aborts() {
    let model = type_text(create_test_model(&[]), "x");
    let model = apply(model, [Message::Save, Message::PromptKey(Key::Char('a'))]);
    let model = apply(model, [Message::PromptKey(Key::Escape)]);
    assert!(model.prompt.is_none());
    assert!(model.document.filename().is_none());
    assert_eq!(status(&model), Some("Save aborted"));
    assert!(model.document.is_dirty());
}

#[test]
fn test_save_as_with_highlight_disabled_keeps_plain_text() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("plain.c");
    let model = create_test_model(&["int x;"]).with_highlight(false);
    let model = apply(model, [Message::Save]);
    let model = prompt_keys(model, &file_path.display().to_string());
    let model = apply(model, [Message::PromptKey(Key::Enter)]);
    assert_eq!(model.document.syntax_name(), None);
    assert!(file_path.exists());
}

#[test]
fn test_save_failure_reports_error_and_stays_dirty() {
    let dir = tempdir().unwrap();
    let mut model = type_text(create_test_model(&[]), "x");
    model.document.set_filename(dir.path().join("missing").join("file.txt"));
    let model = apply(model, [Message::Save]);
    assert!(status(&model).is_some_and(|s| s.starts_with("Can't save! I/O error: ")));
    assert!(model.document.is_dirty());
}

// Search

#[test]
fn test_search_moves_cursor_and_reports_found() {
    let model = create_test_model(&["alpha", "beta", "gamma"]);
    let model = apply(model, [Message::Find]);
    let model = prompt_keys(model, "mm");
    assert_eq!((model.cursor.cx, model.cursor.cy), (2, 2));

    let model = apply(model, [Message::PromptKey(Key::Enter)]);
    assert!(model.prompt.is_none());
    assert_eq!((model.cursor.cx, model.cursor.cy), (2, 2));
    assert_eq!(status(&model), Some("Found"));
    assert!(
        model.document.rows()[2]
            .highlight
            .iter()
            .all(|&h| h == crate::highlight::Highlight::Normal)
    );
}

#[test]
fn test_search_escape_restores_cursor() {
    let mut model = create_long_test_model();
    model.cursor = Cursor::at(2, 5);
    model.scroll();
    let model = apply(model, [Message::Find]);
    let model = prompt_keys(model, "line 80");
    assert_eq!(model.cursor.cy, 80);
    assert_eq!(model.viewport.row_offset(), 80);

    let model = apply(model, [Message::PromptKey(Key::Escape)]);
    assert_eq!((model.cursor.cx, model.cursor.cy), (2, 5));
    assert_eq!(model.viewport.row_offset(), 0);
    assert_eq!(status(&model), None);
}

#[test]
fn test_resize_during_search_survives_cancel() {
    let mut model = create_long_test_model();
    model.cursor = Cursor::at(2, 5);
    model.scroll();
    let model = apply(model, [Message::Find]);
    let model = prompt_keys(model, "line 60");
    let model = apply(model, [Message::Resize(120, 40)]);
    assert_eq!(model.viewport.screen_rows(), 38);

    let model = apply(model, [Message::PromptKey(Key::Escape)]);
    assert_eq!((model.cursor.cx, model.cursor.cy), (2, 5));
    assert_eq!(model.viewport.row_offset(), 0);
    assert_eq!(model.viewport.screen_rows(), 38);
    assert_eq!(model.viewport.screen_cols(), 120);
    assert_eq!(model.viewport.visible_rows(), 0..38);
}

#[test]
fn test_search_not_found_message() {
    let model = apply(create_test_model(&["abc"]), [Message::Find]);
    let model = prompt_keys(model, "zz");
    let model = apply(model, [Message::PromptKey(Key::Enter)]);
    assert_eq!(status(&model), Some("Not found"));
    assert_eq!(model.cursor, Cursor::default());
}

#[test]
fn test_search_arrows_cycle_matches() {
    let model = apply(create_test_model(&["x1", "y", "x2"]), [Message::Find]);
    let model = prompt_keys(model, "x");
    assert_eq!(model.cursor.cy, 0);
    let model = apply(model, [Message::PromptKey(Key::Down)]);
    assert_eq!(model.cursor.cy, 2);
    let model = apply(model, [Message::PromptKey(Key::Right)]);
    assert_eq!(model.cursor.cy, 0);
    let model = apply(model, [Message::PromptKey(Key::Left)]);
    assert_eq!(model.cursor.cy, 2);
}

#[test]
fn test_search_does_not_dirty_document() {
    let model = apply(create_test_model(&["abc"]), [Message::Find]);
    let model = prompt_keys(model, "b");
    let model = apply(model, [Message::PromptKey(Key::Enter)]);
    assert!(!model.document.is_dirty());
}

#[test]
fn test_help_message_text() {
    assert_eq!(
        HELP_MESSAGE,
        "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find"
    );
}
