use crate::app::{App, Model};
use crate::editor::DocumentError;

impl App {
    /// Carry out side effects requested by the last `update`.
    pub(super) fn handle_side_effects(model: &mut Model) {
        if model.take_save_request() {
            Self::save(model);
        }
    }

    fn save(model: &mut Model) {
        match model.document.save() {
            Ok(bytes) => model.set_status(format!("{bytes} bytes written to disk")),
            Err(DocumentError::NoFilename) => model.set_status("Save aborted"),
            Err(err) => {
                tracing::warn!(error = %err, "save failed");
                model.set_status(format!("Can't save! I/O error: {err}"));
            }
        }
    }
}
