use thiserror::Error;
use uuid::Uuid;

use crate::validate::Violation;

/// Errors surfaced by a persistence adapter.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode value for key '{key}': {message}")]
    Encode { key: String, message: String },
}

/// Errors raised while opening or submitting a fill-out flow.
#[derive(Error, Debug)]
pub enum FillError {
    /// The share id has no published snapshot. Filler and viewer surfaces
    /// render a "not found" state for this; it is never a crash.
    #[error("form '{form_id}' not found")]
    FormNotFound { form_id: Uuid },

    /// One or more fields failed validation on submit. Nothing was
    /// persisted; the per-field messages are carried for display.
    #[error("submission failed validation on {} field(s)", .violations.len())]
    ValidationFailed {
        violations: Vec<(Uuid, Vec<Violation>)>,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
