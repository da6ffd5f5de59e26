// ── Core error types ──
//
// User-facing errors from confsmith-core. Validation failures carry a
// structured kind so the UI layer can point at the offending field;
// registry failures are their own variant because they happen on edit,
// before any submission attempt.

use thiserror::Error;

use crate::validate::ValidationError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The registry is at the device-model interface limit.
    #[error("interface limit reached: this router model supports at most {max} interfaces")]
    CapacityExceeded { max: usize },

    /// A form field failed validation; submission was not attempted.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
