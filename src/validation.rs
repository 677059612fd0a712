//! Validation of normalized codes and the user-facing form errors.

use crate::code::CODE_LENGTH;

/// Errors shown inline in the form. Neither is fatal; editing the code recovers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Enter exactly {required} characters (current: {current})")]
    IncompleteInput {
        /// Current number of characters
        current: usize,
        /// Number of characters a complete code needs
        required: usize,
    },

    #[error("Failed to generate QR code")]
    EncodingFailure,
}

/// Validation state derived from a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_empty: bool,
    pub is_valid: bool,
    pub error: Option<FormError>,
}

impl Validation {
    /// The human-readable message for the current error, if any.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Validate a normalized code.
///
/// An empty code carries no error so that "not started" stays distinct
/// from "incomplete".
pub fn validate(code: &str) -> Validation {
    let current = code.chars().count();
    let error = if current == 0 || current == CODE_LENGTH {
        None
    } else {
        Some(FormError::IncompleteInput {
            current,
            required: CODE_LENGTH,
        })
    };

    Validation {
        is_empty: current == 0,
        is_valid: current == CODE_LENGTH,
        error,
    }
}
