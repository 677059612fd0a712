//! FormView - pure projection of form state into what the screen shows.

use crate::code::CODE_LENGTH;
use crate::form::CodeForm;

/// Shown once a QR code has been generated for a valid code.
pub const SUCCESS_MESSAGE: &str = "Code is valid! QR code generated successfully.";

/// Shown in place of the QR code while the field is non-empty but no code exists.
pub const PLACEHOLDER_MESSAGE: &str =
    "QR code will appear here when you enter 12 valid characters";

/// Shown while an encode for the current code is outstanding.
pub const GENERATING_MESSAGE: &str = "Generating QR code...";

/// Visual state of the input field border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBorder {
    Neutral,
    Valid,
    Error,
}

/// Everything the form screen renders, derived from a [`CodeForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub code: String,
    /// Character counter, e.g. `3/12`.
    pub counter: String,
    pub counter_complete: bool,
    pub border: FieldBorder,
    pub error: Option<String>,
    pub success: Option<&'static str>,
    pub generating: bool,
    /// Half-block rendering of the QR code, one string per terminal line.
    pub qr_lines: Option<Vec<String>>,
    pub placeholder: Option<&'static str>,
}

impl FormView {
    /// Margin, in modules, around the terminal preview of the QR code.
    pub const PREVIEW_MARGIN: usize = 2;

    pub fn from_form(form: &CodeForm) -> Self {
        let validation = form.validation();
        let error = form.error().map(ToString::to_string);
        let length = form.code().chars().count();

        let border = if error.is_some() && !validation.is_empty {
            FieldBorder::Error
        } else if validation.is_valid {
            FieldBorder::Valid
        } else {
            FieldBorder::Neutral
        };

        let artifact = form.artifact();
        let qr_lines = artifact.map(|a| a.matrix().to_half_blocks(Self::PREVIEW_MARGIN));
        let placeholder = if artifact.is_none() && !validation.is_empty && !form.is_encoding() {
            Some(PLACEHOLDER_MESSAGE)
        } else {
            None
        };

        Self {
            code: form.code().to_string(),
            counter: format!("{}/{}", length, CODE_LENGTH),
            counter_complete: validation.is_valid,
            border,
            error,
            success: artifact.map(|_| SUCCESS_MESSAGE),
            generating: form.is_encoding(),
            qr_lines,
            placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{Artifact, EncodeError, QrMatrix};

    fn artifact_for(code: &str) -> Artifact {
        let matrix = QrMatrix::new(2, vec![true, false, false, true]).unwrap();
        Artifact::new(code.to_string(), vec![0], 256, matrix)
    }

    #[test]
    fn test_empty_form_view() {
        let view = FormView::from_form(&CodeForm::new());
        assert_eq!(view.counter, "0/12");
        assert_eq!(view.border, FieldBorder::Neutral);
        assert!(view.error.is_none());
        assert!(view.success.is_none());
        assert!(view.placeholder.is_none());
        assert!(view.qr_lines.is_none());
    }

    #[test]
    fn test_partial_form_view() {
        let mut form = CodeForm::new();
        form.set_input("AB3");
        let view = FormView::from_form(&form);
        assert_eq!(view.counter, "3/12");
        assert!(!view.counter_complete);
        assert_eq!(view.border, FieldBorder::Error);
        assert_eq!(
            view.error.as_deref(),
            Some("Enter exactly 12 characters (current: 3)")
        );
        assert_eq!(view.placeholder, Some(PLACEHOLDER_MESSAGE));
    }

    #[test]
    fn test_generating_form_view() {
        let mut form = CodeForm::new();
        form.set_input("T2020000PPPP");
        let view = FormView::from_form(&form);
        assert_eq!(view.border, FieldBorder::Valid);
        assert!(view.generating);
        assert!(view.success.is_none());
        assert!(view.placeholder.is_none());
    }

    #[test]
    fn test_generated_form_view() {
        let mut form = CodeForm::new();
        let ticket = form.set_input("T2020000PPPP").unwrap();
        form.resolve(&ticket, Ok(artifact_for("T2020000PPPP")));

        let view = FormView::from_form(&form);
        assert_eq!(view.counter, "12/12");
        assert!(view.counter_complete);
        assert_eq!(view.success, Some(SUCCESS_MESSAGE));
        assert!(!view.generating);
        // 2 modules + 2*2 margin = 6 rows -> 3 lines
        assert_eq!(view.qr_lines.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_failed_form_view() {
        let mut form = CodeForm::new();
        let ticket = form.set_input("T2020000PPPP").unwrap();
        form.resolve(&ticket, Err(EncodeError::Task("boom".to_string())));

        let view = FormView::from_form(&form);
        assert_eq!(view.border, FieldBorder::Error);
        assert_eq!(view.error.as_deref(), Some("Failed to generate QR code"));
        assert!(view.success.is_none());
        assert_eq!(view.placeholder, Some(PLACEHOLDER_MESSAGE));
    }
}
