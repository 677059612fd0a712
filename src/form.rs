//! CodeForm - the reactive state machine behind the code entry form.
//!
//! Every change of the normalized code re-derives validation and, when the
//! code is complete, issues an [`EncodeTicket`]. Encode outcomes are only
//! committed while their ticket is still the one in flight.

use crate::code::{normalize, CODE_LENGTH};
use crate::encoder::{Artifact, EncodeError};
use crate::validation::{validate, FormError, Validation};

/// Request token attached to an encode. Two requests for the same code
/// value still get distinct ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeTicket {
    pub id: u64,
    pub code: String,
}

/// Phase of the form, keyed by code length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No characters entered.
    Empty,
    /// Between 1 and 11 characters.
    Partial,
    /// Exactly 12 characters.
    Complete,
}

/// What happened to an encode outcome handed to [`CodeForm::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome belonged to the current request and is now visible.
    Committed,
    /// The code changed since the request; the outcome was dropped.
    Stale,
}

/// State of the code entry form.
#[derive(Debug, Default)]
pub struct CodeForm {
    code: String,
    error: Option<FormError>,
    artifact: Option<Artifact>,
    in_flight: Option<EncodeTicket>,
    next_id: u64,
}

impl CodeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current normalized code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The error currently shown, if any.
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// The committed artifact for the current code, if any.
    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    /// Validation derived from the current code.
    pub fn validation(&self) -> Validation {
        validate(&self.code)
    }

    pub fn phase(&self) -> FormPhase {
        match self.code.len() {
            0 => FormPhase::Empty,
            CODE_LENGTH => FormPhase::Complete,
            _ => FormPhase::Partial,
        }
    }

    /// Whether an encode for the current code is still outstanding.
    pub fn is_encoding(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Replace the field contents with `raw`.
    ///
    /// Returns a ticket when the normalized value changed and is complete;
    /// the caller is expected to run the encoder for it. An unchanged value
    /// is a no-op and issues nothing.
    pub fn set_input(&mut self, raw: &str) -> Option<EncodeTicket> {
        let next = normalize(raw);
        if next == self.code {
            return None;
        }

        self.code = next;
        self.artifact = None;
        if let Some(abandoned) = self.in_flight.take() {
            log::debug!("Abandoning encode #{} for {}", abandoned.id, abandoned.code);
        }

        let validation = validate(&self.code);
        self.error = validation.error;
        if !validation.is_valid {
            return None;
        }

        let ticket = EncodeTicket {
            id: self.next_id,
            code: self.code.clone(),
        };
        self.next_id += 1;
        self.in_flight = Some(ticket.clone());
        log::debug!("Issued encode #{} for {}", ticket.id, ticket.code);
        Some(ticket)
    }

    /// Append a typed character.
    pub fn push_char(&mut self, c: char) -> Option<EncodeTicket> {
        let mut raw = self.code.clone();
        raw.push(c);
        self.set_input(&raw)
    }

    /// Append pasted text.
    pub fn push_str(&mut self, text: &str) -> Option<EncodeTicket> {
        let raw = format!("{}{}", self.code, text);
        self.set_input(&raw)
    }

    /// Delete the last character.
    pub fn pop_char(&mut self) -> Option<EncodeTicket> {
        let mut raw = self.code.clone();
        raw.pop();
        self.set_input(&raw)
    }

    /// Empty the field.
    pub fn clear(&mut self) -> Option<EncodeTicket> {
        self.set_input("")
    }

    /// Apply the outcome of the encode started for `ticket`.
    ///
    /// Outcomes for any ticket other than the one in flight are discarded
    /// without touching state.
    pub fn resolve(
        &mut self,
        ticket: &EncodeTicket,
        result: Result<Artifact, EncodeError>,
    ) -> Resolution {
        if self.in_flight.as_ref() != Some(ticket) {
            log::debug!(
                "Discarding stale encode #{} for {} (current code: {:?})",
                ticket.id,
                ticket.code,
                self.code
            );
            return Resolution::Stale;
        }

        self.in_flight = None;
        match result {
            Ok(artifact) => {
                log::info!("QR code ready for {}", ticket.code);
                self.artifact = Some(artifact);
                self.error = None;
            }
            Err(e) => {
                log::error!("Error generating QR code for {}: {}", ticket.code, e);
                self.artifact = None;
                self.error = Some(FormError::EncodingFailure);
            }
        }
        Resolution::Committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::QrMatrix;

    fn artifact_for(code: &str) -> Artifact {
        let matrix = QrMatrix::new(1, vec![true]).unwrap();
        Artifact::new(code.to_string(), vec![1, 2, 3], 256, matrix)
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = CodeForm::new();
        assert_eq!(form.phase(), FormPhase::Empty);
        assert_eq!(form.code(), "");
        assert!(form.error().is_none());
        assert!(form.artifact().is_none());
        assert!(!form.is_encoding());
    }

    #[test]
    fn test_partial_input_sets_error_without_ticket() {
        let mut form = CodeForm::new();
        assert!(form.set_input("ab3").is_none());
        assert_eq!(form.code(), "AB3");
        assert_eq!(form.phase(), FormPhase::Partial);
        assert_eq!(
            form.error(),
            Some(&FormError::IncompleteInput {
                current: 3,
                required: 12
            })
        );
    }

    #[test]
    fn test_complete_input_issues_ticket_and_clears_error() {
        let mut form = CodeForm::new();
        form.set_input("AB3");
        let ticket = form.set_input("T2020000PPPP").expect("complete code issues a ticket");
        assert_eq!(ticket.code, "T2020000PPPP");
        assert_eq!(form.phase(), FormPhase::Complete);
        assert!(form.error().is_none());
        assert!(form.artifact().is_none());
        assert!(form.is_encoding());
    }

    #[test]
    fn test_unchanged_input_is_a_no_op() {
        let mut form = CodeForm::new();
        let ticket = form.set_input("T2020000PPPP").unwrap();
        // same normalized value, different raw text
        assert!(form.set_input("t2020000pppp!").is_none());
        assert!(form.is_encoding());
        assert_eq!(form.resolve(&ticket, Ok(artifact_for("T2020000PPPP"))), Resolution::Committed);
    }

    #[test]
    fn test_success_commits_artifact() {
        let mut form = CodeForm::new();
        let ticket = form.set_input("T2020000PPPP").unwrap();
        let resolution = form.resolve(&ticket, Ok(artifact_for("T2020000PPPP")));
        assert_eq!(resolution, Resolution::Committed);
        assert_eq!(form.artifact().map(|a| a.code()), Some("T2020000PPPP"));
        assert!(form.error().is_none());
        assert!(!form.is_encoding());
    }

    #[test]
    fn test_failure_sets_encoding_failure() {
        let mut form = CodeForm::new();
        let ticket = form.set_input("T2020000PPPP").unwrap();
        let resolution = form.resolve(&ticket, Err(EncodeError::Task("boom".to_string())));
        assert_eq!(resolution, Resolution::Committed);
        assert!(form.artifact().is_none());
        assert_eq!(form.error(), Some(&FormError::EncodingFailure));
    }

    #[test]
    fn test_editing_away_from_complete_clears_artifact() {
        let mut form = CodeForm::new();
        let ticket = form.set_input("T2020000PPPP").unwrap();
        form.resolve(&ticket, Ok(artifact_for("T2020000PPPP")));

        assert!(form.pop_char().is_none());
        assert_eq!(form.code(), "T2020000PPP");
        assert!(form.artifact().is_none());
        assert!(form.error().is_some());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut form = CodeForm::new();
        let first = form.set_input("AAAAAAAAAAAA").unwrap();
        let second = form.set_input("BBBBBBBBBBBB").unwrap();
        assert_ne!(first.id, second.id);

        assert_eq!(form.resolve(&second, Ok(artifact_for("BBBBBBBBBBBB"))), Resolution::Committed);
        assert_eq!(form.resolve(&first, Ok(artifact_for("AAAAAAAAAAAA"))), Resolution::Stale);
        assert_eq!(form.artifact().map(|a| a.code()), Some("BBBBBBBBBBBB"));
    }

    #[test]
    fn test_stale_failure_does_not_set_error() {
        let mut form = CodeForm::new();
        let ticket = form.set_input("AAAAAAAAAAAA").unwrap();
        form.pop_char();
        form.clear();

        let resolution = form.resolve(&ticket, Err(EncodeError::Task("late".to_string())));
        assert_eq!(resolution, Resolution::Stale);
        assert_eq!(form.phase(), FormPhase::Empty);
        assert!(form.error().is_none());
    }

    #[test]
    fn test_reentering_same_code_issues_fresh_ticket() {
        let mut form = CodeForm::new();
        let first = form.set_input("AAAAAAAAAAAA").unwrap();
        form.pop_char();
        let second = form.push_char('a').unwrap();
        assert_eq!(first.code, second.code);
        assert_ne!(first.id, second.id);
        assert_eq!(form.resolve(&first, Ok(artifact_for("AAAAAAAAAAAA"))), Resolution::Stale);
    }

    #[test]
    fn test_push_char_ignores_invalid_and_overflow() {
        let mut form = CodeForm::new();
        assert!(form.push_char('-').is_none());
        assert_eq!(form.phase(), FormPhase::Empty);

        form.push_str("A1B2C3D4E5F6");
        assert!(form.push_char('Z').is_none());
        assert_eq!(form.code(), "A1B2C3D4E5F6");
    }

    #[test]
    fn test_clear_returns_to_empty_without_error() {
        let mut form = CodeForm::new();
        form.set_input("AB3");
        form.clear();
        assert_eq!(form.phase(), FormPhase::Empty);
        assert!(form.error().is_none());
    }
}
