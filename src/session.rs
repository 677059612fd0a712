//! FormSession - drives a [`CodeForm`] against an asynchronous encoder.
//!
//! Edits go through the session, which spawns a tokio task for every issued
//! ticket. Finished encodes arrive on the outcome channel returned by
//! [`FormSession::new`] and are handed back through [`FormSession::apply`],
//! where stale ones are dropped.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::encoder::{Artifact, CodeEncoder, EncodeError, RenderOptions};
use crate::form::{CodeForm, EncodeTicket, Resolution};

/// A finished encode, tagged with the ticket that started it.
#[derive(Debug)]
pub struct EncodeOutcome {
    pub ticket: EncodeTicket,
    pub result: Result<Artifact, EncodeError>,
}

/// Form state plus the encoder that serves it.
pub struct FormSession {
    form: CodeForm,
    encoder: Arc<dyn CodeEncoder>,
    options: RenderOptions,
    tx: mpsc::UnboundedSender<EncodeOutcome>,
}

impl FormSession {
    /// Create a session and the receiver its encode outcomes are delivered on.
    pub fn new(encoder: Arc<dyn CodeEncoder>) -> (Self, mpsc::UnboundedReceiver<EncodeOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self {
            form: CodeForm::new(),
            encoder,
            options: RenderOptions::STANDARD,
            tx,
        };
        (session, rx)
    }

    pub fn form(&self) -> &CodeForm {
        &self.form
    }

    /// Replace the field contents with `raw`.
    pub fn input(&mut self, raw: &str) {
        let ticket = self.form.set_input(raw);
        self.dispatch(ticket);
    }

    pub fn push_char(&mut self, c: char) {
        let ticket = self.form.push_char(c);
        self.dispatch(ticket);
    }

    pub fn push_str(&mut self, text: &str) {
        let ticket = self.form.push_str(text);
        self.dispatch(ticket);
    }

    pub fn pop_char(&mut self) {
        let ticket = self.form.pop_char();
        self.dispatch(ticket);
    }

    pub fn clear(&mut self) {
        let ticket = self.form.clear();
        self.dispatch(ticket);
    }

    /// Commit an outcome received from the outcome channel, unless it is stale.
    pub fn apply(&mut self, outcome: EncodeOutcome) -> Resolution {
        self.form.resolve(&outcome.ticket, outcome.result)
    }

    /// Start the encoder for `ticket` on a tokio task.
    ///
    /// Must be called from within a tokio runtime.
    fn dispatch(&self, ticket: Option<EncodeTicket>) {
        let Some(ticket) = ticket else {
            return;
        };

        let encode = self.encoder.encode(ticket.code.clone(), self.options);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = encode.await;
            // Receiver gone means the view has shut down
            let _ = tx.send(EncodeOutcome { ticket, result });
        });
    }
}
