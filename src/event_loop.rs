//! Async event loop for the form screen.
//!
//! Terminal events and encode outcomes are handled concurrently with
//! `tokio::select!`; the screen is redrawn after each one.

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use std::path::Path;
use tokio::sync::mpsc;

use crate::export::{self, ExportError};
use crate::form::Resolution;
use crate::input::{handle_key_event, FormAction};
use crate::session::{EncodeOutcome, FormSession};
use crate::terminal::{StatusBar, Tui};
use crate::view::FormView;

/// Whether the loop should keep running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Apply a form action to the session.
///
/// Edits clear any status notice; exports replace it with the written path
/// or the export error.
pub fn handle_action(
    session: &mut FormSession,
    status_bar: &mut StatusBar,
    action: FormAction,
    export_dir: &Path,
) -> LoopControl {
    match action {
        FormAction::Quit => return LoopControl::Quit,
        FormAction::Insert(c) => {
            session.push_char(c);
            status_bar.clear_notice();
        }
        FormAction::Backspace => {
            session.pop_char();
            status_bar.clear_notice();
        }
        FormAction::Clear => {
            session.clear();
            status_bar.clear_notice();
        }
        FormAction::Export => {
            let result = session
                .form()
                .artifact()
                .ok_or(ExportError::NothingToExport)
                .and_then(|artifact| export::write_png(artifact, export_dir));
            match result {
                Ok(path) => status_bar.set_notice(format!("Saved {}", path.display())),
                Err(e) => {
                    log::warn!("Export failed: {}", e);
                    status_bar.set_notice(e.to_string());
                }
            }
        }
        FormAction::None => {}
    }
    LoopControl::Continue
}

/// Main event loop.
///
/// Handles two concurrent concerns:
/// 1. Terminal events (keys, paste, resize) via crossterm EventStream
/// 2. Encode outcomes from the session's tasks
///
/// Exits on a quit action, when the event stream ends, or on terminal error.
pub async fn run(
    tui: &mut Tui,
    session: &mut FormSession,
    outcomes: &mut mpsc::UnboundedReceiver<EncodeOutcome>,
    status_bar: &mut StatusBar,
    export_dir: &Path,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut event_stream = EventStream::new();

    loop {
        let view = FormView::from_form(session.form());
        tui.draw_form(&view, Some(status_bar))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        let action = handle_key_event(key_event);
                        if handle_action(session, status_bar, action, export_dir) == LoopControl::Quit {
                            break;
                        }
                    }
                    Some(Ok(Event::Paste(text))) => {
                        session.push_str(&text);
                        status_bar.clear_notice();
                    }
                    Some(Ok(_)) => {
                        // Resize and other events just trigger a redraw
                    }
                    Some(Err(e)) => {
                        return Err(Box::new(e));
                    }
                    None => {
                        break;
                    }
                }
            }

            Some(outcome) = outcomes.recv() => {
                if session.apply(outcome) == Resolution::Stale {
                    log::debug!("Ignored stale encode outcome");
                }
            }
        }
    }

    Ok(())
}
