//! TUI wrapper that manages the ratatui terminal with crossterm backend.
//!
//! This module handles terminal lifecycle (entering/exiting raw mode,
//! alternate screen, bracketed paste) while delegating drawing to the
//! `rendering` module.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::Ordering;

use super::raw_mode::{install_panic_hook, RAW_MODE_ACTIVE};
use super::rendering;
use super::StatusBar;
use crate::view::FormView;

/// TUI wrapper that manages the ratatui terminal with crossterm backend.
///
/// This struct handles:
/// - Entering raw mode and alternate screen on creation
/// - Restoring terminal state on drop (or explicit restore)
/// - Panic recovery (terminal is restored even if the app panics)
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Whether this TUI is responsible for cleanup
    active: bool,
}

impl Tui {
    /// Create a new TUI, entering raw mode and alternate screen.
    ///
    /// # Errors
    /// Returns an error if raw mode, the alternate screen or the terminal
    /// backend cannot be set up.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        crossterm::execute!(
            stdout,
            crossterm::terminal::EnterAlternateScreen,
            crossterm::event::EnableBracketedPaste,
        )?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Get a mutable reference to the underlying ratatui terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal to its original state.
    ///
    /// After calling this, the Tui's drop will be a no-op.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);

            crossterm::execute!(
                self.terminal.backend_mut(),
                crossterm::event::DisableBracketedPaste,
                crossterm::terminal::LeaveAlternateScreen,
            )?;
            disable_raw_mode()?;
            self.terminal.show_cursor()?;
        }
        Ok(())
    }

    /// Check if the TUI is still active (not yet restored).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Draw the form screen with an optional status bar.
    pub fn draw_form(&mut self, view: &FormView, status_bar: Option<&StatusBar>) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();
            rendering::render_screen(frame, view, status_bar, area);
        })?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);

            // Best-effort cleanup - ignore errors during drop
            let _ = crossterm::execute!(
                self.terminal.backend_mut(),
                crossterm::event::DisableBracketedPaste,
                crossterm::terminal::LeaveAlternateScreen,
            );
            let _ = disable_raw_mode();
            let _ = self.terminal.show_cursor();
        }
    }
}
