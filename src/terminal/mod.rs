//! Terminal management module - raw mode, TUI wrapper, rendering, and cleanup.

mod raw_mode;
pub mod rendering;
mod status_bar;
mod tui;

pub use status_bar::{StatusBar, KEY_HINTS};
pub use tui::Tui;
