//! Status bar with key hints and the latest notice, at the bottom of the screen.

/// Key hints shown when there is no notice.
pub const KEY_HINTS: &str = "Esc quit | Ctrl+U clear | Ctrl+S save PNG";

#[derive(Debug, Clone)]
pub struct StatusBar {
    /// Whether the status bar is visible
    pub visible: bool,
    notice: Option<String>,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    /// Create a new status bar with default settings (visible).
    pub fn new() -> Self {
        Self::with_visibility(true)
    }

    /// Create a status bar with the specified visibility.
    pub fn with_visibility(visible: bool) -> Self {
        Self {
            visible,
            notice: None,
        }
    }

    /// Show `message` next to the key hints until replaced or cleared.
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Format the status bar text.
    ///
    /// Format: " hints " or " hints | notice "
    pub fn format(&self) -> String {
        match &self.notice {
            Some(notice) => format!(" {} | {} ", KEY_HINTS, notice),
            None => format!(" {} ", KEY_HINTS),
        }
    }
}
