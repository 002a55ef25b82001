//! Text display trait
//!
//! This module defines the two-line text display contract used by the
//! presentation layer (free-slot count, denial messages).

use crate::platform::Result;

/// Two-line text display interface
pub trait TextDisplay {
    /// Render two lines of text
    ///
    /// Lines longer than the physical width are truncated; shorter lines are
    /// padded so stale characters never remain visible.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the underlying bus write fails.
    fn render(&mut self, line1: &str, line2: &str) -> Result<()>;
}
