//! Message transport trait
//!
//! This module defines the outbound text-message contract used by the
//! notification dispatcher. Delivery is best-effort: no confirmation is
//! awaited beyond the transport's own fixed command pacing.

use crate::platform::Result;

/// Outbound text-message transport interface
pub trait MessageTransport {
    /// Send a message body to a destination address
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the command channel write fails. Delivery
    /// itself is not confirmed.
    fn send(&mut self, destination: &str, body: &str) -> Result<()>;
}
