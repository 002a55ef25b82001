//! Timer interface trait
//!
//! This module defines the timing interface that platform implementations must
//! provide. The gate controller uses blocking delays for all settle waits
//! (barrier motion, vehicle passage, modem command pacing); once a delay
//! begins it always runs to completion.

use crate::platform::Result;

/// Timer interface trait
///
/// Platform implementations must provide this interface for blocking delays
/// and timestamp access.
pub trait TimerInterface {
    /// Block for the given number of microseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer(TimerError::InvalidDuration)` if the
    /// duration cannot be represented by the platform timer.
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for the given number of milliseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay fails.
    fn delay_ms(&mut self, ms: u32) -> Result<()>;

    /// Get current timestamp in microseconds since boot
    fn now_us(&self) -> u64;
}
