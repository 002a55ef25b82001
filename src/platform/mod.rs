//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the gate controller board.
//! All hardware-specific code must stay behind these traits; the drivers in
//! [`crate::devices`] and the core in [`crate::gate`] only ever see them.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{GpioInterface, I2cInterface, PwmInterface, TimerInterface, UartInterface};
