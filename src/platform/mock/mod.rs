//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! The mocks use `heapless` buffers only, so the `mock` feature also builds
//! under `no_std` (e.g. for on-target self-test images).
//!
//! # Example
//!
//! ```
//! use parkgate::platform::mock::MockUart;
//! use parkgate::platform::traits::UartInterface;
//!
//! let mut uart = MockUart::new(Default::default());
//! uart.write(b"AT\r").unwrap();
//! assert_eq!(uart.tx_buffer(), b"AT\r");
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod i2c;
mod pwm;
mod timer;
mod uart;

pub use gpio::MockGpio;
pub use i2c::{I2cTransaction, MockI2c};
pub use pwm::MockPwm;
pub use timer::MockTimer;
pub use uart::MockUart;
