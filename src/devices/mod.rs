//! Peripheral drivers using platform abstraction
//!
//! Thin wrappers over the platform traits for the gate hardware: the RFID
//! credential reader, the IR presence sensors, the servo barrier arm, the
//! 16x2 LCD, and the GSM modem. The core in [`crate::gate`] consumes these
//! drivers only through the traits in [`traits`].

pub mod traits;

pub mod barrier;
pub mod display;
pub mod modem;
pub mod presence;
pub mod rfid;

pub use barrier::{BarrierConfig, ServoBarrier};
pub use display::Lcd1602;
pub use modem::Sim800;
pub use presence::IrPresenceSensor;
pub use rfid::Rdm6300;
