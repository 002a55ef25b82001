//! Device interface traits
//!
//! This module defines the device-level contracts the gate core consumes.
//! Each driver in [`crate::devices`] implements one of these traits; the
//! core never names a concrete driver type.

pub mod barrier;
pub mod display;
pub mod presence;
pub mod scanner;
pub mod transport;

// Re-export trait interfaces
pub use barrier::{BarrierActuator, BarrierPosition};
pub use display::TextDisplay;
pub use presence::{PointState, PresencePoint};
pub use scanner::{format_uid, CredentialId, CredentialScanner, UID_MAX_BYTES};
pub use transport::MessageTransport;
