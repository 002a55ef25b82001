//! Barrier actuator trait
//!
//! This module defines the gate barrier contract. Actuation is
//! fire-and-forget: the write is assumed to succeed and no intermediate
//! position is tracked; callers bound the physical motion with a fixed
//! settle delay.

use crate::platform::Result;

/// Commanded barrier position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BarrierPosition {
    /// Barrier arm raised, lane open
    Open,
    /// Barrier arm lowered, lane blocked
    Closed,
}

/// Barrier actuator interface
pub trait BarrierActuator {
    /// Command the barrier to a position
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the underlying output cannot be driven.
    fn set_position(&mut self, position: BarrierPosition) -> Result<()>;
}
