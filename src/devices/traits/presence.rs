//! Presence sensor trait
//!
//! This module defines the binary presence contract used for the parking
//! slots and the entry/exit thresholds.

/// Instantaneous state of a monitored point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointState {
    /// A vehicle is present at the point
    Occupied,
    /// The point is vacant
    Free,
}

/// Presence sensor interface
///
/// An idempotent boolean probe: reading twice without a physical change
/// yields the same state. No debouncing or fault detection is performed at
/// this level; the raw reading is trusted.
pub trait PresencePoint {
    /// Read the instantaneous state of the point
    fn read(&self) -> PointState;
}
