//! Occupancy tracking
//!
//! Free-slot count derived from the slot presence sensors. The count is
//! recomputed from the raw readings every control cycle; it is never trusted
//! across cycles, except for the in-cycle adjustments the gate sequencer
//! applies while a vehicle is between the threshold and its destination
//! slot.

use crate::devices::traits::{PointState, PresencePoint};

/// Free/occupied slot state
///
/// Invariant: `0 <= free_slots <= total_slots`, maintained by clamping in
/// every mutation.
#[derive(Debug, Clone, Copy)]
pub struct Occupancy {
    total_slots: u8,
    free_slots: u8,
}

impl Occupancy {
    /// Create with all slots free
    pub const fn new(total_slots: u8) -> Self {
        Self {
            total_slots,
            free_slots: total_slots,
        }
    }

    /// Recompute the free count from the instantaneous sensor readings
    ///
    /// `free = total - occupied`. Pure in the readings: unchanged sensors
    /// yield the same result on every call. No debouncing or fault
    /// detection; the raw readings are trusted.
    pub fn refresh<P: PresencePoint>(&mut self, slots: &[P]) -> u8 {
        let occupied = slots
            .iter()
            .filter(|slot| slot.read() == PointState::Occupied)
            .count() as u8;
        self.free_slots = self.total_slots.saturating_sub(occupied);
        self.free_slots
    }

    /// Account for a vehicle that just cleared the entry threshold
    ///
    /// The vehicle has vacated the threshold but not yet reached its slot
    /// sensor, so the freshly refreshed count is adjusted down by one.
    /// Returns whether the count moved; at zero it stays at zero.
    pub fn record_entry(&mut self) -> bool {
        if self.free_slots > 0 {
            self.free_slots -= 1;
            true
        } else {
            false
        }
    }

    /// Account for a vehicle that just left through the exit threshold
    ///
    /// Returns whether the count moved; at `total_slots` it stays there.
    pub fn record_exit(&mut self) -> bool {
        if self.free_slots < self.total_slots {
            self.free_slots += 1;
            true
        } else {
            false
        }
    }

    /// Current free-slot count
    pub fn free_slots(&self) -> u8 {
        self.free_slots
    }

    /// Configured slot count
    pub fn total_slots(&self) -> u8 {
        self.total_slots
    }
}
