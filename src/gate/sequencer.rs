//! Gate sequencer
//!
//! State machine coordinating barrier position with vehicle presence at the
//! threshold sensors, for both entry and exit flows. Platform-agnostic: all
//! physical effects go through the device traits, all waits through the
//! timer trait.
//!
//! Entry is two-phase: `begin_entry` opens the barrier when a credential is
//! granted, and `service_entry` completes the traversal on a later cycle
//! when the entry threshold reports the vehicle. Exit is single-shot:
//! `service_exit` runs the whole open-pass-close sequence within one cycle.
//! The two flows are independent; there is no interlock between them beyond
//! what the blocking settle delays incidentally provide, and an entry
//! session never times out — both deliberate carry-overs of the source
//! behavior.

use super::notify::{GateEvent, NotificationDispatcher};
use super::occupancy::Occupancy;
use crate::devices::traits::{
    BarrierActuator, BarrierPosition, MessageTransport, PointState, PresencePoint,
};
use crate::gate::directory::CredentialDirectory;
use crate::parameters::GateTiming;
use crate::platform::traits::TimerInterface;
use crate::platform::Result;

/// In-flight authorized entry awaiting its threshold crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrySession {
    /// Authorization index the entry was granted to
    pub credential_index: usize,
}

/// Barrier/session state machine
#[derive(Debug)]
pub struct GateSequencer {
    gate: BarrierPosition,
    session: Option<EntrySession>,
    /// Best-effort exit correlation: the last credential recorded as having
    /// entered. There is no per-slot vehicle identity tracking.
    last_entrant: Option<usize>,
}

impl GateSequencer {
    /// Create a sequencer with the gate closed and no session
    pub const fn new() -> Self {
        Self {
            gate: BarrierPosition::Closed,
            session: None,
            last_entrant: None,
        }
    }

    /// Current commanded gate position
    pub fn gate(&self) -> BarrierPosition {
        self.gate
    }

    /// The in-flight entry session, if any
    pub fn session(&self) -> Option<&EntrySession> {
        self.session.as_ref()
    }

    /// The last credential recorded as having entered
    pub fn last_entrant(&self) -> Option<usize> {
        self.last_entrant
    }

    /// Open the gate for an authorized entry
    ///
    /// Commands the barrier open, waits for the arm to settle, and starts
    /// the entry session. A re-presentation while a session is already
    /// pending replaces the session's credential.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the actuator or timer fails.
    pub fn begin_entry<B, T>(
        &mut self,
        credential_index: usize,
        barrier: &mut B,
        timer: &mut T,
        timing: &GateTiming,
    ) -> Result<()>
    where
        B: BarrierActuator,
        T: TimerInterface,
    {
        barrier.set_position(BarrierPosition::Open)?;
        timer.delay_ms(timing.gate_settle_ms)?;
        self.gate = BarrierPosition::Open;
        self.session = Some(EntrySession { credential_index });
        #[cfg(feature = "defmt")]
        defmt::info!("gate open for entry, credential {}", credential_index);
        Ok(())
    }

    /// Complete a pending entry once the threshold reports the vehicle
    ///
    /// No-op unless the gate is open, a session is active, and the entry
    /// threshold reads occupied. The free count is adjusted (floored at
    /// zero), the "entered" notification fires whenever a session is active
    /// — even at capacity — and the gate closes regardless.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the actuator or timer fails. Notification
    /// transport failures are swallowed by the dispatcher.
    pub fn service_entry<P, B, M, T>(
        &mut self,
        entry_threshold: &P,
        barrier: &mut B,
        timer: &mut T,
        occupancy: &mut Occupancy,
        dispatcher: &NotificationDispatcher,
        directory: &CredentialDirectory,
        transport: &mut M,
        timing: &GateTiming,
    ) -> Result<()>
    where
        P: PresencePoint,
        B: BarrierActuator,
        M: MessageTransport,
        T: TimerInterface,
    {
        if self.gate != BarrierPosition::Open {
            return Ok(());
        }
        let Some(session) = self.session else {
            return Ok(());
        };
        if entry_threshold.read() != PointState::Occupied {
            return Ok(());
        }

        // Allow the vehicle to clear the threshold completely
        timer.delay_ms(timing.passage_settle_ms)?;

        let _moved = occupancy.record_entry();
        dispatcher.notify(
            transport,
            directory,
            Some(session.credential_index),
            GateEvent::Entered,
            occupancy.free_slots(),
        );

        barrier.set_position(BarrierPosition::Closed)?;
        timer.delay_ms(timing.gate_settle_ms)?;
        self.gate = BarrierPosition::Closed;
        self.last_entrant = Some(session.credential_index);
        self.session = None;
        #[cfg(feature = "defmt")]
        defmt::info!(
            "entry complete, credential {}, {} slots free",
            session.credential_index,
            occupancy.free_slots()
        );
        Ok(())
    }

    /// Run a complete exit sequence if a vehicle waits at the exit threshold
    ///
    /// Opens the barrier, waits for arm settle and vehicle passage, adjusts
    /// the free count (capped at total), and closes again. The "exited"
    /// notification fires only when the count actually moved, correlated to
    /// the last recorded entrant; with no recorded entrant it is skipped.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the actuator or timer fails.
    pub fn service_exit<P, B, M, T>(
        &mut self,
        exit_threshold: &P,
        barrier: &mut B,
        timer: &mut T,
        occupancy: &mut Occupancy,
        dispatcher: &NotificationDispatcher,
        directory: &CredentialDirectory,
        transport: &mut M,
        timing: &GateTiming,
    ) -> Result<()>
    where
        P: PresencePoint,
        B: BarrierActuator,
        M: MessageTransport,
        T: TimerInterface,
    {
        if exit_threshold.read() != PointState::Occupied {
            return Ok(());
        }

        barrier.set_position(BarrierPosition::Open)?;
        timer.delay_ms(timing.gate_settle_ms)?;
        self.gate = BarrierPosition::Open;
        timer.delay_ms(timing.passage_settle_ms)?;

        if occupancy.record_exit() {
            dispatcher.notify(
                transport,
                directory,
                self.last_entrant,
                GateEvent::Exited,
                occupancy.free_slots(),
            );
        }

        barrier.set_position(BarrierPosition::Closed)?;
        timer.delay_ms(timing.gate_settle_ms)?;
        self.gate = BarrierPosition::Closed;
        #[cfg(feature = "defmt")]
        defmt::info!("exit complete, {} slots free", occupancy.free_slots());
        Ok(())
    }
}

impl Default for GateSequencer {
    fn default() -> Self {
        Self::new()
    }
}
