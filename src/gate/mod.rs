//! Access-control and occupancy core
//!
//! Platform-agnostic decision logic for the gate lane: who gets in, how the
//! free-slot count is derived, how barrier motion is sequenced against the
//! threshold sensors, and how completed traversals are reported to the
//! credential holder.
//!
//! The firmware entry point assembles a [`GateIo`] from initialized drivers
//! and calls [`GateController::run_cycle`] forever. One cycle runs to
//! completion before the next begins; there is no preemption, and every
//! wait is a blocking settle delay.

pub mod access;
pub mod directory;
pub mod notify;
pub mod occupancy;
pub mod sequencer;

pub use access::{AccessController, AccessDecision};
pub use directory::{CredentialDirectory, CredentialRecord};
pub use notify::{GateEvent, NotificationDispatcher};
pub use occupancy::Occupancy;
pub use sequencer::{EntrySession, GateSequencer};

use core::fmt::Write;

use crate::devices::traits::{
    BarrierActuator, BarrierPosition, CredentialScanner, MessageTransport, PresencePoint,
    TextDisplay,
};
use crate::parameters::GateTiming;
use crate::platform::traits::TimerInterface;
use crate::platform::Result;

/// The lane's peripherals, bundled
///
/// Drivers must already be initialized (display wake-up sequence, modem
/// handshake) before they are assembled into the bundle. Owned separately
/// from [`GateController`] so the control state and the hardware handles
/// borrow independently.
pub struct GateIo<S, P, B, D, M, T, const N: usize>
where
    S: CredentialScanner,
    P: PresencePoint,
    B: BarrierActuator,
    D: TextDisplay,
    M: MessageTransport,
    T: TimerInterface,
{
    /// Credential reader at the entry lane
    pub scanner: S,
    /// Presence sensor at the entry threshold
    pub entry_threshold: P,
    /// Presence sensor at the exit threshold
    pub exit_threshold: P,
    /// Per-slot presence sensors
    pub slots: [P; N],
    /// Gate barrier arm
    pub barrier: B,
    /// Two-line status display
    pub display: D,
    /// Notification transport
    pub transport: M,
    /// Timer for the blocking settle delays
    pub timer: T,
}

/// Single-owner control state for the gate lane
///
/// Owns every piece of mutable core state (occupancy, access decisions,
/// sequencer, dispatcher, timing) and mutates it exclusively from the
/// control cycle; no locking exists because no other mutator exists.
pub struct GateController {
    occupancy: Occupancy,
    access: AccessController,
    sequencer: GateSequencer,
    dispatcher: NotificationDispatcher,
    timing: GateTiming,
}

impl GateController {
    /// Create a controller over a credential directory
    pub const fn new(directory: CredentialDirectory, timing: GateTiming, total_slots: u8) -> Self {
        Self {
            occupancy: Occupancy::new(total_slots),
            access: AccessController::new(directory),
            sequencer: GateSequencer::new(),
            dispatcher: NotificationDispatcher::new(),
            timing,
        }
    }

    /// Current occupancy state
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Current sequencer state
    pub fn sequencer(&self) -> &GateSequencer {
        &self.sequencer
    }

    /// Drive the lane to its idle posture: barrier closed, count rendered
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if a peripheral fails.
    pub fn init<S, P, B, D, M, T, const N: usize>(
        &mut self,
        io: &mut GateIo<S, P, B, D, M, T, N>,
    ) -> Result<()>
    where
        S: CredentialScanner,
        P: PresencePoint,
        B: BarrierActuator,
        D: TextDisplay,
        M: MessageTransport,
        T: TimerInterface,
    {
        io.barrier.set_position(BarrierPosition::Closed)?;
        io.timer.delay_ms(self.timing.gate_settle_ms)?;
        let free = self.occupancy.refresh(&io.slots);
        render_status(&mut io.display, free)
    }

    /// Run one control cycle
    ///
    /// Order is fixed: refresh occupancy from the slot sensors, render the
    /// count, handle at most one presented credential, then service the
    /// entry and exit flows. Entry and exit are independent and may
    /// interleave across cycles.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if a peripheral fails mid-cycle.
    pub fn run_cycle<S, P, B, D, M, T, const N: usize>(
        &mut self,
        io: &mut GateIo<S, P, B, D, M, T, N>,
    ) -> Result<()>
    where
        S: CredentialScanner,
        P: PresencePoint,
        B: BarrierActuator,
        D: TextDisplay,
        M: MessageTransport,
        T: TimerInterface,
    {
        let free = self.occupancy.refresh(&io.slots);
        render_status(&mut io.display, free)?;

        if let Some(id) = io.scanner.poll_new_credential() {
            match self.access.on_credential_presented(id.as_str()) {
                AccessDecision::Granted(index) => {
                    self.sequencer
                        .begin_entry(index, &mut io.barrier, &mut io.timer, &self.timing)?;
                }
                AccessDecision::Denied => {
                    io.display.render("Access denied", "")?;
                    io.timer.delay_ms(self.timing.denied_display_ms)?;
                }
            }
            io.scanner.acknowledge();
        }

        self.sequencer.service_entry(
            &io.entry_threshold,
            &mut io.barrier,
            &mut io.timer,
            &mut self.occupancy,
            &self.dispatcher,
            self.access.directory(),
            &mut io.transport,
            &self.timing,
        )?;
        self.sequencer.service_exit(
            &io.exit_threshold,
            &mut io.barrier,
            &mut io.timer,
            &mut self.occupancy,
            &self.dispatcher,
            self.access.directory(),
            &mut io.transport,
            &self.timing,
        )?;
        Ok(())
    }
}

/// Render the idle status: lane banner plus free-slot count
fn render_status<D: TextDisplay>(display: &mut D, free: u8) -> Result<()> {
    let mut line2: heapless::String<16> = heapless::String::new();
    let _ = write!(line2, "Free slots: {}", free);
    display.render("Parking gate", &line2)
}
