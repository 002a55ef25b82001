//! Compiled-in configuration
//!
//! Timing constants and the credential table. Everything here is constant
//! data baked into the image at build time; there is no runtime loading and
//! no persistence across power loss.

use crate::gate::directory::{CredentialDirectory, CredentialRecord};

/// Number of monitored parking slots
pub const TOTAL_SLOTS: usize = 4;

/// Fixed settle and display durations, in milliseconds
///
/// All waits in the control loop are blocking and named here; once a wait
/// begins it always runs to completion.
#[derive(Debug, Clone, Copy)]
pub struct GateTiming {
    /// Wait after commanding the barrier, for the arm to finish moving
    pub gate_settle_ms: u32,
    /// Wait after a threshold detection, for the vehicle to pass completely
    pub passage_settle_ms: u32,
    /// How long a denial message stays on the display
    pub denied_display_ms: u32,
}

impl Default for GateTiming {
    fn default() -> Self {
        Self {
            gate_settle_ms: 800,
            passage_settle_ms: 1500,
            denied_display_ms: 1200,
        }
    }
}

/// The authorized credential holders
///
/// Authorization index is the position in this table.
pub const CREDENTIALS: &[CredentialRecord] = &[
    CredentialRecord {
        uid: "A1 B2 C3 D4",
        notify_address: "+15550100",
    },
    CredentialRecord {
        uid: "5F 00 1C 2A",
        notify_address: "+15550101",
    },
    CredentialRecord {
        uid: "3D 7E 99 40",
        notify_address: "+15550102",
    },
];

/// Directory over the compiled-in credential table
pub const fn credential_directory() -> CredentialDirectory {
    CredentialDirectory::new(CREDENTIALS)
}
