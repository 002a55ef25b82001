//! Notification dispatch
//!
//! Composes fixed-template status messages and hands them to the message
//! transport. Dispatch is best-effort at every step: an unresolved
//! credential is a silent no-op, and a transport failure is logged and
//! swallowed — it must never fail a control cycle.

use core::fmt::Write;

use heapless::String;

use super::directory::CredentialDirectory;
use crate::devices::traits::MessageTransport;

/// Maximum SMS body length in text mode
const BODY_LEN: usize = 160;

/// Completed gate traversal kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateEvent {
    /// A vehicle completed an entry
    Entered,
    /// A vehicle completed an exit
    Exited,
}

/// Best-effort status message dispatcher
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationDispatcher;

impl NotificationDispatcher {
    /// Create a dispatcher
    pub const fn new() -> Self {
        Self
    }

    /// Compose and send the status message for a completed traversal
    ///
    /// `entrant` is the authorization index the traversal was correlated to.
    /// `None`, or an index with no directory record, skips dispatch
    /// silently.
    pub fn notify<M: MessageTransport>(
        &self,
        transport: &mut M,
        directory: &CredentialDirectory,
        entrant: Option<usize>,
        event: GateEvent,
        free_slots: u8,
    ) {
        let Some(index) = entrant else {
            return;
        };
        let Some(address) = directory.notify_address(index) else {
            return;
        };

        let mut body: String<BODY_LEN> = String::new();
        let composed = match event {
            GateEvent::Entered => {
                write!(body, "Vehicle entered. Free slots: {}", free_slots)
            }
            GateEvent::Exited => write!(body, "Vehicle exited. Thank you for visiting."),
        };
        if composed.is_err() {
            return;
        }

        if transport.send(address, &body).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("notification send failed, credential {}", index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::directory::CredentialRecord;
    use crate::platform::mock::{MockTimer, MockUart};
    use crate::devices::modem::Sim800;

    const RECORDS: &[CredentialRecord] = &[CredentialRecord {
        uid: "A1 B2 C3 D4",
        notify_address: "+15550100",
    }];

    fn transport() -> Sim800<MockUart, MockTimer> {
        Sim800::new(MockUart::new(Default::default()), MockTimer::new())
    }

    fn tx_string(transport: &mut Sim800<MockUart, MockTimer>) -> String<512> {
        let mut out = String::new();
        for &byte in transport.uart_mut().tx_buffer() {
            let _ = out.push(byte as char);
        }
        out
    }

    #[test]
    fn test_entered_message_contains_free_count() {
        let directory = CredentialDirectory::new(RECORDS);
        let mut modem = transport();

        NotificationDispatcher::new().notify(
            &mut modem,
            &directory,
            Some(0),
            GateEvent::Entered,
            3,
        );

        let tx = tx_string(&mut modem);
        assert!(tx.contains("+15550100"));
        assert!(tx.contains("Free slots: 3"));
    }

    #[test]
    fn test_exited_message_fixed_template() {
        let directory = CredentialDirectory::new(RECORDS);
        let mut modem = transport();

        NotificationDispatcher::new().notify(
            &mut modem,
            &directory,
            Some(0),
            GateEvent::Exited,
            4,
        );

        assert!(tx_string(&mut modem).contains("Vehicle exited"));
    }

    #[test]
    fn test_unresolved_entrant_is_noop() {
        let directory = CredentialDirectory::new(RECORDS);
        let mut modem = transport();

        NotificationDispatcher::new().notify(&mut modem, &directory, None, GateEvent::Exited, 4);
        assert!(modem.uart_mut().tx_buffer().is_empty());
    }

    #[test]
    fn test_unknown_index_is_noop() {
        let directory = CredentialDirectory::new(RECORDS);
        let mut modem = transport();

        NotificationDispatcher::new().notify(
            &mut modem,
            &directory,
            Some(7),
            GateEvent::Entered,
            2,
        );
        assert!(modem.uart_mut().tx_buffer().is_empty());
    }
}
