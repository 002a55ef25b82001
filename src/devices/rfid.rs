//! RDM6300 125 kHz RFID reader driver
//!
//! The RDM6300 streams one frame per tag read over UART at 9600 baud:
//!
//! - STX `0x02`
//! - 10 ASCII-hex data characters (1 version byte + 4 tag-id bytes)
//! - 2 ASCII-hex checksum characters (XOR of the 5 data bytes)
//! - ETX `0x03`
//!
//! The driver accumulates bytes across polls, validates the checksum, and
//! reports the normalized 4-byte tag identifier. After a successful read it
//! latches: a tag held in the field keeps re-emitting frames, and those are
//! discarded until the consumer calls `acknowledge()`.

use crate::devices::traits::{format_uid, CredentialId, CredentialScanner};
use crate::platform::traits::UartInterface;

/// Data characters per frame (5 bytes as ASCII hex)
const DATA_CHARS: usize = 10;

/// Frame payload length: data plus two checksum characters
const PAYLOAD_CHARS: usize = DATA_CHARS + 2;

const STX: u8 = 0x02;
const ETX: u8 = 0x03;

/// RDM6300 RFID reader over UART
pub struct Rdm6300<U: UartInterface> {
    uart: U,
    payload: heapless::Vec<u8, PAYLOAD_CHARS>,
    in_frame: bool,
    latched: bool,
}

impl<U: UartInterface> Rdm6300<U> {
    /// Create a new reader driver
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            payload: heapless::Vec::new(),
            in_frame: false,
            latched: false,
        }
    }

    /// Access the underlying UART (e.g. for reconfiguration)
    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }

    fn parse_payload(&self) -> Option<CredentialId> {
        if self.payload.len() != PAYLOAD_CHARS {
            return None;
        }

        let mut bytes = [0u8; PAYLOAD_CHARS / 2];
        for (i, chunk) in self.payload.chunks_exact(2).enumerate() {
            bytes[i] = (hex_val(chunk[0])? << 4) | hex_val(chunk[1])?;
        }

        let checksum = bytes[..5].iter().fold(0u8, |acc, b| acc ^ b);
        if checksum != bytes[5] {
            return None;
        }

        // bytes[0] is the tag version/customer byte; the identifier proper
        // is the last four data bytes.
        Some(format_uid(&bytes[1..5]))
    }
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

impl<U: UartInterface> CredentialScanner for Rdm6300<U> {
    fn poll_new_credential(&mut self) -> Option<CredentialId> {
        let mut byte = [0u8; 1];
        while self.uart.available() {
            let count = self.uart.read(&mut byte).unwrap_or(0);
            if count == 0 {
                break;
            }
            if self.latched {
                // Tag still in the field, discard repeated frames
                continue;
            }
            match byte[0] {
                STX => {
                    self.payload.clear();
                    self.in_frame = true;
                }
                ETX if self.in_frame => {
                    self.in_frame = false;
                    if let Some(id) = self.parse_payload() {
                        self.latched = true;
                        return Some(id);
                    }
                }
                b if self.in_frame => {
                    if self.payload.push(b).is_err() {
                        // Oversized frame, resynchronize on the next STX
                        self.in_frame = false;
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn acknowledge(&mut self) {
        self.latched = false;
        self.in_frame = false;
        self.payload.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockUart;

    /// Build a wire frame for the given 5 data bytes (version + 4-byte id)
    fn frame(data: [u8; 5]) -> std::vec::Vec<u8> {
        let checksum = data.iter().fold(0u8, |acc, b| acc ^ b);
        let mut out = vec![STX];
        for byte in data.iter().chain(core::iter::once(&checksum)) {
            out.extend_from_slice(format!("{:02X}", byte).as_bytes());
        }
        out.push(ETX);
        out
    }

    fn reader() -> Rdm6300<MockUart> {
        Rdm6300::new(MockUart::new(Default::default()))
    }

    #[test]
    fn test_valid_frame_yields_normalized_id() {
        let mut rfid = reader();
        rfid.uart_mut()
            .inject_rx_data(&frame([0x01, 0xA1, 0xB2, 0xC3, 0xD4]));

        let id = rfid.poll_new_credential().unwrap();
        assert_eq!(id.as_str(), "A1 B2 C3 D4");
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let mut rfid = reader();
        let mut bad = frame([0x01, 0xA1, 0xB2, 0xC3, 0xD4]);
        // Corrupt one checksum character
        let len = bad.len();
        bad[len - 2] = b'0';
        rfid.uart_mut().inject_rx_data(&bad);

        assert!(rfid.poll_new_credential().is_none());
    }

    #[test]
    fn test_partial_frame_across_polls() {
        let mut rfid = reader();
        let wire = frame([0x01, 0x5F, 0x00, 0x1C, 0x2A]);

        rfid.uart_mut().inject_rx_data(&wire[..6]);
        assert!(rfid.poll_new_credential().is_none());

        rfid.uart_mut().inject_rx_data(&wire[6..]);
        let id = rfid.poll_new_credential().unwrap();
        assert_eq!(id.as_str(), "5F 00 1C 2A");
    }

    #[test]
    fn test_latches_until_acknowledge() {
        let mut rfid = reader();
        let wire = frame([0x01, 0xA1, 0xB2, 0xC3, 0xD4]);

        rfid.uart_mut().inject_rx_data(&wire);
        assert!(rfid.poll_new_credential().is_some());

        // Repeated frame from a tag held in the field is discarded
        rfid.uart_mut().inject_rx_data(&wire);
        assert!(rfid.poll_new_credential().is_none());

        rfid.acknowledge();
        rfid.uart_mut().inject_rx_data(&wire);
        assert!(rfid.poll_new_credential().is_some());
    }

    #[test]
    fn test_noise_before_frame_ignored() {
        let mut rfid = reader();
        let mut wire = vec![0xFF, 0x00, b'Z'];
        wire.extend_from_slice(&frame([0x01, 0x3D, 0x7E, 0x99, 0x40]));
        rfid.uart_mut().inject_rx_data(&wire);

        let id = rfid.poll_new_credential().unwrap();
        assert_eq!(id.as_str(), "3D 7E 99 40");
    }
}
