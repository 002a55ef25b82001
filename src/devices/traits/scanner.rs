//! Credential scanner trait
//!
//! This module defines the contract of the credential reader: the driver is
//! responsible for presence detection and debouncing, the core only consumes
//! a single "new credential" event per physical presentation.

use core::fmt::Write;

use heapless::String;

/// Maximum raw identifier length in bytes
pub const UID_MAX_BYTES: usize = 8;

/// Normalized credential identifier
///
/// Uppercase hex pairs separated by single spaces, e.g. `"A1 B2 C3 D4"`.
/// Capacity covers a [`UID_MAX_BYTES`]-byte identifier.
pub type CredentialId = String<{ UID_MAX_BYTES * 3 - 1 }>;

/// Normalize a raw identifier into its canonical text form
///
/// Formats each byte as an uppercase hex pair, separated by single spaces.
/// Identifiers longer than [`UID_MAX_BYTES`] are truncated.
pub fn format_uid(bytes: &[u8]) -> CredentialId {
    let mut id = CredentialId::new();
    for (i, byte) in bytes.iter().take(UID_MAX_BYTES).enumerate() {
        if i > 0 && id.push(' ').is_err() {
            break;
        }
        if write!(id, "{:02X}", byte).is_err() {
            break;
        }
    }
    id
}

/// Credential scanner interface
///
/// Implemented by the RFID reader driver. The reader latches after a
/// successful read; `acknowledge()` releases it for the next presentation.
pub trait CredentialScanner {
    /// Poll for a newly presented credential
    ///
    /// Returns the normalized identifier of a credential presented since the
    /// last `acknowledge()`, or `None`. At most one credential is reported
    /// per presentation; repeated frames from a tag held in the field are
    /// discarded until acknowledged.
    fn poll_new_credential(&mut self) -> Option<CredentialId>;

    /// Release the reader for the next presentation
    fn acknowledge(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uid_four_bytes() {
        let id = format_uid(&[0xA1, 0xB2, 0xC3, 0xD4]);
        assert_eq!(id.as_str(), "A1 B2 C3 D4");
    }

    #[test]
    fn test_format_uid_single_byte() {
        let id = format_uid(&[0x0F]);
        assert_eq!(id.as_str(), "0F");
    }

    #[test]
    fn test_format_uid_truncates_long_input() {
        let id = format_uid(&[0x11; 12]);
        assert_eq!(id.as_str(), "11 11 11 11 11 11 11 11");
    }

    #[test]
    fn test_format_uid_empty() {
        let id = format_uid(&[]);
        assert!(id.is_empty());
    }
}
