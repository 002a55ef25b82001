//! Access control
//!
//! Decides whether a presented credential may enter. Denial is a normal
//! outcome surfaced on the display by the control loop, never an error; no
//! lockout, rate limiting, or retry exists at this level — a denied
//! credential can simply be presented again.

use super::directory::CredentialDirectory;

/// Outcome of a credential presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccessDecision {
    /// Credential found; carries the authorization index
    Granted(usize),
    /// Credential not in the directory
    Denied,
}

/// Access controller over the credential directory
#[derive(Debug, Clone, Copy)]
pub struct AccessController {
    directory: CredentialDirectory,
}

impl AccessController {
    /// Create a controller over a credential directory
    pub const fn new(directory: CredentialDirectory) -> Self {
        Self { directory }
    }

    /// Decide on a newly presented credential
    ///
    /// The reader driver has already debounced the presentation; this
    /// consumes exactly one event per physical presentation.
    pub fn on_credential_presented(&self, identifier: &str) -> AccessDecision {
        match self.directory.authorize(identifier) {
            Some(index) => {
                #[cfg(feature = "defmt")]
                defmt::info!("access granted, credential {}", index);
                AccessDecision::Granted(index)
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("access denied: {=str}", identifier);
                AccessDecision::Denied
            }
        }
    }

    /// The underlying directory (for notification address lookups)
    pub fn directory(&self) -> &CredentialDirectory {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::directory::CredentialRecord;

    const RECORDS: &[CredentialRecord] = &[
        CredentialRecord {
            uid: "A1 B2 C3 D4",
            notify_address: "+15550100",
        },
        CredentialRecord {
            uid: "5F 00 1C 2A",
            notify_address: "+15550101",
        },
    ];

    #[test]
    fn test_known_credential_granted_with_index() {
        let access = AccessController::new(CredentialDirectory::new(RECORDS));
        assert_eq!(
            access.on_credential_presented("5F 00 1C 2A"),
            AccessDecision::Granted(1)
        );
    }

    #[test]
    fn test_unknown_credential_denied() {
        let access = AccessController::new(CredentialDirectory::new(RECORDS));
        assert_eq!(
            access.on_credential_presented("FF FF FF FF"),
            AccessDecision::Denied
        );
    }
}
