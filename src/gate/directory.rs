//! Credential directory
//!
//! Static mapping from normalized credential identifier to authorization
//! index and notification address. Loaded once from compiled-in
//! configuration; read-only for the life of the process.

/// One authorized credential holder
///
/// The authorization index of a record is its position in the table; a
/// single ordered collection keyed by identifier avoids the
/// index-correlation bugs of parallel arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Normalized identifier: uppercase hex pairs separated by single spaces
    pub uid: &'static str,
    /// Destination address for status notifications
    pub notify_address: &'static str,
}

/// Read-only credential table
#[derive(Debug, Clone, Copy)]
pub struct CredentialDirectory {
    records: &'static [CredentialRecord],
}

impl CredentialDirectory {
    /// Create a directory over a static record table
    pub const fn new(records: &'static [CredentialRecord]) -> Self {
        Self { records }
    }

    /// Look up a presented identifier
    ///
    /// Linear scan with case-insensitive exact matching; the table is small
    /// and static. Returns the first matching index, or `None` — a miss is a
    /// normal outcome (denial), not a fault. Duplicate identifiers are a
    /// configuration error and are not validated; first match wins.
    pub fn authorize(&self, identifier: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.uid.eq_ignore_ascii_case(identifier))
    }

    /// Notification address for an authorization index
    pub fn notify_address(&self, index: usize) -> Option<&'static str> {
        self.records.get(index).map(|record| record.notify_address)
    }

    /// Number of configured credentials
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORDS: &[CredentialRecord] = &[
        CredentialRecord {
            uid: "A1 B2 C3 D4",
            notify_address: "+15550100",
        },
        CredentialRecord {
            uid: "5F 00 1C 2A",
            notify_address: "+15550101",
        },
        // Duplicate of record 0: first match must win
        CredentialRecord {
            uid: "A1 B2 C3 D4",
            notify_address: "+15550199",
        },
    ];

    fn directory() -> CredentialDirectory {
        CredentialDirectory::new(RECORDS)
    }

    #[test]
    fn test_authorize_known_credential() {
        assert_eq!(directory().authorize("A1 B2 C3 D4"), Some(0));
        assert_eq!(directory().authorize("5F 00 1C 2A"), Some(1));
    }

    #[test]
    fn test_authorize_unknown_credential() {
        assert_eq!(directory().authorize("FF FF FF FF"), None);
    }

    #[test]
    fn test_authorize_is_case_insensitive() {
        assert_eq!(directory().authorize("a1 b2 c3 d4"), Some(0));
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        assert_eq!(directory().authorize("A1 B2 C3 D4"), Some(0));
    }

    #[test]
    fn test_notify_address() {
        assert_eq!(directory().notify_address(1), Some("+15550101"));
        assert_eq!(directory().notify_address(9), None);
    }

    #[test]
    fn test_empty_directory_denies_everything() {
        let empty = CredentialDirectory::new(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.authorize("A1 B2 C3 D4"), None);
    }
}
