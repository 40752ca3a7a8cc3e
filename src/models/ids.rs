//! Account identifier

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique account identifier, assigned once when the account is opened
///
/// Displays as `acc-` followed by the first 8 hex digits of the UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "acc-{}", &self.0.simple().to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefix() {
        let display = AccountId::new().to_string();
        assert!(display.starts_with("acc-"));
        assert_eq!(display.len(), 12);
        assert!(display[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_ids_are_unique() {
        let id = AccountId::new();
        let copy = id;
        assert_eq!(id, copy);
        assert_ne!(id, AccountId::new());
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let id = AccountId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json.len(), 38); // quoted hyphenated UUID

        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
