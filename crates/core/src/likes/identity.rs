use std::fmt;

use sha2::{Digest, Sha256};

/// An opaque identity derived from a requester's network address.
///
/// The address is SHA-256 hashed before it reaches any ledger state, so the
/// same address always maps to the same identity and the address cannot be
/// recovered from it. Stored as a 64-character lowercase hex string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    /// Derive an identity from a raw network address string.
    pub fn from_address(address: &str) -> Self {
        let digest = Sha256::digest(address.as_bytes());
        let hex = digest
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect::<String>();
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_address_same_identity() {
        let a = ClientIdentity::from_address("203.0.113.7");
        let b = ClientIdentity::from_address("203.0.113.7");
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_addresses_distinct_identities() {
        let a = ClientIdentity::from_address("203.0.113.7");
        let b = ClientIdentity::from_address("203.0.113.8");
        assert_ne!(a, b);
    }

    #[test]
    fn test_identity_is_fixed_length_hex() {
        let identity = ClientIdentity::from_address("::1");
        assert_eq!(identity.as_str().len(), 64);
        assert!(identity.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_identity_does_not_leak_the_address() {
        let identity = ClientIdentity::from_address("198.51.100.23");
        assert!(!identity.as_str().contains("198.51.100.23"));
    }
}
