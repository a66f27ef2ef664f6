//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the ledger's identifier namespaces. These prevent
//! accidental identifier confusion — you cannot pass a `CredentialId` where
//! a `RecordIndex` is expected, even though both are sequential integers.
//!
//! ## Identifier Semantics
//!
//! - `Address` — caller-supplied principal identifier, globally unique
//!   across the user registry.
//! - `UserId` — registry-assigned, zero-based, append-only and monotonic.
//! - `CredentialId` — zero-based position within one owner's credential
//!   collection. Scoped per owner, stable forever.
//! - `RecordIndex` — zero-based position within one owner's disclosure or
//!   attestation log. The externally visible audit-trail index.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// A principal identifier, unique across all registered users.
///
/// The ledger does not interpret the address format — a hex account string,
/// a DID, or any opaque token the embedding system uses. It only requires
/// the address to be non-empty and free of whitespace, so addresses render
/// unambiguously in logs and journal lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Construct a validated address.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAddress`] if the input is empty or
    /// contains whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, LedgerError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(LedgerError::InvalidAddress {
                reason: "address must not be empty".to_string(),
            });
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(LedgerError::InvalidAddress {
                reason: format!("address must not contain whitespace: {raw:?}"),
            });
        }
        Ok(Self(raw))
    }

    /// The address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Address {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Registry-assigned user identifier. Zero-based, sequential, monotonic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UserId(pub u64);

/// Position of a credential within one owner's collection. Zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CredentialId(pub u64);

/// Position of a record within one owner's disclosure or attestation log.
/// Zero-based; this is the externally visible ledger index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RecordIndex(pub u64);

impl UserId {
    /// The raw sequential value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl CredentialId {
    /// The raw per-owner position.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl RecordIndex {
    /// The raw per-owner log position.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

impl std::fmt::Display for CredentialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "credential:{}", self.0)
    }
}

impl std::fmt::Display for RecordIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record:{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    proptest! {
        /// Address construction never panics, whatever the input.
        #[test]
        fn address_new_never_panics(raw in ".*") {
            let _ = Address::new(raw);
        }

        /// Valid addresses round-trip through Display and FromStr.
        #[test]
        fn address_display_roundtrip(raw in "[!-~]{1,64}") {
            let addr = Address::new(raw).unwrap();
            let parsed = Address::from_str(&addr.to_string()).unwrap();
            prop_assert_eq!(addr, parsed);
        }

        /// Inputs containing whitespace are always rejected.
        #[test]
        fn address_rejects_any_whitespace(
            head in "[!-~]{0,8}",
            ws in prop::sample::select(vec![' ', '\t', '\n', '\r']),
            tail in "[!-~]{0,8}",
        ) {
            let raw = format!("{head}{ws}{tail}");
            prop_assert!(Address::new(raw).is_err());
        }
    }
}
