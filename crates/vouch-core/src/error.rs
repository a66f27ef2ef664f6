//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the vouch ledger. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Variants carry typed fields (the offending address, the missing index)
//!   rather than pre-rendered strings, so callers can act on them.
//! - Every variant classifies as exactly one of three boundary kinds —
//!   `DuplicateAddress`, `NotFound`, `Unauthorized` — via
//!   [`LedgerError::kind()`]. Transport collaborators map the kind to their
//!   own surface (HTTP status, RPC error field, CLI exit code).
//! - All failures are local, non-retriable validation failures. A rejected
//!   operation leaves no partial state; the core itself neither logs nor
//!   retries.

use thiserror::Error;

use crate::identity::{Address, CredentialId, RecordIndex, UserId};
use crate::role::Role;

/// The closed, boundary-facing error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The address is already registered.
    DuplicateAddress,
    /// A referenced id, index, or address does not exist.
    NotFound,
    /// The caller's role does not match the operation's required role.
    Unauthorized,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::DuplicateAddress => "DUPLICATE_ADDRESS",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
        };
        f.write_str(s)
    }
}

/// Top-level error type for ledger operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Attempted to register an address that already exists.
    #[error("address {address} is already registered")]
    DuplicateAddress {
        /// The address that collided.
        address: Address,
    },

    /// No user exists with the given registry id.
    #[error("no user registered with id {id}")]
    UserNotFound {
        /// The out-of-range user id.
        id: UserId,
    },

    /// No user is registered under the given address.
    #[error("no user registered under address {address}")]
    AddressNotFound {
        /// The unregistered address.
        address: Address,
    },

    /// The owner has no credential at the given position.
    #[error("owner {owner} has no credential {credential}")]
    CredentialNotFound {
        /// The owner whose collection was consulted.
        owner: Address,
        /// The missing credential position.
        credential: CredentialId,
    },

    /// The owner's log has no record at the given index.
    #[error("owner {owner} has no ledger record at {index}")]
    RecordNotFound {
        /// The owner whose log was consulted.
        owner: Address,
        /// The out-of-range log index.
        index: RecordIndex,
    },

    /// Strict disclosure policy: a reveal was attempted with no pending
    /// request for the (owner, verifier, credential) triple.
    #[error(
        "no pending disclosure request by {verifier} for {credential} of owner {owner}"
    )]
    NoPendingRequest {
        /// The owner whose log was consulted.
        owner: Address,
        /// The verifier named in the reveal.
        verifier: Address,
        /// The credential named in the reveal.
        credential: CredentialId,
    },

    /// A principal address failed validation at construction.
    #[error("invalid address: {reason}")]
    InvalidAddress {
        /// Why the address was rejected.
        reason: String,
    },

    /// A role identifier failed to parse.
    #[error("unknown role: {value:?}")]
    InvalidRole {
        /// The unrecognized role string.
        value: String,
    },

    /// A timestamp failed validation at construction.
    #[error("invalid timestamp: {reason}")]
    InvalidTimestamp {
        /// Why the timestamp was rejected.
        reason: String,
    },

    /// The caller's registered role does not permit the operation.
    #[error("address {address} requires role {required} (holds {})",
        .actual.map(|r| r.as_str()).unwrap_or("no registration"))]
    Unauthorized {
        /// The caller address that failed the role check.
        address: Address,
        /// The role the operation requires.
        required: Role,
        /// The caller's registered role, or `None` if unregistered.
        actual: Option<Role>,
    },
}

impl LedgerError {
    /// The boundary-facing classification of this error.
    ///
    /// Total over all variants: every ledger failure surfaces as one of the
    /// three kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateAddress { .. } => ErrorKind::DuplicateAddress,
            Self::UserNotFound { .. }
            | Self::AddressNotFound { .. }
            | Self::CredentialNotFound { .. }
            | Self::RecordNotFound { .. }
            | Self::NoPendingRequest { .. }
            | Self::InvalidAddress { .. }
            | Self::InvalidRole { .. }
            | Self::InvalidTimestamp { .. } => ErrorKind::NotFound,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            LedgerError::DuplicateAddress { address: addr("0xA") }.kind(),
            ErrorKind::DuplicateAddress
        );
        assert_eq!(
            LedgerError::UserNotFound { id: UserId(7) }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            LedgerError::CredentialNotFound {
                owner: addr("0xA"),
                credential: CredentialId(0),
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            LedgerError::Unauthorized {
                address: addr("0xC"),
                required: Role::Owner,
                actual: Some(Role::Verifier),
            }
            .kind(),
            ErrorKind::Unauthorized
        );
    }

    #[test]
    fn test_unauthorized_display_unregistered() {
        let err = LedgerError::Unauthorized {
            address: addr("0xDEAD"),
            required: Role::Issuer,
            actual: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("0xDEAD"));
        assert!(msg.contains("ISSUER"));
        assert!(msg.contains("no registration"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::NotFound.to_string(), "NOT_FOUND");
        assert_eq!(ErrorKind::DuplicateAddress.to_string(), "DUPLICATE_ADDRESS");
        assert_eq!(ErrorKind::Unauthorized.to_string(), "UNAUTHORIZED");
    }
}
