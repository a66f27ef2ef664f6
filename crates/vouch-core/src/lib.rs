//! # vouch-core — Foundational Types for the Identity-Credential Ledger
//!
//! This crate is the bedrock of the vouch ledger. It defines the type-system
//! primitives shared by every other crate in the workspace; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Address`, `UserId`,
//!    `CredentialId`, `RecordIndex` — all newtypes. No bare strings or
//!    integers for identifiers, so a credential position cannot be passed
//!    where a ledger index is expected.
//!
//! 2. **Single `Role` enum.** One definition, three variants — Owner,
//!    Issuer, Verifier — and exhaustive `match` everywhere. The role set is
//!    closed; adding a role forces every consumer to handle it.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so the audit trail renders identically
//!    wherever it is read.
//!
//! 4. **Three boundary error kinds.** Every `LedgerError` variant
//!    classifies as `DuplicateAddress`, `NotFound`, or `Unauthorized` via
//!    `LedgerError::kind()` — the closed contract transport layers map to
//!    their own status codes.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vouch-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod password;
pub mod role;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{ErrorKind, LedgerError};
pub use identity::{Address, CredentialId, RecordIndex, UserId};
pub use password::{digest_password, verify_password};
pub use role::Role;
pub use temporal::Timestamp;
