//! # vouch-ledger — Permissioned Identity-Credential Ledger Core
//!
//! The record model, role checks, and event semantics of the vouch ledger:
//! Owners hold credentials, Issuers create and attest them, Verifiers
//! request disclosure, and every request/reveal and sign/unsign event lands
//! on an append-only per-owner audit trail.
//!
//! ## Components
//!
//! - **UserRegistry** (`user.rs`): identity/role records with stable
//!   sequential ids and a global address-uniqueness constraint.
//!
//! - **CredentialStore** (`credential.rs`): credential claims partitioned
//!   per owner; a credential's id is its position in the owner's
//!   collection.
//!
//! - **DisclosureLedger** (`disclosure.rs`): append-only per-owner log of
//!   request/reveal events, with the pure `latest_disclosure_state` fold.
//!
//! - **AttestationLedger** (`attestation.rs`): append-only per-owner log of
//!   sign/unsign events, with `latest_attestation_state`.
//!
//! - **AccessController** (`access.rs`): the single choke point every
//!   mutation passes through before touching storage.
//!
//! - **LedgerStore** (`store.rs`): the injected abstraction over the four
//!   append-only collections; `InMemoryStore` is the reference
//!   implementation.
//!
//! - **IdentityLedger** (`ledger.rs`): the facade binding all of the above
//!   into the ten external operations.
//!
//! - **Journal** (`journal.rs`): durable sequential JSON-lines log of
//!   append events, with replay.
//!
//! ## Design
//!
//! The ledger assumes a single authoritative sequential executor: every
//! mutating operation takes `&mut self`, validates fully, then appends —
//! there is no intermediate observable state. History is never edited;
//! "current status" is always derived by folding a log.

pub mod access;
pub mod attestation;
pub mod config;
pub mod credential;
pub mod disclosure;
pub mod journal;
pub mod ledger;
pub mod store;
pub mod user;

// ─── Facade re-exports ──────────────────────────────────────────────

pub use config::{DisclosurePolicy, LedgerConfig};
pub use ledger::IdentityLedger;
pub use store::{InMemoryStore, LedgerStore};

// ─── Component re-exports ───────────────────────────────────────────

pub use attestation::{latest_attestation_state, AttestationLedger, AttestationState, SignRecord};
pub use credential::{Credential, CredentialStore};
pub use disclosure::{
    latest_disclosure_state, DisclosureLedger, DisclosureRecord, DisclosureState,
};
pub use user::{User, UserRegistry};

// ─── Journal re-exports ─────────────────────────────────────────────

pub use journal::{Journal, JournalError, LedgerEvent};
