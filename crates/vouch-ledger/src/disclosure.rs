//! # Disclosure Ledger
//!
//! Append-only per-owner log of request/reveal events for credentials.
//!
//! A "request" appends a record with `revealed = false`; a "reveal"
//! appends a **new** record with `revealed = true` — it never searches for
//! or mutates the prior request. The full history of who asked and who
//! granted is reconstructable by reading the log in order: a
//! `revealed = true` entry downstream of a `revealed = false` entry for
//! the same (owner, verifier, credential) triple is the evidence of grant,
//! not a state transition.
//!
//! "Current status" is a derived view, not stored state — see
//! [`latest_disclosure_state`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use vouch_core::{Address, CredentialId, RecordIndex, Timestamp};

/// An append-only log entry capturing a request-for or grant-of access to
/// a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureRecord {
    /// The owner whose log this record belongs to.
    pub owner: Address,
    /// The verifier requesting or being granted access.
    pub verifier: Address,
    /// The credential named by the event.
    pub credential: CredentialId,
    /// `false` for a request event, `true` for a reveal event.
    pub revealed: bool,
    /// When the event was appended.
    pub recorded_at: Timestamp,
}

/// The effective access state for one (owner, verifier, credential)
/// triple, derived from the log. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisclosureState {
    /// No record mentions the triple.
    NoRequest,
    /// The most recent matching record is a request.
    Requested,
    /// The most recent matching record is a reveal.
    Granted,
}

/// Append-only per-owner log of disclosure events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisclosureLedger {
    logs: HashMap<Address, Vec<DisclosureRecord>>,
}

impl DisclosureLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its owner's log and return the per-owner
    /// sequence number — the externally visible index. Unconditional: any
    /// gating happens before the record reaches the ledger.
    pub fn append(&mut self, record: DisclosureRecord) -> RecordIndex {
        let log = self.logs.entry(record.owner.clone()).or_default();
        let index = RecordIndex(log.len() as u64);
        log.push(record);
        index
    }

    /// The record at an index in the owner's log.
    pub fn record(&self, owner: &Address, index: RecordIndex) -> Option<&DisclosureRecord> {
        self.logs.get(owner)?.get(index.0 as usize)
    }

    /// The owner's full log in append order.
    pub fn log(&self, owner: &Address) -> &[DisclosureRecord] {
        self.logs.get(owner).map_or(&[], Vec::as_slice)
    }

    /// Length of the owner's log.
    pub fn len_for(&self, owner: &Address) -> usize {
        self.logs.get(owner).map_or(0, Vec::len)
    }
}

/// Fold an owner's log into the effective access state for one
/// (verifier, credential) pair: the most recent matching record wins.
///
/// Pure derivation — callers asking "is this revealed right now" never
/// need to know the append-only layout.
pub fn latest_disclosure_state(
    log: &[DisclosureRecord],
    verifier: &Address,
    credential: CredentialId,
) -> DisclosureState {
    log.iter()
        .rev()
        .find(|r| r.verifier == *verifier && r.credential == credential)
        .map_or(DisclosureState::NoRequest, |r| {
            if r.revealed {
                DisclosureState::Granted
            } else {
                DisclosureState::Requested
            }
        })
}
