//! # Attestation Ledger
//!
//! Append-only per-owner log of sign/unsign events for credentials — the
//! same log discipline as the disclosure ledger. A "sign" appends
//! `signed = true`; an "unsign" appends a new record with
//! `signed = false`. No record is ever edited; the current attestation
//! status of a credential is derived by scanning for the most recent
//! matching record, not stored as mutable state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use vouch_core::{Address, CredentialId, RecordIndex, Timestamp};

/// An append-only log entry capturing an issuer's attestation state change
/// for a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRecord {
    /// The owner whose log this record belongs to.
    pub owner: Address,
    /// The issuer attesting or retracting.
    pub issuer: Address,
    /// The credential named by the event.
    pub credential: CredentialId,
    /// `true` for a sign event, `false` for an unsign event.
    pub signed: bool,
    /// When the event was appended.
    pub recorded_at: Timestamp,
}

/// The effective attestation state of one credential, derived from the
/// owner's log. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttestationState {
    /// No record mentions the credential.
    Unattested,
    /// The most recent matching record is a sign.
    Signed,
    /// The most recent matching record is an unsign.
    Unsigned,
}

/// Append-only per-owner log of attestation events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttestationLedger {
    logs: HashMap<Address, Vec<SignRecord>>,
}

impl AttestationLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its owner's log and return the per-owner
    /// sequence number.
    pub fn append(&mut self, record: SignRecord) -> RecordIndex {
        let log = self.logs.entry(record.owner.clone()).or_default();
        let index = RecordIndex(log.len() as u64);
        log.push(record);
        index
    }

    /// The record at an index in the owner's log.
    pub fn record(&self, owner: &Address, index: RecordIndex) -> Option<&SignRecord> {
        self.logs.get(owner)?.get(index.0 as usize)
    }

    /// The owner's full log in append order.
    pub fn log(&self, owner: &Address) -> &[SignRecord] {
        self.logs.get(owner).map_or(&[], Vec::as_slice)
    }

    /// Length of the owner's log.
    pub fn len_for(&self, owner: &Address) -> usize {
        self.logs.get(owner).map_or(0, Vec::len)
    }
}

/// Fold an owner's log into the effective attestation state of one
/// credential: the most recent matching record wins, whichever issuer
/// wrote it.
pub fn latest_attestation_state(
    log: &[SignRecord],
    credential: CredentialId,
) -> AttestationState {
    log.iter()
        .rev()
        .find(|r| r.credential == credential)
        .map_or(AttestationState::Unattested, |r| {
            if r.signed {
                AttestationState::Signed
            } else {
                AttestationState::Unsigned
            }
        })
}
