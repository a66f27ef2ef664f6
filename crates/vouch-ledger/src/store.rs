//! # Store Abstraction
//!
//! `LedgerStore` is the injected interface over the four append-only
//! collections — users, credentials-per-owner, disclosure records, sign
//! records. The facade is generic over it, so tests (or an embedding that
//! wants its own backing) can substitute a store without touching the
//! role-check or event semantics.
//!
//! `InMemoryStore` composes the four concrete components and is both the
//! default store and the reference implementation of the trait.

use vouch_core::{Address, CredentialId, LedgerError, RecordIndex, Role, UserId};

use crate::attestation::{AttestationLedger, SignRecord};
use crate::credential::{Credential, CredentialStore};
use crate::disclosure::{DisclosureLedger, DisclosureRecord};
use crate::journal::LedgerEvent;
use crate::user::{User, UserRegistry};

/// Interface over the four append-only collections.
///
/// Appends are unconditional except for the registry's address-uniqueness
/// constraint; role gating and referential validation happen above this
/// seam, in the facade. Implementations must keep every collection
/// append-only — no edit, no removal.
pub trait LedgerStore {
    // ── Users ────────────────────────────────────────────────────────

    /// Append a user under the next sequential id.
    fn append_user(
        &mut self,
        address: Address,
        name: String,
        password_hash: String,
        role: Role,
    ) -> Result<UserId, LedgerError>;

    /// The user with the given registry id.
    fn user(&self, id: UserId) -> Option<&User>;

    /// The role registered under an address.
    fn role_of(&self, address: &Address) -> Option<Role>;

    /// Number of registered users.
    fn user_count(&self) -> usize;

    // ── Credentials ──────────────────────────────────────────────────

    /// Append a credential to the owner's collection.
    fn append_credential(
        &mut self,
        owner: Address,
        issuer: Address,
        title: String,
        description: String,
    ) -> CredentialId;

    /// The credential at a position in the owner's collection.
    fn credential(&self, owner: &Address, id: CredentialId) -> Option<&Credential>;

    /// Whether the owner holds a credential at the given position.
    fn has_credential(&self, owner: &Address, id: CredentialId) -> bool;

    // ── Disclosure records ───────────────────────────────────────────

    /// Append a disclosure record to its owner's log.
    fn append_disclosure(&mut self, record: DisclosureRecord) -> RecordIndex;

    /// The disclosure record at an index in the owner's log.
    fn disclosure(&self, owner: &Address, index: RecordIndex) -> Option<&DisclosureRecord>;

    /// The owner's full disclosure log in append order.
    fn disclosure_log(&self, owner: &Address) -> &[DisclosureRecord];

    // ── Sign records ─────────────────────────────────────────────────

    /// Append a sign record to its owner's log.
    fn append_sign(&mut self, record: SignRecord) -> RecordIndex;

    /// The sign record at an index in the owner's log.
    fn sign_record(&self, owner: &Address, index: RecordIndex) -> Option<&SignRecord>;

    /// The owner's full attestation log in append order.
    fn sign_log(&self, owner: &Address) -> &[SignRecord];
}

/// The reference in-memory store: the four components behind one seam.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: UserRegistry,
    credentials: CredentialStore,
    disclosures: DisclosureLedger,
    attestations: AttestationLedger,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The user registry component.
    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    /// The credential store component.
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// The disclosure ledger component.
    pub fn disclosures(&self) -> &DisclosureLedger {
        &self.disclosures
    }

    /// The attestation ledger component.
    pub fn attestations(&self) -> &AttestationLedger {
        &self.attestations
    }

    /// Re-apply a journaled append event.
    ///
    /// Replay trusts the journal: every event in it passed validation when
    /// it was first appended, so records land with their original ids and
    /// timestamps and no role checks re-run.
    pub fn apply(&mut self, event: LedgerEvent) {
        match event {
            LedgerEvent::UserAdded { user } => self.users.restore(user),
            LedgerEvent::CredentialAdded { credential } => {
                self.credentials.restore(credential)
            }
            LedgerEvent::DisclosureAppended { record } => {
                self.disclosures.append(record);
            }
            LedgerEvent::SignAppended { record } => {
                self.attestations.append(record);
            }
        }
    }
}

impl LedgerStore for InMemoryStore {
    fn append_user(
        &mut self,
        address: Address,
        name: String,
        password_hash: String,
        role: Role,
    ) -> Result<UserId, LedgerError> {
        self.users.add_user(address, name, password_hash, role)
    }

    fn user(&self, id: UserId) -> Option<&User> {
        self.users.user(id)
    }

    fn role_of(&self, address: &Address) -> Option<Role> {
        self.users.role_of(address)
    }

    fn user_count(&self) -> usize {
        self.users.len()
    }

    fn append_credential(
        &mut self,
        owner: Address,
        issuer: Address,
        title: String,
        description: String,
    ) -> CredentialId {
        self.credentials.add_credential(owner, issuer, title, description)
    }

    fn credential(&self, owner: &Address, id: CredentialId) -> Option<&Credential> {
        self.credentials.credential(owner, id)
    }

    fn has_credential(&self, owner: &Address, id: CredentialId) -> bool {
        self.credentials.contains(owner, id)
    }

    fn append_disclosure(&mut self, record: DisclosureRecord) -> RecordIndex {
        self.disclosures.append(record)
    }

    fn disclosure(&self, owner: &Address, index: RecordIndex) -> Option<&DisclosureRecord> {
        self.disclosures.record(owner, index)
    }

    fn disclosure_log(&self, owner: &Address) -> &[DisclosureRecord] {
        self.disclosures.log(owner)
    }

    fn append_sign(&mut self, record: SignRecord) -> RecordIndex {
        self.attestations.append(record)
    }

    fn sign_record(&self, owner: &Address, index: RecordIndex) -> Option<&SignRecord> {
        self.attestations.record(owner, index)
    }

    fn sign_log(&self, owner: &Address) -> &[SignRecord] {
        self.attestations.log(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    #[test]
    fn test_trait_delegates_to_components() {
        let mut store = InMemoryStore::new();
        let id = store
            .append_user(addr("0xA"), "John Carter".into(), "h".into(), Role::Owner)
            .unwrap();
        assert_eq!(id, UserId(0));
        assert_eq!(store.user_count(), 1);
        assert_eq!(store.role_of(&addr("0xA")), Some(Role::Owner));
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_credential_append_and_lookup() {
        let mut store = InMemoryStore::new();
        let owner = addr("0xA");
        let id = store.append_credential(owner.clone(), addr("0xB"), "SSN".into(), "d".into());
        assert_eq!(id, CredentialId(0));
        assert!(store.has_credential(&owner, id));
        assert!(!store.has_credential(&owner, CredentialId(1)));
        assert_eq!(store.credential(&owner, id).unwrap().title, "SSN");
    }
}
