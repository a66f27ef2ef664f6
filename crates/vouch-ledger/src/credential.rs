//! # Credential Store
//!
//! Credential claims, each bound to one owner and one issuer, partitioned
//! per owner. A credential's id is its zero-based position within the
//! owner's collection — scoped per owner rather than globally, so an
//! owner's collection can be enumerated on its own and ids stay stable no
//! matter what other owners do.
//!
//! Role validation is not this component's concern: the facade runs every
//! `add_credential` through the access controller first.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use vouch_core::{Address, CredentialId, Timestamp};

/// A named claim bound to one owner and one issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Position within the owner's collection. Zero-based, stable.
    pub id: CredentialId,
    /// The owner holding this credential.
    pub owner: Address,
    /// The issuer that created it.
    pub issuer: Address,
    /// Short claim title (e.g. "SSN").
    pub title: String,
    /// Longer claim description.
    pub description: String,
    /// When the credential was recorded.
    pub recorded_at: Timestamp,
}

/// Per-owner partitioned store of credentials. Credentials are created
/// once and never deleted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialStore {
    by_owner: HashMap<Address, Vec<Credential>>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a credential to the owner's collection and return its
    /// position-derived id.
    pub fn add_credential(
        &mut self,
        owner: Address,
        issuer: Address,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> CredentialId {
        let collection = self.by_owner.entry(owner.clone()).or_default();
        let id = CredentialId(collection.len() as u64);
        collection.push(Credential {
            id,
            owner,
            issuer,
            title: title.into(),
            description: description.into(),
            recorded_at: Timestamp::now(),
        });
        id
    }

    /// Re-insert an already-assigned credential (journal replay path).
    pub(crate) fn restore(&mut self, credential: Credential) {
        self.by_owner
            .entry(credential.owner.clone())
            .or_default()
            .push(credential);
    }

    /// The credential at a position in the owner's collection.
    pub fn credential(&self, owner: &Address, id: CredentialId) -> Option<&Credential> {
        self.by_owner.get(owner)?.get(id.0 as usize)
    }

    /// Whether the owner holds a credential at the given position.
    pub fn contains(&self, owner: &Address, id: CredentialId) -> bool {
        self.credential(owner, id).is_some()
    }

    /// Number of credentials in the owner's collection.
    pub fn count_for(&self, owner: &Address) -> usize {
        self.by_owner.get(owner).map_or(0, Vec::len)
    }

    /// The owner's full collection in creation order.
    pub fn credentials_of(&self, owner: &Address) -> &[Credential] {
        self.by_owner.get(owner).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    #[test]
    fn test_ids_are_zero_based_per_owner() {
        let mut store = CredentialStore::new();
        let a = addr("0xA");
        let b = addr("0xB");
        let issuer = addr("0xI");
        assert_eq!(
            store.add_credential(a.clone(), issuer.clone(), "SSN", "Social Security Number"),
            CredentialId(0)
        );
        assert_eq!(
            store.add_credential(a.clone(), issuer.clone(), "DL", "Driving License"),
            CredentialId(1)
        );
        // Another owner's collection starts at zero independently.
        assert_eq!(
            store.add_credential(b.clone(), issuer, "SSN", "Social Security Number"),
            CredentialId(0)
        );
        assert_eq!(store.count_for(&a), 2);
        assert_eq!(store.count_for(&b), 1);
    }

    #[test]
    fn test_positions_return_insertion_order() {
        let mut store = CredentialStore::new();
        let owner = addr("0xA");
        let issuer = addr("0xI");
        for i in 0..5 {
            store.add_credential(owner.clone(), issuer.clone(), format!("title-{i}"), "d");
        }
        for i in 0..5u64 {
            let cred = store.credential(&owner, CredentialId(i)).unwrap();
            assert_eq!(cred.title, format!("title-{i}"));
            assert_eq!(cred.id, CredentialId(i));
        }
    }

    #[test]
    fn test_missing_position_is_none() {
        let mut store = CredentialStore::new();
        let owner = addr("0xA");
        assert!(store.credential(&owner, CredentialId(0)).is_none());
        store.add_credential(owner.clone(), addr("0xI"), "SSN", "d");
        assert!(store.credential(&owner, CredentialId(1)).is_none());
        assert!(!store.contains(&owner, CredentialId(1)));
        assert!(store.contains(&owner, CredentialId(0)));
    }

    #[test]
    fn test_unknown_owner_enumerates_empty() {
        let store = CredentialStore::new();
        assert!(store.credentials_of(&addr("0xZ")).is_empty());
        assert_eq!(store.count_for(&addr("0xZ")), 0);
    }

    #[test]
    fn test_record_binds_owner_and_issuer() {
        let mut store = CredentialStore::new();
        let owner = addr("0xA");
        let issuer = addr("0xB");
        store.add_credential(owner.clone(), issuer.clone(), "SSN", "Social Security Number");
        let cred = store.credential(&owner, CredentialId(0)).unwrap();
        assert_eq!(cred.owner, owner);
        assert_eq!(cred.issuer, issuer);
        assert_eq!(cred.title, "SSN");
        assert_eq!(cred.description, "Social Security Number");
    }
}
