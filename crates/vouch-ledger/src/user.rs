//! # User Registry
//!
//! Identity/role records with stable sequential identifiers. The registry
//! grows monotonically: users are created once and never deleted or
//! mutated — role, address, and name are immutable for the life of the
//! ledger.
//!
//! Address uniqueness is global. The secondary address index exists so
//! `role_of` — the lookup on every authorization check — stays O(1).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use vouch_core::{Address, LedgerError, Role, Timestamp, UserId};

/// A registered identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Registry-assigned sequential id.
    pub id: UserId,
    /// Unique principal identifier.
    pub address: Address,
    /// Display name. Not unique.
    pub name: String,
    /// Password digest as supplied at registration. Opaque to the ledger.
    pub password_hash: String,
    /// The role this user holds. Immutable post-creation.
    pub role: Role,
    /// When the user was registered.
    pub registered_at: Timestamp,
}

/// Append-only store of identity records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRegistry {
    users: Vec<User>,
    by_address: HashMap<Address, UserId>,
}

impl UserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user under the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DuplicateAddress`] if the address is already
    /// registered. The registry is untouched on failure.
    pub fn add_user(
        &mut self,
        address: Address,
        name: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Result<UserId, LedgerError> {
        if self.by_address.contains_key(&address) {
            return Err(LedgerError::DuplicateAddress { address });
        }
        let id = UserId(self.users.len() as u64);
        self.by_address.insert(address.clone(), id);
        self.users.push(User {
            id,
            address,
            name: name.into(),
            password_hash: password_hash.into(),
            role,
            registered_at: Timestamp::now(),
        });
        Ok(id)
    }

    /// Re-insert an already-assigned user record (journal replay path).
    ///
    /// The record was validated when it was first appended; replay trusts
    /// the journal's order and ids.
    pub(crate) fn restore(&mut self, user: User) {
        self.by_address.insert(user.address.clone(), user.id);
        self.users.push(user);
    }

    /// Look up a user by registry id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(id.0 as usize)
    }

    /// Look up a user by address.
    pub fn user_by_address(&self, address: &Address) -> Option<&User> {
        self.by_address.get(address).and_then(|id| self.user(*id))
    }

    /// The role registered under an address, if any.
    pub fn role_of(&self, address: &Address) -> Option<Role> {
        self.user_by_address(address).map(|u| u.role)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All users in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }
}
