//! # Identity Ledger Facade
//!
//! `IdentityLedger` binds the components into the ten external operations:
//! every mutating call resolves the caller's role through the access
//! controller, validates its references, then appends — in that order, so
//! a rejected call leaves no partial state. Read calls bypass role checks.
//!
//! The facade takes `&mut self` on every mutation, which gives the
//! single-logical-writer execution model directly: operations apply
//! strictly sequentially and atomically, and reads never observe a
//! half-applied write. An embedding with a concurrent front end serializes
//! mutations with whatever lock it already has around the ledger value.

use vouch_core::{Address, CredentialId, LedgerError, RecordIndex, Role, Timestamp, UserId};

use crate::access;
use crate::attestation::{latest_attestation_state, AttestationState, SignRecord};
use crate::config::{DisclosurePolicy, LedgerConfig};
use crate::credential::Credential;
use crate::disclosure::{latest_disclosure_state, DisclosureRecord, DisclosureState};
use crate::store::{InMemoryStore, LedgerStore};
use crate::user::User;

/// The ledger core: role-gated record store plus the two append-only
/// audit trails, over an injected [`LedgerStore`].
#[derive(Debug, Clone, Default)]
pub struct IdentityLedger<S: LedgerStore = InMemoryStore> {
    store: S,
    config: LedgerConfig,
}

impl IdentityLedger<InMemoryStore> {
    /// An empty in-memory ledger with the default (append-only) policy.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new(), LedgerConfig::default())
    }
}

impl<S: LedgerStore> IdentityLedger<S> {
    /// Build a ledger over an injected store.
    pub fn new(store: S, config: LedgerConfig) -> Self {
        Self { store, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// The underlying store, for read-side embedding.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ── Users ────────────────────────────────────────────────────────

    /// Register a new user. The first mutation with no role gate: roles
    /// come into existence here.
    ///
    /// # Errors
    ///
    /// [`LedgerError::DuplicateAddress`] if the address is registered.
    pub fn add_user(
        &mut self,
        address: Address,
        name: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Result<UserId, LedgerError> {
        let id = self
            .store
            .append_user(address.clone(), name.into(), password_hash.into(), role)?;
        tracing::debug!(%address, %role, user = %id, "user registered");
        Ok(id)
    }

    /// The user with the given registry id.
    ///
    /// # Errors
    ///
    /// [`LedgerError::UserNotFound`] if the id is out of range.
    pub fn user(&self, id: UserId) -> Result<&User, LedgerError> {
        self.store.user(id).ok_or(LedgerError::UserNotFound { id })
    }

    // ── Credentials ──────────────────────────────────────────────────

    /// Record a credential claim for an owner, issued by an issuer.
    ///
    /// The owner address is the gated caller and must hold [`Role::Owner`].
    /// The issuer is a referenced principal: it must be registered
    /// (`AddressNotFound` otherwise) and hold [`Role::Issuer`]
    /// (`Unauthorized` otherwise).
    pub fn add_credential(
        &mut self,
        owner: Address,
        issuer: Address,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<CredentialId, LedgerError> {
        access::authorize(self.store.role_of(&owner), &owner, Role::Owner)?;
        match self.store.role_of(&issuer) {
            None => {
                return Err(LedgerError::AddressNotFound { address: issuer });
            }
            Some(role) if !access::role_permits(role, Role::Issuer) => {
                return Err(LedgerError::Unauthorized {
                    address: issuer,
                    required: Role::Issuer,
                    actual: Some(role),
                });
            }
            Some(_) => {}
        }
        let id = self
            .store
            .append_credential(owner.clone(), issuer.clone(), title.into(), description.into());
        tracing::debug!(%owner, %issuer, credential = %id, "credential recorded");
        Ok(id)
    }

    /// The credential at a position in the owner's collection.
    ///
    /// # Errors
    ///
    /// [`LedgerError::CredentialNotFound`] if the owner has no credential
    /// at that position.
    pub fn credential_by_owner(
        &self,
        owner: &Address,
        id: CredentialId,
    ) -> Result<&Credential, LedgerError> {
        self.store
            .credential(owner, id)
            .ok_or_else(|| LedgerError::CredentialNotFound {
                owner: owner.clone(),
                credential: id,
            })
    }

    // ── Disclosure ───────────────────────────────────────────────────

    /// A verifier requests disclosure of an owner's credential. Appends a
    /// pending-request record; it does **not** grant access.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Unauthorized`] unless the caller holds
    ///   [`Role::Verifier`].
    /// - [`LedgerError::CredentialNotFound`] if the owner has no such
    ///   credential.
    pub fn request_disclosure(
        &mut self,
        verifier: Address,
        owner: Address,
        credential: CredentialId,
    ) -> Result<RecordIndex, LedgerError> {
        access::authorize(self.store.role_of(&verifier), &verifier, Role::Verifier)?;
        if !self.store.has_credential(&owner, credential) {
            return Err(LedgerError::CredentialNotFound { owner, credential });
        }
        let index = self.store.append_disclosure(DisclosureRecord {
            owner: owner.clone(),
            verifier: verifier.clone(),
            credential,
            revealed: false,
            recorded_at: Timestamp::now(),
        });
        tracing::debug!(%owner, %verifier, %credential, %index, "disclosure requested");
        Ok(index)
    }

    /// An owner grants a verifier access to a credential. Appends a new
    /// reveal record — never a mutation of the matching request.
    ///
    /// Under [`DisclosurePolicy::AppendOnly`] the append is unconditional;
    /// under [`DisclosurePolicy::RequireRequest`] the triple's derived
    /// state must be `Requested`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Unauthorized`] unless the caller holds
    ///   [`Role::Owner`].
    /// - [`LedgerError::NoPendingRequest`] under the strict policy with no
    ///   pending request; nothing is appended.
    pub fn reveal_disclosure(
        &mut self,
        owner: Address,
        verifier: Address,
        credential: CredentialId,
    ) -> Result<RecordIndex, LedgerError> {
        access::authorize(self.store.role_of(&owner), &owner, Role::Owner)?;
        if self.config.disclosure_policy == DisclosurePolicy::RequireRequest {
            let state =
                latest_disclosure_state(self.store.disclosure_log(&owner), &verifier, credential);
            if state != DisclosureState::Requested {
                return Err(LedgerError::NoPendingRequest {
                    owner,
                    verifier,
                    credential,
                });
            }
        }
        let index = self.store.append_disclosure(DisclosureRecord {
            owner: owner.clone(),
            verifier: verifier.clone(),
            credential,
            revealed: true,
            recorded_at: Timestamp::now(),
        });
        tracing::debug!(%owner, %verifier, %credential, %index, "disclosure revealed");
        Ok(index)
    }

    /// The disclosure record at an index in the owner's log.
    ///
    /// # Errors
    ///
    /// [`LedgerError::RecordNotFound`] if the index exceeds the log.
    pub fn disclosure_record(
        &self,
        owner: &Address,
        index: RecordIndex,
    ) -> Result<&DisclosureRecord, LedgerError> {
        self.store
            .disclosure(owner, index)
            .ok_or_else(|| LedgerError::RecordNotFound {
                owner: owner.clone(),
                index,
            })
    }

    /// Effective access state for a (owner, verifier, credential) triple,
    /// derived from the log.
    pub fn disclosure_state(
        &self,
        owner: &Address,
        verifier: &Address,
        credential: CredentialId,
    ) -> DisclosureState {
        latest_disclosure_state(self.store.disclosure_log(owner), verifier, credential)
    }

    // ── Attestation ──────────────────────────────────────────────────

    /// An issuer attests a credential. Appends a `signed = true` record.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Unauthorized`] unless the caller holds
    /// [`Role::Issuer`].
    pub fn sign_credential(
        &mut self,
        issuer: Address,
        owner: Address,
        credential: CredentialId,
    ) -> Result<RecordIndex, LedgerError> {
        self.append_attestation(issuer, owner, credential, true)
    }

    /// An issuer retracts attestation. Appends a new `signed = false`
    /// record; the earlier sign record stays in the log.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Unauthorized`] unless the caller holds
    /// [`Role::Issuer`].
    pub fn unsign_credential(
        &mut self,
        issuer: Address,
        owner: Address,
        credential: CredentialId,
    ) -> Result<RecordIndex, LedgerError> {
        self.append_attestation(issuer, owner, credential, false)
    }

    fn append_attestation(
        &mut self,
        issuer: Address,
        owner: Address,
        credential: CredentialId,
        signed: bool,
    ) -> Result<RecordIndex, LedgerError> {
        access::authorize(self.store.role_of(&issuer), &issuer, Role::Issuer)?;
        let index = self.store.append_sign(SignRecord {
            owner: owner.clone(),
            issuer: issuer.clone(),
            credential,
            signed,
            recorded_at: Timestamp::now(),
        });
        tracing::debug!(%owner, %issuer, %credential, %index, signed, "attestation recorded");
        Ok(index)
    }

    /// The sign record at an index in the owner's log.
    ///
    /// # Errors
    ///
    /// [`LedgerError::RecordNotFound`] if the index exceeds the log.
    pub fn sign_record(
        &self,
        owner: &Address,
        index: RecordIndex,
    ) -> Result<&SignRecord, LedgerError> {
        self.store
            .sign_record(owner, index)
            .ok_or_else(|| LedgerError::RecordNotFound {
                owner: owner.clone(),
                index,
            })
    }

    /// Effective attestation state of a credential, derived from the log.
    pub fn attestation_state(
        &self,
        owner: &Address,
        credential: CredentialId,
    ) -> AttestationState {
        latest_attestation_state(self.store.sign_log(owner), credential)
    }
}
