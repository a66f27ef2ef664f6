//! # Ledger Configuration
//!
//! The observed contract allows a reveal to be appended with no prior
//! matching request, and allows unlimited repeated requests and reveals
//! for the same triple — the ledger is a pure audit log, and any gating
//! beyond "caller has the right role" is a policy layered on top of the
//! raw append. Whether that gating should exist is a deployment decision,
//! so it lives here as configuration rather than hard-coded semantics.

use serde::{Deserialize, Serialize};

/// Gating applied to `reveal_disclosure` beyond the owner role check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosurePolicy {
    /// Pure audit log: a reveal appends unconditionally, matching request
    /// or not. The default, and the observed behavior of the original
    /// contract.
    #[default]
    AppendOnly,
    /// Reject a reveal unless the (owner, verifier, credential) triple's
    /// derived state is `Requested`. Nothing is appended on rejection.
    RequireRequest,
}

/// Configuration for an [`IdentityLedger`](crate::IdentityLedger).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Gating for reveal events. Attestation events are never gated beyond
    /// the issuer role check.
    #[serde(default)]
    pub disclosure_policy: DisclosurePolicy,
}

impl LedgerConfig {
    /// The strict variant: reveals require a pending request.
    pub fn strict() -> Self {
        Self {
            disclosure_policy: DisclosurePolicy::RequireRequest,
        }
    }
}
