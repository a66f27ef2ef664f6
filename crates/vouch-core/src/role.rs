//! # Role Taxonomy
//!
//! The closed set of roles a registered user can hold. A user's role is
//! fixed at registration and never changes — there is no promotion or
//! demotion operation anywhere in the ledger.
//!
//! ## Role Entitlements
//!
//! - **Owner** — holds credentials and authorizes their disclosure.
//! - **Issuer** — creates credentials and attests (signs/unsigns) them.
//! - **Verifier** — requests disclosure of a credential; owns nothing.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// The role a registered user holds. Closed set, immutable post-creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Entitled to hold credentials and authorize their disclosure.
    Owner,
    /// Entitled to create and attest (sign/unsign) credentials.
    Issuer,
    /// Entitled to request disclosure of a credential.
    Verifier,
}

impl Role {
    /// The canonical identifier string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Issuer => "ISSUER",
            Self::Verifier => "VERIFIER",
        }
    }

    /// All roles, in declaration order. Handy for exhaustive tests and
    /// authorization matrices.
    pub const ALL: [Role; 3] = [Role::Owner, Role::Issuer, Role::Verifier];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = LedgerError;

    /// Parse a role identifier. Case-insensitive, so transport layers can
    /// pass through `"Owner"` or `"OWNER"` unchanged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OWNER" => Ok(Self::Owner),
            "ISSUER" => Ok(Self::Issuer),
            "VERIFIER" => Ok(Self::Verifier),
            _ => Err(LedgerError::InvalidRole {
                value: s.to_string(),
            }),
        }
    }
}
