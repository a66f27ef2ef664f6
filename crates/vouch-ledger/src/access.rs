//! # Access Control
//!
//! The single choke point every mutating operation passes through before
//! touching storage. The contract is deliberately small: resolve the
//! caller's registered role, compare it to the role the operation
//! requires, and fail atomically — no partial log append — when they do
//! not match.
//!
//! `role_permits` is a pure function over the closed role set, so the
//! authorization rule is unit-testable in isolation from any storage.

use vouch_core::{Address, LedgerError, Role};

/// Whether a caller holding `caller` may perform an operation requiring
/// `required`. Exact match over the closed role set — no role subsumes
/// another.
pub fn role_permits(caller: Role, required: Role) -> bool {
    caller == required
}

/// Authorize a caller against a required role.
///
/// `actual` is the caller's registered role as resolved from the user
/// registry, or `None` if the address is unregistered — both failure modes
/// surface as [`LedgerError::Unauthorized`].
pub fn authorize(
    actual: Option<Role>,
    address: &Address,
    required: Role,
) -> Result<(), LedgerError> {
    match actual {
        Some(role) if role_permits(role, required) => Ok(()),
        other => Err(LedgerError::Unauthorized {
            address: address.clone(),
            required,
            actual: other,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_core::ErrorKind;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    #[test]
    fn test_role_permits_is_exact_match() {
        for caller in Role::ALL {
            for required in Role::ALL {
                assert_eq!(role_permits(caller, required), caller == required);
            }
        }
    }

    #[test]
    fn test_authorize_accepts_matching_role() {
        assert!(authorize(Some(Role::Verifier), &addr("0xC"), Role::Verifier).is_ok());
    }

    #[test]
    fn test_authorize_rejects_wrong_role() {
        let err = authorize(Some(Role::Owner), &addr("0xA"), Role::Issuer).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(matches!(
            err,
            LedgerError::Unauthorized {
                required: Role::Issuer,
                actual: Some(Role::Owner),
                ..
            }
        ));
    }

    #[test]
    fn test_authorize_rejects_unregistered() {
        let err = authorize(None, &addr("0xDEAD"), Role::Owner).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Unauthorized { actual: None, .. }
        ));
    }
}
