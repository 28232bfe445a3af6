//! # Error Types — Stable Error-Code Taxonomy
//!
//! Every registry failure is an expected, recoverable condition carried on
//! the `Err` side of a `Result`. Each variant maps to a fixed integer code
//! that callers may persist or compare against; the codes never change.
//!
//! | Code | Variant | Raised by |
//! |------|---------|-----------|
//! | 100 | `Unauthorized` | `add_verifier`, `update_background_check`, `update_verification_status` |
//! | 101 | `InvalidParams` | reserved, never raised |
//! | 102 | `AlreadyRegistered` | `register_provider` |
//! | 103 | `NotFound` | `update_background_check`, `update_verification_status` |

use thiserror::Error;

/// Integer error code as exposed on the call contract.
pub type ErrorCode = u32;

/// Failure of a registry operation.
///
/// A call that returns one of these performed no writes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryError {
    /// The acting principal lacks the required role.
    #[error("caller is not authorized for this operation (code 100)")]
    Unauthorized,

    /// Reserved for input validation. Kept so the code stays allocated.
    #[error("invalid parameters (code 101)")]
    InvalidParams,

    /// The acting principal already owns a provider record.
    #[error("principal already owns a provider record (code 102)")]
    AlreadyRegistered,

    /// The referenced provider id does not exist.
    #[error("provider not found (code 103)")]
    NotFound,
}

impl RegistryError {
    /// Code for [`RegistryError::Unauthorized`].
    pub const UNAUTHORIZED: ErrorCode = 100;
    /// Code for [`RegistryError::InvalidParams`].
    pub const INVALID_PARAMS: ErrorCode = 101;
    /// Code for [`RegistryError::AlreadyRegistered`].
    pub const ALREADY_REGISTERED: ErrorCode = 102;
    /// Code for [`RegistryError::NotFound`].
    pub const NOT_FOUND: ErrorCode = 103;

    /// The stable integer code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Unauthorized => Self::UNAUTHORIZED,
            Self::InvalidParams => Self::INVALID_PARAMS,
            Self::AlreadyRegistered => Self::ALREADY_REGISTERED,
            Self::NotFound => Self::NOT_FOUND,
        }
    }

    /// Map a stable code back to its variant, if it is one of ours.
    pub fn from_code(code: ErrorCode) -> Option<Self> {
        match code {
            Self::UNAUTHORIZED => Some(Self::Unauthorized),
            Self::INVALID_PARAMS => Some(Self::InvalidParams),
            Self::ALREADY_REGISTERED => Some(Self::AlreadyRegistered),
            Self::NOT_FOUND => Some(Self::NotFound),
            _ => None,
        }
    }
}

/// A raw status code that is not one of `1`, `2`, `3`.
///
/// Produced only when decoding integers into
/// [`VerificationStatus`](crate::VerificationStatus); registry operations
/// never return it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown verification status code {0}")]
pub struct UnknownStatusCode(pub u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(RegistryError::Unauthorized.code(), 100);
        assert_eq!(RegistryError::InvalidParams.code(), 101);
        assert_eq!(RegistryError::AlreadyRegistered.code(), 102);
        assert_eq!(RegistryError::NotFound.code(), 103);
    }

    #[test]
    fn test_from_code_matches_code() {
        for err in [
            RegistryError::Unauthorized,
            RegistryError::InvalidParams,
            RegistryError::AlreadyRegistered,
            RegistryError::NotFound,
        ] {
            assert_eq!(RegistryError::from_code(err.code()), Some(err));
        }
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(RegistryError::from_code(0), None);
        assert_eq!(RegistryError::from_code(99), None);
        assert_eq!(RegistryError::from_code(104), None);
    }

    #[test]
    fn test_display_includes_code() {
        assert!(RegistryError::Unauthorized.to_string().contains("100"));
        assert!(RegistryError::AlreadyRegistered.to_string().contains("102"));
        assert!(RegistryError::NotFound.to_string().contains("103"));
    }

    #[test]
    fn test_unknown_status_display() {
        assert_eq!(
            UnknownStatusCode(7).to_string(),
            "unknown verification status code 7"
        );
    }
}
