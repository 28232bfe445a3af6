//! # Verification Status
//!
//! Three-valued verification state of a provider record. There is no
//! transition graph: an authorized verifier may move a record from any
//! status to any other, including back to `Pending`.
//!
//! On the wire the status is its integer code (`1`, `2`, `3`), matching the
//! contract constants `STATUS_PENDING`, `STATUS_VERIFIED`, `STATUS_REJECTED`.

use serde::{Deserialize, Serialize};

use crate::error::UnknownStatusCode;

/// Verification status of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum VerificationStatus {
    /// Registered, not yet reviewed. Initial state of every record.
    #[default]
    Pending,
    /// Reviewed and accepted.
    Verified,
    /// Reviewed and refused.
    Rejected,
}

impl VerificationStatus {
    /// All statuses in code order.
    pub const ALL: [VerificationStatus; 3] = [Self::Pending, Self::Verified, Self::Rejected];

    /// The stable integer code of this status.
    pub fn code(&self) -> u8 {
        match self {
            Self::Pending => 1,
            Self::Verified => 2,
            Self::Rejected => 3,
        }
    }

    /// Decode a stable integer code.
    pub fn from_code(code: u8) -> Result<Self, UnknownStatusCode> {
        match code {
            1 => Ok(Self::Pending),
            2 => Ok(Self::Verified),
            3 => Ok(Self::Rejected),
            other => Err(UnknownStatusCode(other)),
        }
    }
}

impl TryFrom<u8> for VerificationStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<VerificationStatus> for u8 {
    fn from(status: VerificationStatus) -> Self {
        status.code()
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
            Self::Rejected => "REJECTED",
        };
        f.write_str(s)
    }
}
