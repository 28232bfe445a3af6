//! # Provider Record
//!
//! A provider is created by a successful registration and never deleted.
//! Only the background-check fields and the verification status change
//! afterwards, and only through an authorized verifier.

use serde::{Deserialize, Serialize};

use ccv_core::{Principal, ProviderId, Timestamp, VerificationStatus};

/// A registered childcare provider.
///
/// Serialized field names follow the contract's camelCase record layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Sequential id assigned at registration.
    pub id: ProviderId,
    /// The principal that registered this record.
    pub principal: Principal,
    /// Display name, as supplied by the registrant.
    pub name: String,
    /// Credentials, in the order supplied by the registrant.
    pub credentials: Vec<String>,
    /// Date of the latest background check, [`Timestamp::UNSET`] until recorded.
    pub background_check_date: Timestamp,
    /// Whether the latest background check passed.
    pub background_check_passed: bool,
    /// Current verification status.
    pub verification_status: VerificationStatus,
    /// When the record was created.
    pub registration_date: Timestamp,
}

impl Provider {
    /// A fresh record: no background check, status `Pending`.
    pub(crate) fn new(
        id: ProviderId,
        principal: Principal,
        name: String,
        credentials: Vec<String>,
        registration_date: Timestamp,
    ) -> Self {
        Self {
            id,
            principal,
            name,
            credentials,
            background_check_date: Timestamp::UNSET,
            background_check_passed: false,
            verification_status: VerificationStatus::Pending,
            registration_date,
        }
    }

    /// Whether the status is `Verified`.
    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }
}
