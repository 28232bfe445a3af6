//! # Tagged Call Response
//!
//! Serialized form of a registry call result: `{"value": <payload>}` on
//! success, `{"error": <code>}` on failure. The Rust API returns `Result`;
//! this type exists for callers that record or compare responses as data.

use serde::{Deserialize, Serialize};

use ccv_core::{ErrorCode, RegistryError};

/// Outcome of a registry call in its tagged form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractResponse<T> {
    /// Success payload.
    Value(T),
    /// Stable error code.
    Error(ErrorCode),
}

impl<T> ContractResponse<T> {
    /// Whether this is a success response.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The success payload, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Error(_) => None,
        }
    }

    /// The error code, if any.
    pub fn error(&self) -> Option<ErrorCode> {
        match self {
            Self::Value(_) => None,
            Self::Error(code) => Some(*code),
        }
    }

    /// Convert back into a `Result`, keeping the raw code on failure.
    pub fn into_result(self) -> Result<T, ErrorCode> {
        match self {
            Self::Value(v) => Ok(v),
            Self::Error(code) => Err(code),
        }
    }
}

impl<T> From<Result<T, RegistryError>> for ContractResponse<T> {
    fn from(result: Result<T, RegistryError>) -> Self {
        match result {
            Ok(v) => Self::Value(v),
            Err(e) => Self::Error(e.code()),
        }
    }
}
