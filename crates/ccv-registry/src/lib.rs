//! # ccv-registry — Childcare Provider Registry
//!
//! In-memory model of a single registry contract: providers register
//! themselves, the admin authorizes verifiers, and verifiers record
//! background checks and verification decisions.
//!
//! ## Components
//!
//! - **Registry** (`registry.rs`): owns all state and exposes the five
//!   guarded mutations and the read accessors. Every mutation takes the
//!   acting principal as its last argument.
//!
//! - **Provider** (`provider.rs`): one record per registered principal.
//!
//! - **ContractResponse** (`response.rs`): the serialized
//!   `{"value": …}` / `{"error": <code>}` view of a call result.
//!
//! - **RegistryConfig** (`config.rs`): admin identity, loaded from YAML or
//!   JSON.
//!
//! - **SharedRegistry** (`shared.rs`): cloneable handle that serializes
//!   concurrent callers behind a mutex.
//!
//! ## Design
//!
//! State is an explicit value. Tests and hosts construct as many isolated
//! registries as they need; there is no global instance.

pub mod config;
pub mod provider;
pub mod registry;
pub mod response;
pub mod shared;

pub use config::{ConfigError, RegistryConfig};
pub use provider::Provider;
pub use registry::Registry;
pub use response::ContractResponse;
pub use shared::SharedRegistry;

pub use ccv_core::{
    ErrorCode, Principal, ProviderId, RegistryError, Timestamp, UnknownStatusCode,
    VerificationStatus,
};
