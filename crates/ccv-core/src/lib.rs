//! # ccv-core — Foundational Types for the Childcare Verification Registry
//!
//! Leaf crate of the workspace. It defines the identifier newtypes, the
//! verification status enum, epoch-second timestamps, and the error taxonomy
//! whose integer codes form the stable external contract of the registry.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `Principal` and `ProviderId` are
//!    distinct types. A provider id cannot be passed where a principal is
//!    expected, and neither is a bare string or integer.
//!
//! 2. **Stable codes live next to their types.** `VerificationStatus::code()`
//!    and `RegistryError::code()` are the only places the integers `1..=3`
//!    and `100..=103` are defined.
//!
//! 3. **Seconds-precision timestamps.** `Timestamp` stores Unix epoch
//!    seconds, with `0` meaning "never set".
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ccv-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod status;
pub mod temporal;

pub use error::{ErrorCode, RegistryError, UnknownStatusCode};
pub use identity::{Principal, ProviderId};
pub use status::VerificationStatus;
pub use temporal::Timestamp;
