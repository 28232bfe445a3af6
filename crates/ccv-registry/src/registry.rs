//! # Provider Registry
//!
//! Holds every provider record, the principal → id index, and the set of
//! authorized verifiers, and applies the guarded mutations over them.
//!
//! ## Operations
//!
//! | Operation | Required role | Errors |
//! |-----------|---------------|--------|
//! | `register_provider` | none | `AlreadyRegistered` |
//! | `add_verifier` | admin | `Unauthorized` |
//! | `update_background_check` | verifier | `Unauthorized`, then `NotFound` |
//! | `update_verification_status` | verifier | `Unauthorized`, then `NotFound` |
//!
//! Authorization is always checked before existence, so a caller without
//! the verifier role learns nothing about which ids exist.
//!
//! ## Invariants
//!
//! - Every id in the principal index resolves to a record with the same
//!   principal.
//! - `provider_count` is the highest id ever issued. Ids are never reused.
//! - A principal owns at most one record for the lifetime of the registry.
//! - A rejected call leaves the registry unchanged.

use std::collections::{BTreeMap, HashMap, HashSet};

use ccv_core::{Principal, ProviderId, RegistryError, Timestamp, VerificationStatus};

use crate::config::RegistryConfig;
use crate::provider::Provider;

/// In-memory registry state.
#[derive(Debug, Clone)]
pub struct Registry {
    admin: Principal,
    provider_count: u64,
    providers: BTreeMap<ProviderId, Provider>,
    principal_to_provider: HashMap<Principal, ProviderId>,
    authorized_verifiers: HashSet<Principal>,
}

impl Registry {
    /// Create an empty registry administered by `admin`.
    pub fn new(admin: impl Into<Principal>) -> Self {
        Self {
            admin: admin.into(),
            provider_count: 0,
            providers: BTreeMap::new(),
            principal_to_provider: HashMap::new(),
            authorized_verifiers: HashSet::new(),
        }
    }

    /// Create an empty registry from a validated configuration.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(config.admin.clone())
    }

    // ─── Mutations ───────────────────────────────────────────────────

    /// Register `sender` as a provider and return the new id.
    ///
    /// Name and credentials are stored as given. The record starts
    /// `Pending` with no background check, and its registration date is
    /// the current time.
    pub fn register_provider(
        &mut self,
        name: impl Into<String>,
        credentials: Vec<String>,
        sender: &Principal,
    ) -> Result<ProviderId, RegistryError> {
        if let Some(existing) = self.principal_to_provider.get(sender) {
            tracing::warn!(
                principal = %sender,
                existing = %existing,
                code = RegistryError::ALREADY_REGISTERED,
                "registration rejected: principal already registered"
            );
            return Err(RegistryError::AlreadyRegistered);
        }

        let id = ProviderId(self.provider_count).next();
        let provider = Provider::new(
            id,
            sender.clone(),
            name.into(),
            credentials,
            Timestamp::now(),
        );
        self.providers.insert(id, provider);
        self.principal_to_provider.insert(sender.clone(), id);
        self.provider_count = id.get();

        tracing::info!(provider_id = %id, principal = %sender, "provider registered");
        Ok(id)
    }

    /// Authorize `verifier` to record background checks and statuses.
    ///
    /// Only the admin may call this. Adding an existing verifier again
    /// succeeds without further effect. Returns `Ok(true)` on success.
    pub fn add_verifier(
        &mut self,
        verifier: Principal,
        sender: &Principal,
    ) -> Result<bool, RegistryError> {
        if *sender != self.admin {
            tracing::warn!(
                sender = %sender,
                code = RegistryError::UNAUTHORIZED,
                "add_verifier rejected: sender is not admin"
            );
            return Err(RegistryError::Unauthorized);
        }

        tracing::info!(verifier = %verifier, "verifier authorized");
        self.authorized_verifiers.insert(verifier);
        Ok(true)
    }

    /// Record the outcome of a background check on provider `id`.
    ///
    /// Overwrites the check date and result; every other field is kept.
    pub fn update_background_check(
        &mut self,
        id: ProviderId,
        check_date: Timestamp,
        passed: bool,
        sender: &Principal,
    ) -> Result<bool, RegistryError> {
        let provider = self.verifier_target(id, sender, "update_background_check")?;
        provider.background_check_date = check_date;
        provider.background_check_passed = passed;

        tracing::info!(
            provider_id = %id,
            verifier = %sender,
            check_date = check_date.epoch_secs(),
            passed,
            "background check updated"
        );
        Ok(true)
    }

    /// Set the verification status of provider `id`.
    ///
    /// Any status may follow any other, including a return to `Pending`.
    pub fn update_verification_status(
        &mut self,
        id: ProviderId,
        status: VerificationStatus,
        sender: &Principal,
    ) -> Result<bool, RegistryError> {
        let provider = self.verifier_target(id, sender, "update_verification_status")?;
        let previous = provider.verification_status;
        provider.verification_status = status;

        tracing::info!(
            provider_id = %id,
            verifier = %sender,
            from = %previous,
            to = %status,
            "verification status updated"
        );
        Ok(true)
    }

    /// Clear all providers, verifiers, and the id counter. The admin is kept.
    pub fn reset(&mut self) {
        self.provider_count = 0;
        self.providers.clear();
        self.principal_to_provider.clear();
        self.authorized_verifiers.clear();
        tracing::debug!(admin = %self.admin, "registry reset");
    }

    // ─── Reads ───────────────────────────────────────────────────────

    /// Look up a provider record.
    pub fn get_provider(&self, id: ProviderId) -> Option<&Provider> {
        self.providers.get(&id)
    }

    /// Look up the provider id owned by `principal`.
    pub fn get_provider_id_by_principal(&self, principal: &Principal) -> Option<ProviderId> {
        self.principal_to_provider.get(principal).copied()
    }

    /// Whether provider `id` exists and is `Verified`.
    ///
    /// An unknown id and an unverified provider both yield `false`.
    pub fn is_provider_verified(&self, id: ProviderId) -> bool {
        self.providers
            .get(&id)
            .map(Provider::is_verified)
            .unwrap_or(false)
    }

    /// Whether `principal` is an authorized verifier.
    pub fn is_verifier(&self, principal: &Principal) -> bool {
        self.authorized_verifiers.contains(principal)
    }

    /// The highest provider id issued so far (0 when none).
    pub fn provider_count(&self) -> u64 {
        self.provider_count
    }

    /// The fixed admin principal.
    pub fn admin(&self) -> &Principal {
        &self.admin
    }

    /// All provider records in ascending id order.
    pub fn providers(&self) -> impl Iterator<Item = &Provider> {
        self.providers.values()
    }

    // ─── Guards ──────────────────────────────────────────────────────

    /// Check the verifier role, then resolve `id` for mutation.
    fn verifier_target(
        &mut self,
        id: ProviderId,
        sender: &Principal,
        operation: &'static str,
    ) -> Result<&mut Provider, RegistryError> {
        if !self.authorized_verifiers.contains(sender) {
            tracing::warn!(
                operation,
                sender = %sender,
                code = RegistryError::UNAUTHORIZED,
                "rejected: sender is not an authorized verifier"
            );
            return Err(RegistryError::Unauthorized);
        }
        match self.providers.get_mut(&id) {
            Some(provider) => Ok(provider),
            None => {
                tracing::warn!(
                    operation,
                    provider_id = %id,
                    code = RegistryError::NOT_FOUND,
                    "rejected: provider not found"
                );
                Err(RegistryError::NotFound)
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
