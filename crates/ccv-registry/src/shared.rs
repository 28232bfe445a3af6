//! # Shared Registry Handle
//!
//! Cloneable handle for hosts that call the registry from several threads.
//! Each operation holds the mutex for its whole check-then-act sequence, so
//! uniqueness and authorization hold exactly as in the single-threaded case.
//!
//! The lock is `parking_lot::Mutex`: non-poisoning, and never held across a
//! call boundary. Reads return owned clones.

use std::sync::Arc;

use parking_lot::Mutex;

use ccv_core::{Principal, ProviderId, RegistryError, Timestamp, VerificationStatus};

use crate::provider::Provider;
use crate::registry::Registry;

/// Thread-safe handle to a [`Registry`]. Clones share state.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    /// Wrap an existing registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// See [`Registry::register_provider`].
    pub fn register_provider(
        &self,
        name: impl Into<String>,
        credentials: Vec<String>,
        sender: &Principal,
    ) -> Result<ProviderId, RegistryError> {
        self.inner.lock().register_provider(name, credentials, sender)
    }

    /// See [`Registry::add_verifier`].
    pub fn add_verifier(
        &self,
        verifier: Principal,
        sender: &Principal,
    ) -> Result<bool, RegistryError> {
        self.inner.lock().add_verifier(verifier, sender)
    }

    /// See [`Registry::update_background_check`].
    pub fn update_background_check(
        &self,
        id: ProviderId,
        check_date: Timestamp,
        passed: bool,
        sender: &Principal,
    ) -> Result<bool, RegistryError> {
        self.inner
            .lock()
            .update_background_check(id, check_date, passed, sender)
    }

    /// See [`Registry::update_verification_status`].
    pub fn update_verification_status(
        &self,
        id: ProviderId,
        status: VerificationStatus,
        sender: &Principal,
    ) -> Result<bool, RegistryError> {
        self.inner
            .lock()
            .update_verification_status(id, status, sender)
    }

    /// See [`Registry::get_provider`]. Returns a copy of the record.
    pub fn get_provider(&self, id: ProviderId) -> Option<Provider> {
        self.inner.lock().get_provider(id).cloned()
    }

    /// See [`Registry::get_provider_id_by_principal`].
    pub fn get_provider_id_by_principal(&self, principal: &Principal) -> Option<ProviderId> {
        self.inner.lock().get_provider_id_by_principal(principal)
    }

    /// See [`Registry::is_provider_verified`].
    pub fn is_provider_verified(&self, id: ProviderId) -> bool {
        self.inner.lock().is_provider_verified(id)
    }

    /// See [`Registry::is_verifier`].
    pub fn is_verifier(&self, principal: &Principal) -> bool {
        self.inner.lock().is_verifier(principal)
    }

    /// See [`Registry::provider_count`].
    pub fn provider_count(&self) -> u64 {
        self.inner.lock().provider_count()
    }

    /// See [`Registry::reset`].
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// A point-in-time copy of the whole registry.
    pub fn snapshot(&self) -> Registry {
        self.inner.lock().clone()
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: &str = "ADMIN";

    #[test]
    fn test_clones_share_state() {
        let a = SharedRegistry::new(Registry::new(ADMIN));
        let b = a.clone();
        let id = a
            .register_provider("Little Steps", Vec::new(), &Principal::new("P1"))
            .unwrap();
        assert_eq!(b.get_provider(id).map(|r| r.name), Some("Little Steps".to_string()));
        assert_eq!(b.get_provider_id_by_principal(&Principal::new("P1")), Some(id));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedRegistry::new(Registry::new(ADMIN));
        let snap = shared.snapshot();
        shared
            .register_provider("Little Steps", Vec::new(), &Principal::new("P1"))
            .unwrap();
        assert_eq!(snap.provider_count(), 0);
        assert_eq!(shared.provider_count(), 1);
    }

    #[test]
    fn test_concurrent_registrations_get_distinct_ids() {
        let shared = SharedRegistry::new(Registry::new(ADMIN));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let reg = shared.clone();
                std::thread::spawn(move || {
                    (0..25)
                        .map(|n| {
                            reg.register_provider(
                                "Center",
                                Vec::new(),
                                &Principal::new(format!("T{t}-P{n}")),
                            )
                            .unwrap()
                            .get()
                        })
                        .collect::<Vec<u64>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=200).collect::<Vec<u64>>());
        assert_eq!(shared.provider_count(), 200);
    }

    #[test]
    fn test_concurrent_duplicate_registration_single_winner() {
        let shared = SharedRegistry::new(Registry::new(ADMIN));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = shared.clone();
                std::thread::spawn(move || {
                    reg.register_provider("Same", Vec::new(), &Principal::new("P1"))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| *e == RegistryError::AlreadyRegistered));
        assert_eq!(shared.provider_count(), 1);
    }

    #[test]
    fn test_verifier_flow_through_handle() {
        let shared = SharedRegistry::from(Registry::new(ADMIN));
        let id = shared
            .register_provider("Little Steps", Vec::new(), &Principal::new("P1"))
            .unwrap();
        shared
            .add_verifier(Principal::new("V1"), &Principal::new(ADMIN))
            .unwrap();
        assert!(shared.is_verifier(&Principal::new("V1")));
        shared
            .update_background_check(id, Timestamp::from_epoch_secs(10), true, &Principal::new("V1"))
            .unwrap();
        shared
            .update_verification_status(id, VerificationStatus::Verified, &Principal::new("V1"))
            .unwrap();
        assert!(shared.is_provider_verified(id));

        shared.reset();
        assert!(!shared.is_provider_verified(id));
        assert!(!shared.is_verifier(&Principal::new("V1")));
    }
}
