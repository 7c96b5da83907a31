// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side cache of spot access grants.
//!
//! The store is client-local: the server never persists grants, so losing
//! this cache only forces the user to check in again. It is owned by the
//! client's composition root and passed to whatever needs to gate content
//! on a valid grant; there is no global instance.
//!
//! Expiry is lazy. Validity is re-derived on every query and stale entries
//! are only removed by [`AccessStore::cleanup_expired_access`], which
//! callers run opportunistically (e.g., before a new check-in attempt).
//! There is no background sweep.

use crate::models::SpotAccess;
use crate::time_utils::epoch_ms;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Persisted store shape, one JSON document per client.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreState {
    spot_accesses: HashMap<String, SpotAccess>,
    current_check_in: Option<SpotAccess>,
}

/// Key-value store mapping `spot_id` to its active grant, with one
/// "current check-in" pointer to the most recent grant.
#[derive(Debug, Default)]
pub struct AccessStore {
    state: StoreState,
    path: Option<PathBuf>,
}

impl AccessStore {
    /// Create an in-memory store with no persistence.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a store backed by a JSON file, hydrating any persisted state.
    ///
    /// A missing or unreadable file starts the store empty; the cache is
    /// not safety-critical, so corruption is logged and discarded.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let state = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Discarding corrupt access store");
                    StoreState::default()
                }
            },
            Err(_) => StoreState::default(),
        };

        Self {
            state,
            path: Some(path),
        }
    }

    /// Insert or overwrite the grant for its spot (last-write-wins) and
    /// point the current check-in at it.
    ///
    /// No authenticity check happens here; the trust boundary is the
    /// check-in call that produced the grant.
    pub fn grant_access(&mut self, access: SpotAccess) {
        self.state.current_check_in = Some(access.clone());
        self.state
            .spot_accesses
            .insert(access.spot_id.clone(), access);
        self.persist();
    }

    /// Whether a still-valid grant exists for `spot_id`.
    ///
    /// Pure read: a logically expired entry stays in the map until the
    /// next cleanup.
    pub fn has_valid_access(&self, spot_id: &str) -> bool {
        self.has_valid_access_at(spot_id, epoch_ms())
    }

    /// [`has_valid_access`](Self::has_valid_access) at an explicit time.
    pub fn has_valid_access_at(&self, spot_id: &str, now_ms: i64) -> bool {
        self.state
            .spot_accesses
            .get(spot_id)
            .is_some_and(|access| access.is_valid_at(now_ms))
    }

    /// Remove the grant for `spot_id` unconditionally, clearing the
    /// current check-in pointer if it referenced this spot.
    pub fn revoke_access(&mut self, spot_id: &str) {
        self.state.spot_accesses.remove(spot_id);
        if self
            .state
            .current_check_in
            .as_ref()
            .is_some_and(|c| c.spot_id == spot_id)
        {
            self.state.current_check_in = None;
        }
        self.persist();
    }

    /// Drop every expired entry. Idempotent; the store's only
    /// maintenance operation.
    pub fn cleanup_expired_access(&mut self) {
        self.cleanup_expired_access_at(epoch_ms());
    }

    /// [`cleanup_expired_access`](Self::cleanup_expired_access) at an
    /// explicit time.
    pub fn cleanup_expired_access_at(&mut self, now_ms: i64) {
        self.state
            .spot_accesses
            .retain(|_, access| access.is_valid_at(now_ms));
        if self
            .state
            .current_check_in
            .as_ref()
            .is_some_and(|c| !self.state.spot_accesses.contains_key(&c.spot_id))
        {
            self.state.current_check_in = None;
        }
        self.persist();
    }

    /// The most recent check-in, if it has not been revoked or swept.
    pub fn current_check_in(&self) -> Option<&SpotAccess> {
        self.state.current_check_in.as_ref()
    }

    /// The stored grant for `spot_id`, valid or not.
    pub fn get(&self, spot_id: &str) -> Option<&SpotAccess> {
        self.state.spot_accesses.get(spot_id)
    }

    /// Number of stored grants, including expired ones.
    pub fn len(&self) -> usize {
        self.state.spot_accesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.spot_accesses.is_empty()
    }

    /// Write the store to its backing file, if any. Failures are logged
    /// and ignored; worst case the user re-checks-in after a restart.
    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };

        let result = serde_json::to_string_pretty(&self.state)
            .map_err(anyhow::Error::from)
            .and_then(|json| std::fs::write(path, json).map_err(anyhow::Error::from));

        if let Err(e) = result {
            tracing::warn!(path = %path.display(), error = %e, "Failed to persist access store");
        }
    }
}
