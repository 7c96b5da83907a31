// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Time-boxed spot access grant.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// How long a grant stays valid after issuance: 24 hours.
pub const ACCESS_TTL_MS: i64 = 86_400_000;

/// A time-boxed access grant for one spot.
///
/// Issued by the check-in verifier, cached client-side by the access
/// store. Wire shape matches the client store exactly, so `trickId` and
/// `hologramUrl` serialize as explicit nulls rather than being omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SpotAccess {
    pub spot_id: String,
    /// Epoch milliseconds when granted
    pub access_granted_at: i64,
    /// Epoch milliseconds; always `access_granted_at + ACCESS_TTL_MS`
    pub expires_at: i64,
    /// Unlockable trick content identifier
    pub trick_id: Option<String>,
    /// AR asset reference
    pub hologram_url: Option<String>,
}

impl SpotAccess {
    /// Whether the grant is still valid at `now_ms`.
    ///
    /// Validity is strict: a grant observed exactly at `expires_at` is
    /// already expired. Re-derived on every call, never cached.
    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        now_ms < self.expires_at
    }
}
