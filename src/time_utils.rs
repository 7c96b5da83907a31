// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for timestamps and date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time as epoch milliseconds.
pub fn epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format an epoch-milliseconds timestamp as RFC3339 with a `Z` suffix.
///
/// Falls back to the raw number if the timestamp is out of chrono's
/// representable range (never the case for real grants).
pub fn format_epoch_ms_rfc3339(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => ms.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_epoch_ms_rfc3339() {
        // 2024-01-01T10:00:00Z
        assert_eq!(
            format_epoch_ms_rfc3339(1_704_103_200_000),
            "2024-01-01T10:00:00Z"
        );
    }
}
