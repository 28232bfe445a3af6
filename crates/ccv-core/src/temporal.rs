//! # Temporal Types — Epoch-Second Timestamps
//!
//! Registration and background-check dates are integer Unix timestamps in
//! seconds. `Timestamp` wraps that integer so it is not confused with a
//! provider id or a counter, and serializes as the bare integer.
//!
//! The value `0` means "never set" and is the initial background-check date
//! of every provider record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unix epoch timestamp, seconds precision.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The "never set" timestamp.
    pub const UNSET: Timestamp = Timestamp(0);

    /// Current UTC time, truncated to whole seconds.
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    /// Wrap a Unix timestamp in seconds.
    pub fn from_epoch_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Convert a `chrono::DateTime<Utc>`, discarding sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0
    }

    /// Whether this is [`Timestamp::UNSET`].
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    ///
    /// Returns `None` when the value is outside chrono's representable range.
    pub fn to_iso8601(&self) -> Option<String> {
        DateTime::from_timestamp(self.0, 0).map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_iso8601() {
            Some(iso) => f.write_str(&iso),
            None => write!(f, "{}s", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unset_is_zero() {
        assert_eq!(Timestamp::UNSET.epoch_secs(), 0);
        assert!(Timestamp::UNSET.is_unset());
        assert_eq!(Timestamp::default(), Timestamp::UNSET);
    }

    #[test]
    fn test_now_is_set_and_recent() {
        let before = Utc::now().timestamp();
        let ts = Timestamp::now();
        let after = Utc::now().timestamp();
        assert!(!ts.is_unset());
        assert!(before <= ts.epoch_secs() && ts.epoch_secs() <= after);
    }

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap();
        let ts = Timestamp::from_utc(dt + chrono::Duration::milliseconds(750));
        assert_eq!(ts.to_iso8601().as_deref(), Some("2026-01-15T12:30:45Z"));
    }

    #[test]
    fn test_display_matches_iso8601() {
        let ts = Timestamp::from_epoch_secs(0);
        assert_eq!(ts.to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_display_out_of_range_falls_back_to_seconds() {
        let ts = Timestamp::from_epoch_secs(i64::MAX);
        assert_eq!(ts.to_iso8601(), None);
        assert_eq!(ts.to_string(), format!("{}s", i64::MAX));
    }

    #[test]
    fn test_ordering() {
        assert!(Timestamp::from(1_700_000_000) < Timestamp::from(1_700_000_001));
    }

    #[test]
    fn test_serializes_as_integer() {
        let ts = Timestamp::from_epoch_secs(1_736_942_400);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1736942400");
        let parsed: Timestamp = serde_json::from_str("1736942400").unwrap();
        assert_eq!(parsed, ts);
    }
}
