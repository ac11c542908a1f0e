//! UTC instants stamped on offers and approval decisions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A UTC instant, serialized as RFC 3339.
///
/// Engine code never reads the wall clock itself; instants come from the
/// [`Clock`](crate::ports::Clock) port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Instant `secs` seconds after the Unix epoch.
    ///
    /// Values chrono cannot represent collapse to the epoch.
    pub fn from_unix_secs(secs: i64) -> Self {
        Self(DateTime::from_timestamp(secs, 0).unwrap_or_default())
    }

    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Instant shifted by `secs` (negative moves back).
    ///
    /// Saturates at the earliest or latest instant chrono can represent.
    pub fn plus_secs(&self, secs: i64) -> Self {
        let shifted = Duration::try_seconds(secs).and_then(|delta| self.0.checked_add_signed(delta));
        match shifted {
            Some(instant) => Self(instant),
            None if secs < 0 => Self(DateTime::<Utc>::MIN_UTC),
            None => Self(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn is_before(&self, other: &Timestamp) -> bool {
        self < other
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}
