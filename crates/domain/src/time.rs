//! Timestamps and the clock used to stamp new records.

use chrono::{DateTime, Utc};

/// UTC timestamp, serialized as an RFC 3339 string.
pub type Timestamp = DateTime<Utc>;

/// Source of "now" injected into services that stamp records.
pub type Clock = fn() -> Timestamp;

/// Wall clock; the default [`Clock`].
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
