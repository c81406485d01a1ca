//! Time and timestamp helpers.
//!
//! Elapsed spans are measured in whole units, truncated toward zero. A
//! reference point lying in the future (clock skew between writers) counts
//! as zero elapsed time rather than a negative span.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `last_fed`, `last_played`, event times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Whole minutes elapsed between `since` and `now`.
#[must_use]
pub fn minutes_since(since: Timestamp, now: Timestamp) -> i64 {
    (now - since).num_minutes().max(0)
}

/// Whole hours elapsed between `since` and `now`.
#[must_use]
pub fn hours_since(since: Timestamp, now: Timestamp) -> i64 {
    (now - since).num_hours().max(0)
}
