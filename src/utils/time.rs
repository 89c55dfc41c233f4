//! Time and timestamp utilities

use std::time::Instant;

use chrono::{DateTime, Timelike, Utc};

/// Seconds elapsed since UTC midnight, with sub-second precision
pub fn seconds_since_midnight(t: &DateTime<Utc>) -> f32 {
    let whole = t.num_seconds_from_midnight() as f32;
    // leap-second nanos can exceed 1e9, clamp so the fraction stays below one
    let nanos = t.nanosecond().min(999_999_999);
    whole + nanos as f32 / 1_000_000_000.0
}

/// Milliseconds elapsed since `start`, saturating at `u64::MAX`
pub fn millis_since(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
