//! Duration calculator: the single source of truth for "how many minutes
//! between two instants". Both the commit resolver and the reconciliation
//! engine go through it, so a stored duration can always be audited
//! against its timestamps.

use chrono::{DateTime, Local};

/// Tolerance below which a duration discrepancy is floating-point noise:
/// 0.1 seconds, expressed in minutes.
pub const EPSILON_MINUTES: f64 = 1.0 / 600.0;

/// Elapsed time from `start` to `end` in fractional minutes, at
/// millisecond resolution. Pure; validation of the range is the caller's
/// job.
pub fn precise_duration_minutes(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    (end - start).num_milliseconds() as f64 / 60_000.0
}
