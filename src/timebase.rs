//! # Time Base
//!
//! Converts an absolute timestamp into the two time arguments the rest of
//! the engine runs on: a fractional Julian Day (UTC-based) and the civil
//! hour of day as seen by the caller's clock.
//!
//! Both conversions are total functions with no failure modes.

use chrono::{DateTime, TimeZone, Timelike};

/// Julian Day of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 UTC), the zero point
/// of all orbital-element polynomials in this crate.
pub const J2000_JD: f64 = 2_451_545.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert Unix seconds to a fractional Julian Day.
pub fn julian_day(unix_seconds: i64) -> f64 {
    unix_seconds as f64 / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Days elapsed since J2000.0, the time argument of the solar and lunar
/// mean-element series.
pub fn days_since_j2000(julian_day: f64) -> f64 {
    julian_day - J2000_JD
}

/// Fractional hour of day in [0, 24), taken from the civil wall-clock
/// components of `when`. Whatever timezone rules the caller baked into the
/// `DateTime` are the ones that apply; the engine adds no offset of its own.
pub fn local_hour<Tz: TimeZone>(when: &DateTime<Tz>) -> f64 {
    f64::from(when.hour())
        + f64::from(when.minute()) / 60.0
        + f64::from(when.second()) / 3600.0
}
