//! # Sky Report
//!
//! The immutable result bundle and the engine entry point. One call to
//! [`SkyReport::compute`] populates every field from a single position and
//! instant; nothing is lazy, nothing mutates afterwards, and recomputing
//! for a different moment means a fresh call.
//!
//! Field conventions follow the wire-facing contract: absent events are
//! the empty string for "HHMM" fields and −1 for minute counts, never a
//! valid zero.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::events::{self, DayEvents, EventCandidates, EventWindow};
use crate::format::{hhmm_or_empty, hours_to_minutes};
use crate::lunar::{self, MoonPhase};
use crate::solar::{self, HorizontalPosition};
use crate::timebase;

/// Altitude/azimuth sentinel pair reported when no rise candidate exists
/// to evaluate a position at.
const NO_POSITION: f64 = -1.0;

/// Solar half of the bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunReport {
    /// Today's sunrise as "HHMM"; empty on a circumpolar day.
    pub rise_hhmm: String,
    /// Today's sunset as "HHMM"; empty on a circumpolar day.
    pub set_hhmm: String,
    /// Minutes since sunrise, or −1 if it has not happened yet.
    pub minutes_since_rise: i32,
    /// Minutes since sunset, or −1 if it has not happened yet.
    pub minutes_since_set: i32,
    /// Minutes until sunset while the sun is still up, else −1.
    pub minutes_until_set: i32,
    /// Minutes until tomorrow's sunrise, populated only once both of
    /// today's events have passed; −1 otherwise.
    pub minutes_until_rise: i32,
    /// Total daylight minutes today; 0 when there is no rise/set pair.
    pub minutes_visible: i32,
    /// Sun altitude at the sunrise instant, degrees; −1.0 when no sunrise
    /// exists today.
    pub altitude_at_rise: f64,
    /// Sun azimuth at the sunrise instant, degrees; −1.0 when no sunrise
    /// exists today.
    pub azimuth_at_rise: f64,
}

/// Lunar half of the bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonReport {
    /// Whether the moon is above the horizon at this instant.
    pub visible: bool,
    /// Nearest past moonrise as "HHMM"; empty when none is known.
    pub last_rise_hhmm: String,
    /// Nearest past moonset as "HHMM"; empty when none is known.
    pub last_set_hhmm: String,
    /// Nearest future moonrise as "HHMM". Deliberately empty while the
    /// moon is already visible, as well as when no candidate exists.
    pub next_rise_hhmm: String,
    /// Nearest future moonset as "HHMM"; empty when none is known.
    pub next_set_hhmm: String,
    pub minutes_since_last_rise: i32,
    pub minutes_since_last_set: i32,
    pub minutes_until_next_rise: i32,
    pub minutes_until_next_set: i32,
    /// Minutes from the last rise to the next set, wrapped into [0, 24 h);
    /// 0 when either endpoint is missing.
    pub minutes_visible: i32,
    /// Moon altitude at whichever rise candidate was used (next, else
    /// last), degrees; −1.0 when neither exists.
    pub altitude_at_rise: f64,
    /// Moon azimuth at the same rise candidate, degrees; −1.0 when neither
    /// exists.
    pub azimuth_at_rise: f64,
    /// Named illumination phase.
    pub phase: MoonPhase,
    /// Raw phase angle in [0°, 360°).
    pub phase_angle: f64,
}

/// Everything the engine computes for one position and instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyReport {
    /// Fractional Julian Day of the computation.
    pub julian_day: f64,
    /// Civil hour of day in [0, 24) the computation was anchored to.
    pub local_hour: f64,
    pub sun: SunReport,
    pub moon: MoonReport,
}

impl SkyReport {
    /// Compute the full bundle.
    ///
    /// `latitude`/`longitude` are trusted as-is: out-of-range values are
    /// not rejected, they simply flow into the trigonometry and tend to
    /// surface as "no event" sentinels. Validation belongs to the input
    /// boundary, not here.
    pub fn compute<Tz: TimeZone>(latitude: f64, longitude: f64, when: &DateTime<Tz>) -> SkyReport {
        let julian_day = timebase::julian_day(when.timestamp());
        let local_hour = timebase::local_hour(when);

        SkyReport {
            julian_day,
            local_hour,
            sun: sun_report(julian_day, local_hour, latitude, longitude),
            moon: moon_report(julian_day, local_hour, latitude, longitude),
        }
    }
}

fn sun_report(julian_day: f64, local_hour: f64, latitude: f64, longitude: f64) -> SunReport {
    let rise = solar::sunrise(julian_day, latitude, longitude);
    let set = solar::sunset(julian_day, latitude, longitude);

    let mut minutes_since_rise = -1;
    let mut minutes_since_set = -1;
    let mut minutes_until_set = -1;
    let mut minutes_until_rise = -1;
    let mut minutes_visible = 0;
    let mut at_rise = HorizontalPosition {
        altitude: NO_POSITION,
        azimuth: NO_POSITION,
    };

    // Rise and set share one hour-angle domain test, so they are present
    // or absent together.
    if let (Some(rise), Some(set)) = (rise, set) {
        let since_rise = local_hour - rise;
        let since_set = local_hour - set;

        if since_rise >= 0.0 {
            minutes_since_rise = hours_to_minutes(since_rise);
        }
        if since_set >= 0.0 {
            minutes_since_set = hours_to_minutes(since_set);
        } else {
            minutes_until_set = hours_to_minutes(-since_set);
        }
        if local_hour > rise && local_hour > set {
            // Tomorrow's rise, approximated as today's shifted a day.
            minutes_until_rise = hours_to_minutes(rise + 24.0 - local_hour);
        }
        if set > rise {
            minutes_visible = hours_to_minutes(set - rise);
        }

        at_rise = solar::position(julian_day, rise, latitude, longitude);
    }

    SunReport {
        rise_hhmm: hhmm_or_empty(rise),
        set_hhmm: hhmm_or_empty(set),
        minutes_since_rise,
        minutes_since_set,
        minutes_until_set,
        minutes_until_rise,
        minutes_visible,
        altitude_at_rise: at_rise.altitude,
        azimuth_at_rise: at_rise.azimuth,
    }
}

fn moon_report(julian_day: f64, local_hour: f64, latitude: f64, longitude: f64) -> MoonReport {
    let candidates: EventCandidates = [-1.0, 0.0, 1.0].map(|offset| DayEvents {
        rise: lunar::moonrise(julian_day + offset, latitude, longitude),
        set: lunar::moonset(julian_day + offset, latitude, longitude),
    });
    let window = EventWindow::resolve(&candidates, local_hour);

    let visible = lunar::horizontal_position(julian_day, local_hour, latitude, longitude).altitude
        > 0.0;

    // Position at the rise that matters: the upcoming one if any, else the
    // one already behind us. Always evaluated against today's lunar
    // position, even for a candidate borrowed from an adjacent day.
    let at_rise = window
        .next_rise
        .or(window.last_rise)
        .map(|hour| lunar::horizontal_position(julian_day, hour, latitude, longitude));

    let phase_angle = lunar::phase_angle(julian_day);

    MoonReport {
        visible,
        last_rise_hhmm: hhmm_or_empty(window.last_rise),
        last_set_hhmm: hhmm_or_empty(window.last_set),
        // Withheld while the moon is already up.
        next_rise_hhmm: if visible {
            String::new()
        } else {
            hhmm_or_empty(window.next_rise)
        },
        next_set_hhmm: hhmm_or_empty(window.next_set),
        minutes_since_last_rise: events::minutes_since(window.last_rise, local_hour),
        minutes_since_last_set: events::minutes_since(window.last_set, local_hour),
        minutes_until_next_rise: events::minutes_until(window.next_rise, local_hour),
        minutes_until_next_set: events::minutes_until(window.next_set, local_hour),
        minutes_visible: events::visible_minutes(window.last_rise, window.next_set),
        altitude_at_rise: at_rise.map_or(NO_POSITION, |p| p.altitude),
        azimuth_at_rise: at_rise.map_or(NO_POSITION, |p| p.azimuth),
        phase: MoonPhase::from_phase_angle(phase_angle),
        phase_angle,
    }
}
