//! Low-precision lunar ephemeris (single-term mean orbit)
//!
//! Mean longitude, anomaly and argument of latitude are linear in days
//! since J2000, perturbed by one leading periodic term each, then
//! converted to RA/Dec with a fixed obliquity. Accuracy is arc-minute to
//! degree level: enough to time rise and set to a few minutes and to
//! bucket the illumination phase, nowhere near professional ephemerides.
//!
//! Rise and set use the same horizon hour-angle construction as the sun,
//! with a 90.567° depression (refraction plus the moon's mean parallax
//! and radius; no solar-radius term).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::normalize_angle;
use crate::solar::{HorizontalPosition, OBLIQUITY_DEG};
use crate::timebase::days_since_j2000;

/// Horizon depression for moonrise/moonset, degrees.
const MOON_HORIZON_DEG: f64 = 90.567;

/// Geocentric equatorial coordinates of the moon, degrees.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialPosition {
    /// Right ascension in [0°, 360°).
    pub right_ascension: f64,
    /// Declination, north positive.
    pub declination: f64,
}

/// Mean-orbit position of the moon for a fractional Julian Day.
pub fn position(julian_day: f64) -> EquatorialPosition {
    let n = days_since_j2000(julian_day);
    let l = (218.316 + 13.176396 * n).rem_euclid(360.0);
    let m = (134.963 + 13.064993 * n).rem_euclid(360.0).to_radians();
    let f = (93.272 + 13.229350 * n).rem_euclid(360.0).to_radians();

    // One leading periodic term per element.
    let lon = (l + 6.289 * m.sin()).to_radians();
    let lat = (5.128 * f.sin()).to_radians();

    let eps = OBLIQUITY_DEG.to_radians();
    let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin())
        .atan2(lon.cos())
        .to_degrees();
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin())
        .asin()
        .to_degrees();

    EquatorialPosition {
        right_ascension: ra.rem_euclid(360.0),
        declination: dec,
    }
}

/// Phase angle in [0°, 360°): 180° − mean elongation, with the two leading
/// anomaly corrections.
pub fn phase_angle(julian_day: f64) -> f64 {
    let n = days_since_j2000(julian_day);
    let m = (134.963 + 13.064993 * n).rem_euclid(360.0).to_radians();
    let m_sun = (357.529 + 0.98560028 * n).rem_euclid(360.0).to_radians();
    let d = (297.850 + 12.190749 * n).rem_euclid(360.0);

    normalize_angle(180.0 - d - 6.289 * m.sin() + 2.1 * m_sun.sin())
}

/// The eight named phases, bucketed from the phase angle in 45°-wide
/// windows offset by 22.5°; the "New Moon" window straddles 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoonPhase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl MoonPhase {
    /// Bucket a phase angle (any real degrees) into its named phase.
    pub fn from_phase_angle(angle: f64) -> Self {
        let a = normalize_angle(angle);
        if !(22.5..337.5).contains(&a) {
            MoonPhase::NewMoon
        } else if a < 67.5 {
            MoonPhase::WaxingCrescent
        } else if a < 112.5 {
            MoonPhase::FirstQuarter
        } else if a < 157.5 {
            MoonPhase::WaxingGibbous
        } else if a < 202.5 {
            MoonPhase::FullMoon
        } else if a < 247.5 {
            MoonPhase::WaningGibbous
        } else if a < 292.5 {
            MoonPhase::LastQuarter
        } else {
            MoonPhase::WaningCrescent
        }
    }

    /// Human-readable phase name.
    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Moonrise in fractional local hours, or `None` when the moon does not
/// cross the horizon that day.
pub fn moonrise(julian_day: f64, latitude: f64, longitude: f64) -> Option<f64> {
    rise_or_set(julian_day, latitude, longitude, -1.0)
}

/// Moonset in fractional local hours, or `None` when the moon does not
/// cross the horizon that day.
pub fn moonset(julian_day: f64, latitude: f64, longitude: f64) -> Option<f64> {
    rise_or_set(julian_day, latitude, longitude, 1.0)
}

fn rise_or_set(julian_day: f64, latitude: f64, longitude: f64, sign: f64) -> Option<f64> {
    let moon = position(julian_day);

    let lat = latitude.to_radians();
    let dec = moon.declination.to_radians();

    let arg = MOON_HORIZON_DEG.to_radians().cos() / (lat.cos() * dec.cos()) - lat.tan() * dec.tan();
    if !(-1.0..=1.0).contains(&arg) {
        return None;
    }

    let hour_angle = arg.acos().to_degrees();
    let hour = (moon.right_ascension + sign * hour_angle) / 15.0 + longitude / 15.0;
    Some(hour.rem_euclid(24.0))
}

/// Moon altitude and azimuth at an arbitrary fractional local hour.
///
/// Azimuth comes from `atan2`, which is total, so no singularity guard is
/// needed here.
pub fn horizontal_position(
    julian_day: f64,
    hour: f64,
    latitude: f64,
    longitude: f64,
) -> HorizontalPosition {
    let moon = position(julian_day);

    let sidereal_hour = hour + longitude / 15.0;
    let hour_angle = (sidereal_hour * 15.0 - moon.right_ascension).to_radians();

    let lat = latitude.to_radians();
    let dec = moon.declination.to_radians();

    let altitude = (lat.sin() * dec.sin() + lat.cos() * dec.cos() * hour_angle.cos())
        .asin()
        .to_degrees();
    let azimuth = hour_angle
        .sin()
        .atan2(hour_angle.cos() * lat.sin() - dec.tan() * lat.cos())
        .to_degrees();

    HorizontalPosition {
        altitude,
        azimuth: (azimuth + 180.0).rem_euclid(360.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-01-01 12:00 UTC and 2026-01-13 12:00 UTC
    const JD_REFERENCE: f64 = 2_461_042.0;
    const JD_JAN_13: f64 = 2_461_054.0;

    #[test]
    fn position_stays_in_domain() {
        for day in 0..30 {
            let moon = position(JD_REFERENCE + f64::from(day));
            assert!((0.0..360.0).contains(&moon.right_ascension));
            // Orbit inclination plus obliquity bounds declination.
            assert!(moon.declination.abs() < 28.7);
        }
    }

    #[test]
    fn phase_angle_reference_value() {
        let angle = phase_angle(JD_JAN_13);
        assert!((239.0..240.2).contains(&angle), "got {angle}");
        assert_eq!(MoonPhase::from_phase_angle(angle), MoonPhase::WaningGibbous);
    }

    #[test]
    fn phase_buckets_cover_the_circle() {
        let centers = [
            (0.0, MoonPhase::NewMoon),
            (45.0, MoonPhase::WaxingCrescent),
            (90.0, MoonPhase::FirstQuarter),
            (135.0, MoonPhase::WaxingGibbous),
            (180.0, MoonPhase::FullMoon),
            (225.0, MoonPhase::WaningGibbous),
            (270.0, MoonPhase::LastQuarter),
            (315.0, MoonPhase::WaningCrescent),
        ];
        for (angle, expected) in centers {
            assert_eq!(MoonPhase::from_phase_angle(angle), expected, "at {angle}");
        }

        // Window edges: each boundary belongs to the next bucket.
        assert_eq!(MoonPhase::from_phase_angle(22.5), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_phase_angle(337.5), MoonPhase::NewMoon);
        assert_eq!(
            MoonPhase::from_phase_angle(337.499),
            MoonPhase::WaningCrescent
        );
        assert_eq!(MoonPhase::from_phase_angle(359.9), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_phase_angle(-0.1), MoonPhase::NewMoon);
    }

    #[test]
    fn phase_names_are_the_eight_fixed_strings() {
        let mut names: Vec<&str> = (0..8)
            .map(|i| MoonPhase::from_phase_angle(f64::from(i) * 45.0).name())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn rise_and_set_exist_at_mid_latitudes() {
        let rise = moonrise(JD_REFERENCE, 40.7128, -74.0060).unwrap();
        let set = moonset(JD_REFERENCE, 40.7128, -74.0060).unwrap();

        assert!((0.0..24.0).contains(&rise));
        assert!((0.0..24.0).contains(&set));
        // Mid-afternoon rise, morning set for this date.
        assert!((15.9..16.5).contains(&rise), "got {rise}");
        assert!((7.6..8.2).contains(&set), "got {set}");
    }

    #[test]
    fn circumpolar_moon_has_no_events() {
        // Declination near +28° keeps the moon above a 70°N horizon all day.
        assert!(moonrise(JD_REFERENCE, 70.0, 15.0).is_none());
        assert!(moonset(JD_REFERENCE, 70.0, 15.0).is_none());
    }

    #[test]
    fn horizontal_position_stays_in_domain() {
        for hour in [0.0, 4.0, 9.5, 12.0, 18.75, 23.0] {
            let p = horizontal_position(JD_REFERENCE, hour, 40.7128, -74.0060);
            assert!((-90.0..=90.0).contains(&p.altitude));
            assert!((0.0..360.0).contains(&p.azimuth));
        }
    }
}
