//! Low-precision solar model (NOAA sunrise/sunset series)
//!
//! Declination and equation of time come from the NOAA spreadsheet
//! formulas over days since J2000; rise and set come from the horizon
//! hour angle at the standard 90.833° depression (refraction plus the
//! apparent solar radius). Accuracy: a couple of minutes for event
//! times, a fraction of a degree for position.
//!
//! "Local time" throughout is mean solar time (UTC shifted by
//! longitude/15), not the civil timezone of the site. The rise/set
//! pipeline keeps the explicit to-UTC-and-back two-step so that
//! approximation stays visible.

use std::f64::consts::PI;

use crate::timebase::days_since_j2000;

/// Mean obliquity of the ecliptic, degrees. Fixed epoch value; nutation
/// and precession drift are below this model's precision.
pub(crate) const OBLIQUITY_DEG: f64 = 23.439;

/// Horizon depression for sunrise/sunset, degrees.
const SUN_HORIZON_DEG: f64 = 90.833;

/// Altitude and azimuth of a body, in degrees. Altitude is measured above
/// the local horizon (negative below), azimuth clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    pub altitude: f64,
    pub azimuth: f64,
}

/// Solar declination in degrees for a fractional Julian Day.
pub fn declination(julian_day: f64) -> f64 {
    let n = days_since_j2000(julian_day);
    let l = (280.460 + 0.9856474 * n).rem_euclid(360.0);
    let g = (357.528 + 0.9856003 * n).rem_euclid(360.0).to_radians();
    let lambda = (l + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).to_radians();

    let epsilon = OBLIQUITY_DEG.to_radians();
    (epsilon.sin() * lambda.sin()).asin().to_degrees()
}

/// Equation of time in minutes: the offset between mean and true solar
/// time from orbital eccentricity and axial tilt.
pub fn equation_of_time(julian_day: f64) -> f64 {
    let n = days_since_j2000(julian_day);
    let l = (280.460 + 0.9856474 * n).rem_euclid(360.0).to_radians();
    let g = (357.528 + 0.9856003 * n).rem_euclid(360.0).to_radians();

    let y = (OBLIQUITY_DEG / 2.0).to_radians().tan().powi(2);
    let e = 0.016708634 - n * 0.000000042037;

    let series = y * (2.0 * l).sin() - 2.0 * e * g.sin()
        + 4.0 * e * y * g.sin() * (2.0 * l).cos()
        - 0.5 * y * y * (4.0 * l).sin()
        - 1.25 * e * e * (2.0 * g).sin();

    (4.0 * series).to_degrees()
}

/// Hour angle between the local meridian and the sun at the horizon
/// crossing, degrees. `None` when the sun never crosses the horizon that
/// day (polar day or polar night).
pub fn horizon_hour_angle(latitude: f64, declination_deg: f64) -> Option<f64> {
    let lat = latitude.to_radians();
    let dec = declination_deg.to_radians();

    let arg = SUN_HORIZON_DEG.to_radians().cos() / (lat.cos() * dec.cos()) - lat.tan() * dec.tan();
    if !(-1.0..=1.0).contains(&arg) {
        return None;
    }

    Some(arg.acos().to_degrees())
}

/// Sunrise in fractional local hours, or `None` on a circumpolar day.
pub fn sunrise(julian_day: f64, latitude: f64, longitude: f64) -> Option<f64> {
    rise_or_set(julian_day, latitude, longitude, -1.0)
}

/// Sunset in fractional local hours, or `None` on a circumpolar day.
pub fn sunset(julian_day: f64, latitude: f64, longitude: f64) -> Option<f64> {
    rise_or_set(julian_day, latitude, longitude, 1.0)
}

fn rise_or_set(julian_day: f64, latitude: f64, longitude: f64, sign: f64) -> Option<f64> {
    let hour_angle = horizon_hour_angle(latitude, declination(julian_day))?;

    let utc = 12.0 + sign * hour_angle / 15.0 - longitude / 15.0
        + equation_of_time(julian_day) / 60.0;

    // Longitude-derived local time, not the site's civil timezone.
    let local = utc + longitude / 15.0;
    Some(local.rem_euclid(24.0))
}

/// Sun altitude and azimuth at an arbitrary fractional local hour.
pub fn position(julian_day: f64, hour: f64, latitude: f64, longitude: f64) -> HorizontalPosition {
    let dec = declination(julian_day).to_radians();
    let eq_minutes = equation_of_time(julian_day);

    let true_solar_minutes = hour * 60.0 + eq_minutes + 4.0 * longitude;
    let hour_angle = true_solar_minutes / 4.0 - 180.0;

    let lat = latitude.to_radians();
    let ha = hour_angle.to_radians();

    let elevation = (lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos()).asin();

    // The acos ratio degenerates near the poles and at the zenith/nadir;
    // fall back to the conventional meridian bearing there.
    let az_denom = lat.cos() * elevation.sin();
    let azimuth = if az_denom.abs() > 0.001 {
        let ratio = ((lat.sin() * elevation.cos() - dec.sin()) / az_denom).clamp(-1.0, 1.0);
        let az = ratio.acos();
        if hour_angle > 0.0 {
            2.0 * PI - az
        } else {
            az
        }
    } else if latitude > 0.0 {
        PI
    } else {
        0.0
    };

    HorizontalPosition {
        altitude: elevation.to_degrees(),
        azimuth: azimuth.to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timebase::julian_day;

    // 2026-01-01 12:00 UTC and 2026-06-21 12:00 UTC
    const JD_MIDWINTER: f64 = 2_461_042.0;
    const JD_MIDSUMMER: f64 = 2_461_213.0;

    #[test]
    fn declination_tracks_the_seasons() {
        assert!(declination(JD_MIDWINTER) < -22.9);
        assert!(declination(JD_MIDWINTER) > -23.5);
        assert!(declination(JD_MIDSUMMER) > 23.3);
        assert!(declination(JD_MIDSUMMER) < 23.5);

        // 2026-03-20, near the equinox
        let jd_equinox = julian_day(1_774_008_000);
        assert!(declination(jd_equinox).abs() < 1.0);
    }

    #[test]
    fn equation_of_time_stays_in_the_analemma_range() {
        for day in 0..366 {
            let eq = equation_of_time(JD_MIDWINTER + f64::from(day));
            assert!(
                eq.abs() < 17.5,
                "equation of time {} min out of range on day {}",
                eq,
                day
            );
        }

        // Early January the sundial runs a few minutes behind the clock.
        let eq = equation_of_time(JD_MIDWINTER);
        assert!((-5.0..-2.5).contains(&eq), "got {eq}");
    }

    #[test]
    fn horizon_hour_angle_detects_polar_days() {
        // Mid-latitude midwinter: sun rises roughly 70° from the meridian.
        let ha = horizon_hour_angle(40.7128, declination(JD_MIDWINTER)).unwrap();
        assert!((ha - 69.9).abs() < 0.5, "got {ha}");

        // 78°N: no sunrise in midwinter, no sunset in midsummer.
        assert!(horizon_hour_angle(78.0, declination(JD_MIDWINTER)).is_none());
        assert!(horizon_hour_angle(78.0, declination(JD_MIDSUMMER)).is_none());
    }

    #[test]
    fn rise_and_set_bracket_local_noon() {
        let rise = sunrise(JD_MIDWINTER, 40.7128, -74.0060).unwrap();
        let set = sunset(JD_MIDWINTER, 40.7128, -74.0060).unwrap();

        assert!(rise < 12.0 && set > 12.0);
        assert!((0.0..24.0).contains(&rise));
        assert!((0.0..24.0).contains(&set));

        // Day length about 9.3 hours in New York at midwinter.
        let daylight = set - rise;
        assert!((9.2..9.45).contains(&daylight), "got {daylight}");
    }

    #[test]
    fn circumpolar_day_has_no_events() {
        assert!(sunrise(JD_MIDWINTER, 78.0, 15.0).is_none());
        assert!(sunset(JD_MIDWINTER, 78.0, 15.0).is_none());
    }

    #[test]
    fn azimuth_falls_back_to_meridian_near_the_pole() {
        let near_pole = position(JD_MIDWINTER, 12.0, 89.99, 0.0);
        assert_eq!(near_pole.azimuth, 180.0);

        let near_south_pole = position(JD_MIDWINTER, 12.0, -89.99, 0.0);
        assert_eq!(near_south_pole.azimuth, 0.0);
    }

    #[test]
    fn position_angles_are_in_domain() {
        for hour in [0.0, 3.0, 7.5, 12.0, 16.25, 21.0, 23.5] {
            let p = position(JD_MIDWINTER, hour, 40.7128, -74.0060);
            assert!((-90.0..=90.0).contains(&p.altitude));
            assert!((0.0..=360.0).contains(&p.azimuth));
        }
    }
}
