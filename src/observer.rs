//! # Observer Fix Acquisition
//!
//! The engine trusts its coordinates without validation, so domain checks
//! live here at the input boundary. A fix bundles the validated site with
//! the current system clock; when the configured site is rejected the
//! caller falls back to the built-in default site rather than aborting,
//! the same policy a position receiver applies when it has no fix.

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::config::{Config, ObserverConfig};

/// Coordinate validation failures for a configured site.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FixError {
    /// Latitude outside [-90, 90] degrees
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180] degrees
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A validated position and timestamp, ready to feed the engine.
#[derive(Debug, Clone)]
pub struct ObserverFix {
    /// Site name carried through to the report header
    pub site: String,
    /// Latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
    /// The instant the fix was taken
    pub time: DateTime<Local>,
}

/// Build a fix from the configured site and the system clock.
pub fn current_fix(config: &Config) -> Result<ObserverFix, FixError> {
    fix_at(&config.observer, Local::now())
}

/// Build a fix for an arbitrary instant. Split out so tests can pin the
/// clock.
pub fn fix_at(observer: &ObserverConfig, time: DateTime<Local>) -> Result<ObserverFix, FixError> {
    if !(-90.0..=90.0).contains(&observer.latitude) {
        return Err(FixError::LatitudeOutOfRange(observer.latitude));
    }
    if !(-180.0..=180.0).contains(&observer.longitude) {
        return Err(FixError::LongitudeOutOfRange(observer.longitude));
    }

    Ok(ObserverFix {
        site: observer.name.clone(),
        latitude: observer.latitude,
        longitude: observer.longitude,
        time,
    })
}

/// The built-in default site with the current clock, for when the
/// configured site is rejected.
pub fn default_fix() -> ObserverFix {
    fix_at(&Config::default().observer, Local::now())
        .expect("default site coordinates should be valid")
}
