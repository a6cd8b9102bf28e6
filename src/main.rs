//! # Sky Tracker Application Entry Point
//!
//! This binary wires the pure ephemeris engine to its surroundings: it
//! loads the observer site from configuration, stamps the current clock,
//! computes one almanac, and renders it to the terminal (or as JSON with
//! `--json`). Periodic re-runs are the job of an external scheduler such
//! as a systemd timer; the program itself has no notion of intervals.

// Test modules
#[cfg(test)]
mod tests;

// Re-export library types for internal use
pub use sky_clock_lib::{config::Config, SkyReport};

// Application dependencies
use sky_clock_lib::{observer, renderer};
use std::env;

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    // JSON mode: emit the raw bundle for scripting instead of the panel
    let json_mode = env::args().any(|arg| arg == "--json");

    let config = Config::load();

    // Acquire the observer fix with automatic fallback on rejection.
    // An out-of-range site in the config file must not take the almanac
    // down.
    let fix = observer::current_fix(&config).unwrap_or_else(|error| {
        eprintln!("Configured site rejected: {}", error);
        eprintln!("Falling back to the built-in default site");
        observer::default_fix()
    });

    // One fresh, independent computation per run
    let report = SkyReport::compute(fix.latitude, fix.longitude, &fix.time);

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    renderer::draw_ascii(&report, &fix, &config);
    Ok(())
}
