//! # Sky Tracker Core Library
//!
//! This library computes a local sun and moon almanac for a headless
//! single-board computer: rise and set times, positions, daylight and
//! moonlight durations, and the moon's illumination phase, for one
//! observer position and one instant per invocation.
//!
//! ## Design Philosophy
//!
//! ### A pure engine behind a thin shell
//! The ephemeris engine ([`SkyReport::compute`]) is a pure function over
//! `(latitude, longitude, instant)`. It performs no I/O, holds no state,
//! and never fails: geometry that rules an event out (a polar night, a
//! circumpolar moon) surfaces as explicit "no event" values, never as an
//! error. Everything impure (configuration, clock access, validation,
//! rendering) lives at the edges.
//!
//! ### Deterministic, concurrency-safe results
//! Two calls with identical inputs produce identical bundles, and the
//! bundle never mutates after construction. Advancing time means calling
//! the engine again, not editing a result in place. Since no shared state
//! exists, callers may invoke the engine from any number of threads.
//!
//! ### Deliberate approximations
//! The models are low precision on purpose: mean-element series for both
//! bodies, fixed obliquity, fixed horizon-depression constants, and
//! "local time" taken as UTC plus longitude/15 rather than the civil
//! timezone. The point is a dependable almanac on a constrained
//! processor, not an observatory ephemeris.
//!
//! ## Data Flow
//! 1. **Configure**: load the observer site from `sky-config.toml`
//!    ([`config::Config`]), falling back to the built-in default site
//! 2. **Fix**: validate the coordinates and stamp the current clock
//!    ([`observer::current_fix`])
//! 3. **Compute**: build the immutable [`SkyReport`]
//! 4. **Render**: draw the text panel and elevation chart
//!    ([`renderer::draw_ascii`]) or serialize the bundle as JSON

// Module declarations
pub mod config;
pub mod events;
pub mod format;
pub mod lunar;
pub mod observer;
pub mod renderer;
pub mod report;
pub mod solar;
pub mod timebase;

pub use lunar::MoonPhase;
pub use observer::ObserverFix;
pub use report::{MoonReport, SkyReport, SunReport};
pub use solar::HorizontalPosition;
