//! # Event Window Resolution
//!
//! The moon's rise and set drift roughly 50 minutes later each day, so
//! "the last moonrise" and "the next moonset" need not fall on today's
//! calendar date at all. The resolver takes the per-day candidates for
//! yesterday, today and tomorrow and picks the nearest occurrence in each
//! direction from the current local hour, with 24-hour wraparound when a
//! chosen candidate's clock hour lies on the far side of midnight.

use crate::format::hours_to_minutes;

/// Rise/set candidates computed for one Julian Day. `None` marks a day on
/// which the event does not occur (hour-angle domain exceeded).
#[derive(Debug, Clone, Copy, Default)]
pub struct DayEvents {
    pub rise: Option<f64>,
    pub set: Option<f64>,
}

/// Candidates for days −1, 0 and +1, oldest first.
pub type EventCandidates = [DayEvents; 3];

const YESTERDAY: usize = 0;
const TODAY: usize = 1;
const TOMORROW: usize = 2;

#[derive(Clone, Copy)]
enum Direction {
    Past,
    Future,
}

/// Nearest past and next occurrences of rise and set relative to a local
/// hour. Any slot may be `None` when no candidate qualifies.
#[derive(Debug, Clone, Copy)]
pub struct EventWindow {
    pub last_rise: Option<f64>,
    pub last_set: Option<f64>,
    pub next_rise: Option<f64>,
    pub next_set: Option<f64>,
}

impl EventWindow {
    /// Resolve all four slots from a three-day candidate set.
    pub fn resolve(candidates: &EventCandidates, local_hour: f64) -> Self {
        EventWindow {
            last_rise: pick(
                candidates[TODAY].rise,
                candidates[YESTERDAY].rise,
                local_hour,
                Direction::Past,
            ),
            last_set: pick(
                candidates[TODAY].set,
                candidates[YESTERDAY].set,
                local_hour,
                Direction::Past,
            ),
            next_rise: pick(
                candidates[TODAY].rise,
                candidates[TOMORROW].rise,
                local_hour,
                Direction::Future,
            ),
            next_set: pick(
                candidates[TODAY].set,
                candidates[TOMORROW].set,
                local_hour,
                Direction::Future,
            ),
        }
    }
}

/// Today's candidate wins if it lies on the wanted side of `local_hour`;
/// otherwise the adjacent day's candidate, which lies on that side by
/// construction, is taken as-is.
fn pick(
    today: Option<f64>,
    adjacent: Option<f64>,
    local_hour: f64,
    direction: Direction,
) -> Option<f64> {
    match today {
        Some(hour)
            if match direction {
                Direction::Past => hour <= local_hour,
                Direction::Future => hour > local_hour,
            } =>
        {
            Some(hour)
        }
        _ => adjacent,
    }
}

/// Minutes elapsed since a past event, wrapped by 24 h when the candidate
/// hour lies numerically ahead of now; −1 when the event is absent.
pub fn minutes_since(event: Option<f64>, local_hour: f64) -> i32 {
    match event {
        Some(hour) => {
            let mut diff = local_hour - hour;
            if hour > local_hour {
                diff += 24.0;
            }
            hours_to_minutes(diff)
        }
        None => -1,
    }
}

/// Minutes remaining until a future event, wrapped by 24 h when the
/// candidate hour lies numerically behind now; −1 when the event is absent.
pub fn minutes_until(event: Option<f64>, local_hour: f64) -> i32 {
    match event {
        Some(hour) => {
            let mut diff = hour - local_hour;
            if hour < local_hour {
                diff += 24.0;
            }
            hours_to_minutes(diff)
        }
        None => -1,
    }
}

/// Span in minutes from the last rise to the next set, wrapped into
/// [0, 24 h); 0 when either endpoint is missing.
pub fn visible_minutes(last_rise: Option<f64>, next_set: Option<f64>) -> i32 {
    match (last_rise, next_set) {
        (Some(rise), Some(set)) => {
            let mut span = set - rise;
            if span < 0.0 {
                span += 24.0;
            }
            hours_to_minutes(span)
        }
        _ => 0,
    }
}
