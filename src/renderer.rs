//! # Sky Report Rendering
//!
//! Renders a computed [`SkyReport`] to ASCII terminal output: a text panel
//! with the sun and moon event fields, and an optional 24-hour sun
//! elevation chart. Stdout carries only the rendered product; operational
//! chatter goes to stderr elsewhere.

use crate::config::Config;
use crate::observer::ObserverFix;
use crate::{solar, SkyReport};

const Y_AXIS_WIDTH: usize = 5; // Space for Y-axis labels

/// Placeholder shown for an event that does not exist.
const NO_EVENT: &str = "----";

/// Format an "HHMM" field for the panel, substituting a placeholder for
/// the empty (no event) string.
fn event_cell(hhmm: &str) -> &str {
    if hhmm.is_empty() {
        NO_EVENT
    } else {
        hhmm
    }
}

/// Format a minute count, mapping the -1 sentinel to a placeholder.
fn minutes_cell(minutes: i32) -> String {
    if minutes < 0 {
        "--".to_string()
    } else {
        format!("{} min", minutes)
    }
}

/// Render the report to the terminal.
pub fn draw_ascii(report: &SkyReport, fix: &ObserverFix, config: &Config) {
    println!("Sky almanac for {}", fix.site);
    println!("{}", "=".repeat(16 + fix.site.len()));

    println!(
        "Sun   rise {}  set {}  daylight {}",
        event_cell(&report.sun.rise_hhmm),
        event_cell(&report.sun.set_hhmm),
        minutes_cell(report.sun.minutes_visible),
    );
    println!(
        "      since rise {}  until set {}",
        minutes_cell(report.sun.minutes_since_rise),
        minutes_cell(report.sun.minutes_until_set),
    );
    if !report.sun.rise_hhmm.is_empty() {
        println!(
            "      at rise: altitude {:.1}°, azimuth {:.1}°",
            report.sun.altitude_at_rise, report.sun.azimuth_at_rise,
        );
    }

    println!(
        "Moon  phase {} ({:.1}°)  visible: {}",
        report.moon.phase,
        report.moon.phase_angle,
        if report.moon.visible { "yes" } else { "no" },
    );
    println!(
        "      last rise {} ({} ago)  last set {} ({} ago)",
        event_cell(&report.moon.last_rise_hhmm),
        minutes_cell(report.moon.minutes_since_last_rise),
        event_cell(&report.moon.last_set_hhmm),
        minutes_cell(report.moon.minutes_since_last_set),
    );
    println!(
        "      next rise {} (in {})  next set {} (in {})",
        event_cell(&report.moon.next_rise_hhmm),
        minutes_cell(report.moon.minutes_until_next_rise),
        event_cell(&report.moon.next_set_hhmm),
        minutes_cell(report.moon.minutes_until_next_set),
    );
    println!(
        "      above horizon {}",
        minutes_cell(report.moon.minutes_visible)
    );

    if config.output.elevation_chart {
        println!();
        for line in elevation_chart(report, fix, config) {
            println!("{}", line);
        }
    }
}

/// Build the 24-hour sun elevation chart as printable rows.
///
/// One column per time step across the local day, `*` tracing the
/// elevation curve, `X` marking the current hour, a `-` horizon line, and
/// Y-axis labels at +90°, 0° and -90°.
pub fn elevation_chart(report: &SkyReport, fix: &ObserverFix, config: &Config) -> Vec<String> {
    let width = config.output.chart_width.max(12);
    let rows = config.output.chart_height.max(5);

    let altitude_to_row =
        |altitude: f64| (((90.0 - altitude) / 180.0) * (rows as f64 - 1.0)).round() as usize;

    let mut grid = vec![vec![' '; width + Y_AXIS_WIDTH]; rows];

    // Y-axis labels with a vertical axis line
    for (label, altitude) in [("+90", 90.0), ("  0", 0.0), ("-90", -90.0)] {
        let row = altitude_to_row(altitude);
        for (i, ch) in label.chars().enumerate() {
            grid[row][i] = ch;
        }
        grid[row][Y_AXIS_WIDTH - 1] = '│';
    }

    // Horizon line across the data area
    let horizon_row = altitude_to_row(0.0);
    for cell in grid[horizon_row].iter_mut().skip(Y_AXIS_WIDTH) {
        *cell = '-';
    }

    // Elevation curve with the current hour marked
    let now_column = ((report.local_hour / 24.0) * (width as f64 - 1.0)).round() as usize;
    for column in 0..width {
        let hour = 24.0 * column as f64 / (width as f64 - 1.0);
        let position = solar::position(report.julian_day, hour, fix.latitude, fix.longitude);
        let row = altitude_to_row(position.altitude.clamp(-90.0, 90.0));
        grid[row][column + Y_AXIS_WIDTH] = if column == now_column { 'X' } else { '*' };
    }

    let mut lines: Vec<String> = grid
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect();

    // Hour labels below the chart
    let padding = " ".repeat(Y_AXIS_WIDTH);
    let half = width / 2;
    let left = format!("{:<width$}", "0h", width = half.saturating_sub(1));
    let right = format!("{:>width$}", "24h", width = width - half - 2);
    lines.push(format!("{}{}12h{}", padding, left, right));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer;
    use chrono::{FixedOffset, TimeZone};

    fn test_report() -> (SkyReport, ObserverFix) {
        let noon = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 1, 1, 12, 0, 0)
            .unwrap();
        let report = SkyReport::compute(40.7128, -74.0060, &noon);
        let fix = observer::default_fix();
        (report, fix)
    }

    #[test]
    fn chart_has_expected_geometry() {
        let (report, fix) = test_report();
        let config = Config::default();

        let lines = elevation_chart(&report, &fix, &config);

        // Chart rows plus the hour-label footer
        assert_eq!(lines.len(), config.output.chart_height + 1);
        for line in &lines[..config.output.chart_height] {
            assert_eq!(
                line.chars().count(),
                config.output.chart_width + Y_AXIS_WIDTH
            );
        }
    }

    #[test]
    fn chart_traces_a_curve_with_a_now_marker() {
        let (report, fix) = test_report();
        let config = Config::default();

        let lines = elevation_chart(&report, &fix, &config);
        let all: String = lines.join("\n");

        assert!(all.contains('*'), "elevation curve missing");
        assert_eq!(
            all.chars().filter(|&c| c == 'X').count(),
            1,
            "exactly one now marker"
        );
        assert!(all.contains("-90"), "axis labels missing");
    }

    #[test]
    fn panel_renders_without_panicking() {
        let (report, fix) = test_report();
        draw_ascii(&report, &fix, &Config::default());
    }

    #[test]
    fn placeholders_substitute_sentinels() {
        assert_eq!(event_cell(""), "----");
        assert_eq!(event_cell("0716"), "0716");
        assert_eq!(minutes_cell(-1), "--");
        assert_eq!(minutes_cell(283), "283 min");
    }
}
