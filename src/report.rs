//! The textual trend analysis report.

use crate::config::DateRange;
use crate::trend::TrendLine;
use chrono::{Datelike, NaiveDate};

/// Printed when the pipeline short-circuits without any events.
pub const NO_DATA_MESSAGE: &str = "No earthquake data found for this period";

/// Attribution line for the events API.
pub const DATA_SOURCE: &str = "Myanmar Earthquake API";

/// Builds the full report text: header, date range, totals, fitted equation,
/// qualitative trend, and source attribution.
///
/// The printed range is derived from the actual run configuration rather than
/// restated by hand, so it always matches the query window.
pub fn trend_report(range: &DateRange, total_events: usize, trend: &TrendLine) -> String {
    [
        "--- Earthquake Trend Analysis Report ---".to_string(),
        format!(
            "Date Range: {} to {}",
            long_date(range.start()),
            long_date(range.end())
        ),
        format!("Total Events: {}", total_events),
        format!("Trend Line Equation: {}", trend.equation()),
        format!("Trend: {}", trend.classify()),
        String::new(),
        format!("Data source: {}", DATA_SOURCE),
    ]
    .join("\n")
}

/// Formats a date as e.g. `March 27, 2025`.
fn long_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn report_lines_appear_in_order() {
        let range = DateRange::new(date(2025, 3, 27), date(2025, 4, 10)).unwrap();
        let trend = TrendLine {
            slope: 0.12,
            intercept: 3.4,
        };

        let report = trend_report(&range, 42, &trend);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "--- Earthquake Trend Analysis Report ---");
        assert_eq!(lines[1], "Date Range: March 27, 2025 to April 10, 2025");
        assert_eq!(lines[2], "Total Events: 42");
        assert_eq!(lines[3], "Trend Line Equation: y = 0.12x + 3.40");
        assert_eq!(lines[4], "Trend: Significant increasing frequency");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Data source: Myanmar Earthquake API");
    }

    #[test]
    fn date_range_line_tracks_the_configured_window() {
        let range = DateRange::new(date(2024, 12, 1), date(2025, 1, 5)).unwrap();
        let trend = TrendLine {
            slope: 0.0,
            intercept: 1.0,
        };
        let report = trend_report(&range, 7, &trend);
        assert!(report.contains("Date Range: December 1, 2024 to January 5, 2025"));
        assert!(report.contains("Trend: Stable activity"));
    }
}
