//! Least-squares trend fitting over the daily frequency series.

pub mod error;

use crate::frequency::daily::DailyCount;
use error::FitError;
use std::fmt;

/// A fitted first-degree polynomial over `(day offset, count)`.
///
/// `x` is the offset in days from the start of the requested range, so a
/// series whose counts grow by one per day fits `slope = 1.0` with
/// `intercept` equal to the first day's count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The fitted line formatted as `y = {slope:.2}x + {intercept:.2}`.
    pub fn equation(&self) -> String {
        format!("y = {:.2}x + {:.2}", self.slope, self.intercept)
    }

    /// Qualitative classification of the slope in events per day.
    pub fn classify(&self) -> TrendClass {
        if self.slope > 0.1 {
            TrendClass::SignificantIncrease
        } else if self.slope > 0.0 {
            TrendClass::SlightIncrease
        } else if self.slope < -0.1 {
            TrendClass::SignificantDecrease
        } else if self.slope < 0.0 {
            TrendClass::SlightDecrease
        } else {
            TrendClass::Stable
        }
    }
}

/// Qualitative label for a fitted slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendClass {
    SignificantIncrease,
    SlightIncrease,
    SignificantDecrease,
    SlightDecrease,
    Stable,
}

impl TrendClass {
    pub fn label(&self) -> &'static str {
        match self {
            TrendClass::SignificantIncrease => "Significant increasing frequency",
            TrendClass::SlightIncrease => "Slight increasing frequency",
            TrendClass::SignificantDecrease => "Significant decreasing frequency",
            TrendClass::SlightDecrease => "Slight decreasing frequency",
            TrendClass::Stable => "Stable activity",
        }
    }
}

impl fmt::Display for TrendClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fits a line to the daily counts by ordinary least squares.
///
/// The series must hold at least two points; the x-values are the series
/// indices, so they are always distinct and the denominator cannot vanish
/// once the length guard passes.
pub fn fit_trend(series: &[DailyCount]) -> Result<TrendLine, FitError> {
    let n = series.len();
    if n < 2 {
        return Err(FitError::DegenerateSeries { points: n });
    }

    let n_f = n as f64;
    let mean_x = (n_f - 1.0) / 2.0;
    let mean_y = series.iter().map(|d| d.count as f64).sum::<f64>() / n_f;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, point) in series.iter().enumerate() {
        let dx = i as f64 - mean_x;
        numerator += dx * (point.count as f64 - mean_y);
        denominator += dx * dx;
    }

    let slope = numerator / denominator;
    Ok(TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(counts: &[u32]) -> Vec<DailyCount> {
        let start = NaiveDate::from_ymd_opt(2025, 3, 27).unwrap();
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| DailyCount {
                date: start + chrono::Duration::days(i as i64),
                count,
            })
            .collect()
    }

    #[test]
    fn perfectly_linear_series_recovers_slope_and_intercept() {
        let trend = fit_trend(&series(&[0, 1, 2, 3, 4])).unwrap();
        assert!((trend.slope - 1.0).abs() < 1e-9);
        assert!(trend.intercept.abs() < 1e-9);
        assert_eq!(trend.classify(), TrendClass::SignificantIncrease);
    }

    #[test]
    fn flat_series_is_stable() {
        let trend = fit_trend(&series(&[0, 0, 0, 0])).unwrap();
        assert!(trend.slope.abs() < 1e-12);
        assert_eq!(trend.classify(), TrendClass::Stable);

        let trend = fit_trend(&series(&[3, 3, 3, 3, 3])).unwrap();
        assert!(trend.slope.abs() < 1e-12);
        assert!((trend.intercept - 3.0).abs() < 1e-9);
        assert_eq!(trend.classify(), TrendClass::Stable);
    }

    #[test]
    fn decreasing_series_classifies_as_decrease() {
        let trend = fit_trend(&series(&[8, 6, 4, 2, 0])).unwrap();
        assert!((trend.slope + 2.0).abs() < 1e-9);
        assert_eq!(trend.classify(), TrendClass::SignificantDecrease);
    }

    #[test]
    fn classification_thresholds() {
        let class_of = |slope: f64| TrendLine { slope, intercept: 0.0 }.classify();
        assert_eq!(class_of(0.2), TrendClass::SignificantIncrease);
        assert_eq!(class_of(0.1), TrendClass::SlightIncrease);
        assert_eq!(class_of(0.05), TrendClass::SlightIncrease);
        assert_eq!(class_of(-0.05), TrendClass::SlightDecrease);
        assert_eq!(class_of(-0.1), TrendClass::SlightDecrease);
        assert_eq!(class_of(-0.2), TrendClass::SignificantDecrease);
        assert_eq!(class_of(0.0), TrendClass::Stable);
    }

    #[test]
    fn fewer_than_two_points_is_a_fit_error() {
        assert!(matches!(
            fit_trend(&[]),
            Err(FitError::DegenerateSeries { points: 0 })
        ));
        assert!(matches!(
            fit_trend(&series(&[5])),
            Err(FitError::DegenerateSeries { points: 1 })
        ));
    }

    #[test]
    fn equation_formats_to_two_decimals() {
        let trend = TrendLine {
            slope: 0.1234,
            intercept: 3.456,
        };
        assert_eq!(trend.equation(), "y = 0.12x + 3.46");
    }
}
