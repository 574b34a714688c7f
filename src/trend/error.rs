use thiserror::Error;

/// The daily series is too short for a meaningful least-squares fit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FitError {
    #[error("Cannot fit a trend line to {points} data point(s); at least 2 are required")]
    DegenerateSeries { points: usize },
}
