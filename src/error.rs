use crate::config::InvalidDateRange;
use crate::events::error::FetchError;
use crate::frequency::error::SchemaError;
use crate::render::error::RenderError;
use crate::trend::error::FitError;
use thiserror::Error;

/// Top-level error for the `quaketrend` crate, wrapping each stage's error type.
///
/// The one-shot pipeline ([`crate::QuakeTrend::run`]) handles stage failures
/// fail-soft and never surfaces this type; it exists for callers driving the
/// stages individually.
#[derive(Debug, Error)]
pub enum QuakeTrendError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    InvalidDateRange(#[from] InvalidDateRange),
}
