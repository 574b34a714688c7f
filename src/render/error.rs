use thiserror::Error;

/// A failure in the chart backend while drawing or writing the figure.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Chart backend error: {0}")]
    Backend(String),

    #[error("Nothing to draw: the daily series is empty")]
    EmptySeries,
}
