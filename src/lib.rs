mod config;
mod error;
mod events;
mod frequency;
mod quaketrend;
mod render;
mod report;
mod trend;

pub use error::QuakeTrendError;
pub use quaketrend::{QuakeTrend, RunOutcome};

pub use config::{DateRange, InvalidDateRange, RunConfig};

pub use events::error::FetchError;
pub use events::event::EarthquakeEvent;
pub use events::fetcher::EventFetcher;

pub use frequency::daily::{daily_series, DailyCount};
pub use frequency::error::SchemaError;

pub use trend::error::FitError;
pub use trend::{fit_trend, TrendClass, TrendLine};

pub use render::error::RenderError;
pub use render::render_chart;

pub use report::{trend_report, DATA_SOURCE, NO_DATA_MESSAGE};
