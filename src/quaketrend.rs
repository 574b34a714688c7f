//! The one-shot analysis pipeline: fetch, aggregate, fit, render, report.

use crate::config::{DateRange, RunConfig};
use crate::error::QuakeTrendError;
use crate::events::event::EarthquakeEvent;
use crate::events::fetcher::EventFetcher;
use crate::frequency::daily::daily_series;
use crate::render::render_chart;
use crate::report::trend_report;
use crate::trend::{fit_trend, TrendLine};
use bon::bon;
use chrono::NaiveDate;
use log::warn;
use std::path::PathBuf;

const DEFAULT_CHART_PATH: &str = "earthquake_frequency.svg";

/// Outcome of one pipeline run.
///
/// Stage failures never abort the process; they collapse into one of the
/// non-report variants and the caller prints the matching diagnostic.
#[derive(Debug)]
pub enum RunOutcome {
    /// All stages completed; the chart was written and the report is ready.
    Report {
        total_events: usize,
        trend: TrendLine,
        text: String,
        chart_path: PathBuf,
    },
    /// The fetch returned no events (or failed soft into an empty list).
    NoData,
    /// Aggregation, fitting, or rendering failed; remaining stages skipped.
    DataError(String),
}

/// Entry point for the earthquake trend analysis.
///
/// Built once per run with the endpoint and date window; [`QuakeTrend::run`]
/// drives the full fetch-to-report pipeline.
pub struct QuakeTrend {
    fetcher: EventFetcher,
    config: RunConfig,
}

#[bon]
impl QuakeTrend {
    /// Creates the pipeline for a fixed endpoint and date window.
    ///
    /// `chart_path` defaults to `earthquake_frequency.svg` in the working
    /// directory. Fails if `from` is after `to`.
    #[builder]
    pub fn new(
        #[builder(into)] endpoint: String,
        from: NaiveDate,
        to: NaiveDate,
        #[builder(into)] chart_path: Option<PathBuf>,
    ) -> Result<Self, QuakeTrendError> {
        let range = DateRange::new(from, to)?;
        Ok(Self {
            fetcher: EventFetcher::new(),
            config: RunConfig {
                endpoint,
                range,
                chart_path: chart_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_PATH)),
            },
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs the full pipeline: one fetch, then the in-memory stages.
    ///
    /// A fetch failure is reported and treated as an empty event list
    /// (fail-soft, no retries). The diagnostic goes to standard output like
    /// the rest of the user-visible status lines, and to the log.
    pub async fn run(&self) -> RunOutcome {
        let events = match self.fetcher.fetch_events(&self.config).await {
            Ok(events) => events,
            Err(e) => {
                warn!("Network error: {}", e);
                println!("Network error: {}", e);
                Vec::new()
            }
        };
        self.process(events)
    }

    /// Runs the post-fetch stages over an already-retrieved event list.
    ///
    /// Empty input short-circuits to [`RunOutcome::NoData`]; the first stage
    /// failure ends the run with [`RunOutcome::DataError`] and the remaining
    /// stages are skipped.
    pub fn process(&self, events: Vec<EarthquakeEvent>) -> RunOutcome {
        if events.is_empty() {
            return RunOutcome::NoData;
        }
        let total_events = events.len();

        let series = match daily_series(&events, &self.config.range) {
            Ok(series) => series,
            Err(e) => return RunOutcome::DataError(e.to_string()),
        };

        let trend = match fit_trend(&series) {
            Ok(trend) => trend,
            Err(e) => return RunOutcome::DataError(e.to_string()),
        };

        if let Err(e) = render_chart(&series, &trend, total_events, &self.config.chart_path) {
            return RunOutcome::DataError(e.to_string());
        }

        let text = trend_report(&self.config.range, total_events, &trend);
        RunOutcome::Report {
            total_events,
            trend,
            text,
            chart_path: self.config.chart_path.clone(),
        }
    }
}
