//! Chart rendering for the daily frequency series and its trend line.
//!
//! Produces an SVG figure: the raw series as a marker-connected line, the
//! fitted trend as a dashed overlay, numeric annotations above non-zero
//! points, and day-granularity date ticks.

pub mod error;

use crate::frequency::daily::DailyCount;
use crate::trend::TrendLine;
use error::RenderError;
use log::info;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Samples along the trend overlay. Kept well above the day count so the
/// dashed line stays smooth regardless of the range length.
const TREND_SAMPLES: usize = 100;

const CHART_SIZE: (u32, u32) = (1120, 480);

fn backend_err<E: std::error::Error + Send + Sync>(
    e: DrawingAreaErrorKind<E>,
) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// Draws the frequency chart to an SVG file at `path`.
///
/// The x-axis is the day offset within the range, ticked once per day and
/// labeled with the corresponding date as `%b %d`.
pub fn render_chart(
    series: &[DailyCount],
    trend: &TrendLine,
    total_events: usize,
    path: &Path,
) -> Result<(), RenderError> {
    let first = series.first().ok_or(RenderError::EmptySeries)?;
    let last = series.last().ok_or(RenderError::EmptySeries)?;

    let n = series.len();
    let last_x = (n - 1) as f64;
    let max_count = series.iter().map(|d| d.count).max().unwrap_or(0) as f64;
    let trend_ends = [trend.value_at(0.0), trend.value_at(last_x)];
    let y_min = trend_ends.iter().copied().fold(0.0, f64::min);
    let y_max = trend_ends.iter().copied().fold(max_count, f64::max) + 2.0;

    let caption = format!(
        "Earthquake Frequency ({} to {}) - Total Events: {}",
        first.date.format("%b %d, %Y"),
        last.date.format("%b %d, %Y"),
        total_events,
    );

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 22))
        .margin(16)
        .x_label_area_size(64)
        .y_label_area_size(48)
        .build_cartesian_2d(-0.5..last_x + 0.5, y_min..y_max)
        .map_err(backend_err)?;

    let dates: Vec<_> = series.iter().map(|d| d.date).collect();
    chart
        .configure_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| {
            let i = x.round();
            if (x - i).abs() > 1e-6 {
                return String::new();
            }
            match usize::try_from(i as i64).ok().and_then(|i| dates.get(i)) {
                Some(date) => date.format("%b %d").to_string(),
                None => String::new(),
            }
        })
        .x_label_style(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_desc("Date")
        .y_desc("Earthquake Count")
        .draw()
        .map_err(backend_err)?;

    chart
        .draw_series(LineSeries::new(
            series
                .iter()
                .enumerate()
                .map(|(i, d)| (i as f64, d.count as f64)),
            BLUE.stroke_width(2),
        ))
        .map_err(backend_err)?
        .label("Daily Count")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(
            series
                .iter()
                .enumerate()
                .map(|(i, d)| Circle::new((i as f64, d.count as f64), 4, RED.filled())),
        )
        .map_err(backend_err)?;

    let trend_points: Vec<(f64, f64)> = (0..TREND_SAMPLES)
        .map(|i| {
            let x = last_x * i as f64 / (TREND_SAMPLES - 1) as f64;
            (x, trend.value_at(x))
        })
        .collect();
    chart
        .draw_series(DashedLineSeries::new(
            trend_points,
            6,
            3,
            GREEN.stroke_width(2),
        ))
        .map_err(backend_err)?
        .label("Trend Line")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));

    let annotation_style = TextStyle::from(("sans-serif", 13).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(
            series
                .iter()
                .enumerate()
                .filter(|(_, d)| d.count > 0)
                .map(|(i, d)| {
                    Text::new(
                        d.count.to_string(),
                        (i as f64, d.count as f64 + 0.2),
                        annotation_style.clone(),
                    )
                }),
        )
        .map_err(backend_err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.4))
        .draw()
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    info!("Wrote frequency chart to {}", path.display());
    Ok(())
}
