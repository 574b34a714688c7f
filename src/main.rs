use chrono::NaiveDate;
use log::info;
use quaketrend::{QuakeTrend, RunOutcome, NO_DATA_MESSAGE};

const ENDPOINT: &str = "https://mmeq.akze.me/api/myanmar-quakes";
const RANGE_FROM: (i32, u32, u32) = (2025, 3, 27);
const RANGE_TO: (i32, u32, u32) = (2025, 4, 10);
const CHART_PATH: &str = "earthquake_frequency.svg";

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let pipeline = match QuakeTrend::builder()
        .endpoint(ENDPOINT)
        .from(ymd(RANGE_FROM))
        .to(ymd(RANGE_TO))
        .chart_path(CHART_PATH)
        .build()
    {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return;
        }
    };

    match pipeline.run().await {
        RunOutcome::Report {
            text, chart_path, ..
        } => {
            println!("{text}");
            info!("Chart written to {}", chart_path.display());
        }
        RunOutcome::NoData => println!("{NO_DATA_MESSAGE}"),
        RunOutcome::DataError(message) => println!("Data processing error: {message}"),
    }
}

fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
