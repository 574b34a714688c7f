use thiserror::Error;

/// Transport- and HTTP-level failures while fetching earthquake events.
///
/// Every variant is treated the same way by the pipeline: log a warning and
/// continue with an empty event list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    Request(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode JSON response from {0}")]
    Decode(String, #[source] reqwest::Error),
}
