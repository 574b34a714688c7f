use crate::config::RunConfig;
use crate::events::error::FetchError;
use crate::events::event::{EarthquakeEvent, QuakeEnvelope};
use log::{info, warn};
use reqwest::Client;

/// Issues the one outbound request of a pipeline run and decodes the event
/// list from the JSON envelope.
pub struct EventFetcher {
    client: Client,
}

impl EventFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Performs `GET endpoint?from=...&to=...` and returns the decoded event
    /// list, which may be empty. No retries are attempted.
    pub async fn fetch_events(
        &self,
        config: &RunConfig,
    ) -> Result<Vec<EarthquakeEvent>, FetchError> {
        let url = config.endpoint.clone();
        info!(
            "Requesting earthquake events from {} for {} to {}",
            url,
            config.range.start(),
            config.range.end()
        );

        let response = self
            .client
            .get(&url)
            .query(&config.range.query_params())
            .send()
            .await
            .map_err(|e| FetchError::Request(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::Request(url, e)
                });
            }
        };

        let envelope: QuakeEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(url.clone(), e))?;
        info!(
            "Received {} earthquake events from {}",
            envelope.earthquakes.len(),
            url
        );
        Ok(envelope.earthquakes)
    }
}

impl Default for EventFetcher {
    fn default() -> Self {
        Self::new()
    }
}
