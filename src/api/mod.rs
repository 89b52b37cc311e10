pub mod api_structs;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::error;

use crate::api::api_structs::{MapDescriptor, MapsResponse};

/// Root URL of the public map catalog service
pub const VALORANT_API_ROOT: &str = "https://valorant-api.com";

#[derive(Debug, Error)]
pub enum MapApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status code: {0}")]
    Status(StatusCode),

    #[error("failed to decode map payload: {0}")]
    Decode(#[from] serde_json::Error)
}

/// Client for the map catalog endpoint
pub struct MapApiClient {
    client: Client,
    api_root: String
}

impl MapApiClient {
    pub fn new(api_root: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_root: api_root.into()
        }
    }

    /// Fetches the current map catalog.
    ///
    /// One GET per call, no retry and no caching. The payload is decoded at
    /// the trust boundary: a response without a `data` field, or with
    /// malformed descriptors, reports as [`MapApiError::Decode`] instead of
    /// passing through unchecked. Non-success statuses report as
    /// [`MapApiError::Status`] so callers can tell a flaky transport from a
    /// broken payload.
    pub async fn fetch_maps(&self) -> Result<Vec<MapDescriptor>, MapApiError> {
        let response = self.client.get(format!("{}/v1/maps", self.api_root)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapApiError::Status(status));
        }

        let body = response.text().await?;
        let envelope: MapsResponse = serde_json::from_str(&body)?;

        Ok(envelope.data)
    }

    /// Best-effort variant of [`fetch_maps`](Self::fetch_maps): every failure
    /// is logged once and collapsed to `None`. Callers treat the absence of a
    /// result as a valid "no map data available" outcome.
    pub async fn fetch_maps_or_log(&self) -> Option<Vec<MapDescriptor>> {
        match self.fetch_maps().await {
            Ok(maps) => Some(maps),
            Err(e) => {
                error!("Error fetching maps: {}", e);
                None
            }
        }
    }
}

impl Default for MapApiClient {
    fn default() -> Self {
        Self::new(VALORANT_API_ROOT)
    }
}
