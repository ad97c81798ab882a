use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::OverpassError;
use crate::overpass::query::OverpassQuery;
use crate::overpass::response::{parse_response, OverpassResponse};
use crate::types::asset::RailwayAsset;

#[derive(Clone)]
pub struct OverpassClient {
    client: reqwest::Client,
    url: String,
    min_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl OverpassClient {
    pub fn new(url: impl Into<String>, min_interval: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            min_interval,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self, query: &OverpassQuery) -> Result<Vec<RailwayAsset>, OverpassError> {
        self.wait_for_slot().await;

        let body = query.build();
        tracing::debug!("Overpass query:\n{}", body);

        let response = self
            .client
            .post(&self.url)
            .form(&[("data", body.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Overpass API rate limit exceeded");
            return Err(OverpassError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OverpassError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: OverpassResponse = response.json().await?;
        let assets = parse_response(&payload);
        tracing::info!(
            "Overpass returned {} elements, {} usable assets",
            payload.elements.len(),
            assets.len()
        );
        Ok(assets)
    }

    /// Holds the lock while sleeping so concurrent callers queue up behind
    /// each other and stay `min_interval` apart.
    async fn wait_for_slot(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                tracing::info!("Rate limiting: waiting {}ms before Overpass request", wait.as_millis());
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }
}
