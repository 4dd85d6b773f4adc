//! Feed client: request, timeout, normalization and hand-off to app state

use std::future::Future;

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use weather_core::{normalize_body, FetchError, RecordSet, Result};
use weather_state::AppState;

use crate::ForecastConfig;

// ============================================================================
// STRATEGY PATTERN: Feed Source
// ============================================================================

/// Strategy trait for retrieving the raw response body
pub trait FeedSource {
    fn get(&self, url: &str, timeout_ms: u32) -> impl Future<Output = Result<String>>;
}

/// Browser `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

impl HttpSource {
    async fn request(url: &str) -> Result<String> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl FeedSource for HttpSource {
    async fn get(&self, url: &str, timeout_ms: u32) -> Result<String> {
        let request = Self::request(url);
        if timeout_ms == 0 {
            return request.await;
        }

        let timeout = TimeoutFuture::new(timeout_ms);
        futures::pin_mut!(request, timeout);
        match future::select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(FetchError::Timeout { after_ms: timeout_ms }),
        }
    }
}

// ============================================================================
// WEATHER CLIENT
// ============================================================================

pub struct WeatherClient<S = HttpSource> {
    config: ForecastConfig,
    source: S,
}

impl WeatherClient<HttpSource> {
    pub fn new(config: ForecastConfig) -> Self {
        Self::with_source(config, HttpSource)
    }
}

impl<S: FeedSource> WeatherClient<S> {
    pub fn with_source(config: ForecastConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// One request, no retries
    pub async fn fetch(&self) -> Result<RecordSet> {
        let url = self.config.query_url();
        tracing::info!("Fetching weather data: {}", url);

        let body = self.source.get(&url, self.config.timeout_ms).await?;
        let records = normalize_body(&body)?;

        tracing::info!("Fetched {} bytes, {} daily records", body.len(), records.len());
        Ok(records)
    }
}

/// Fetch once in the background and install the outcome in `state`
pub fn spawn_load(state: AppState, config: ForecastConfig) {
    spawn_local(async move {
        state.set_loading();
        let outcome = WeatherClient::new(config).fetch().await;
        state.apply_load(outcome);
    });
}
