//! # weather-fetch
//!
//! One-shot client for the hourly weather feed.
//! Uses Strategy pattern for the transport that produces the response body.

pub mod client;

pub use client::*;

use chrono::NaiveDate;
use weather_core::{DATE_FORMAT, HOURLY_FIELDS};

/// Open-Meteo historical archive endpoint
pub const ARCHIVE_API_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Base URL baked in at build time; set `WEATHER_API_URL` to target the mock server
pub const DEFAULT_API_URL: &str = match option_env!("WEATHER_API_URL") {
    Some(url) => url,
    None => ARCHIVE_API_URL,
};

/// Berlin
pub const DEFAULT_LATITUDE: f64 = 52.52;
pub const DEFAULT_LONGITUDE: f64 = 13.41;

pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

// ============================================================================
// FEED CONFIGURATION
// ============================================================================

/// Query parameters for the feed request
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Request timeout in milliseconds (0 = disabled)
    pub timeout_ms: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap_or_default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ForecastConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Inclusive day range; reversed bounds are swapped
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Full GET URL
    pub fn query_url(&self) -> String {
        format!(
            "{}?latitude={}&longitude={}&hourly={}&start_date={}&end_date={}",
            self.base_url.trim_end_matches('?'),
            self.latitude,
            self.longitude,
            HOURLY_FIELDS.join(","),
            self.start_date.format(DATE_FORMAT),
            self.end_date.format(DATE_FORMAT),
        )
    }
}
