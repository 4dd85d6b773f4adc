//! Wire types for the Open-Meteo hourly response

use serde::{Deserialize, Serialize};

/// Hourly fields requested from the API
pub const HOURLY_FIELDS: [&str; 2] = ["temperature_2m", "relative_humidity_2m"];

/// Top-level API response.
///
/// Only `hourly` is read; every field is optional so that a response
/// missing data decodes and is then rejected by the normalizer with a
/// precise reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
}

/// Parallel arrays of hourly samples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Option<Vec<String>>,
    #[serde(default)]
    pub temperature_2m: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub relative_humidity_2m: Option<Vec<Option<f64>>>,
}

impl HourlySeries {
    pub fn new(
        time: Vec<String>,
        temperature_2m: Vec<Option<f64>>,
        relative_humidity_2m: Vec<Option<f64>>,
    ) -> Self {
        Self {
            time: Some(time),
            temperature_2m: Some(temperature_2m),
            relative_humidity_2m: Some(relative_humidity_2m),
        }
    }

    /// Number of timestamps (0 when the array is missing)
    pub fn len(&self) -> usize {
        self.time.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ForecastResponse {
    pub fn with_hourly(hourly: HourlySeries) -> Self {
        Self {
            hourly: Some(hourly),
            ..Default::default()
        }
    }
}
