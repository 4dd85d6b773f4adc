//! Daily weather records and the immutable record set

use crate::format_value;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Maximum number of days kept in a record set
pub const MAX_RECORDS: usize = 10;

/// Calendar day format used for keys, labels and the table
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day of weather, taken from the first hourly sample of that day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
}

impl WeatherRecord {
    pub fn new(date: NaiveDate, temperature: f64, humidity: f64) -> Self {
        Self {
            date,
            temperature,
            humidity,
        }
    }

    /// Date key (`2024-05-01`)
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn temperature_str(&self) -> String {
        format_value(self.temperature)
    }

    pub fn humidity_str(&self) -> String {
        format_value(self.humidity)
    }
}

/// Ordered, deduplicated, capped sequence of daily records.
///
/// Cloning shares the underlying storage. There is no way to mutate a set
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    records: Arc<[WeatherRecord]>,
}

impl RecordSet {
    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    /// Build a set from arbitrary records: first occurrence of each date
    /// wins, input order is kept, at most [`MAX_RECORDS`] are retained.
    pub fn from_records(records: impl IntoIterator<Item = WeatherRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(MAX_RECORDS);

        for record in records {
            if kept.len() == MAX_RECORDS {
                break;
            }
            if seen.insert(record.date) {
                kept.push(record);
            }
        }

        Self {
            records: Arc::from(kept),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeatherRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&WeatherRecord> {
        self.records.get(index)
    }

    /// Date keys in record order
    pub fn dates(&self) -> Vec<String> {
        self.records.iter().map(WeatherRecord::date_label).collect()
    }

    /// Maximum temperature, `0.0` for an empty set
    pub fn max_temperature(&self) -> f64 {
        max_of(self.records.iter().map(|r| r.temperature))
    }

    /// Maximum humidity, `0.0` for an empty set
    pub fn max_humidity(&self) -> f64 {
        max_of(self.records.iter().map(|r| r.humidity))
    }

    /// Distinct temperatures in first-seen order
    pub fn distinct_temperatures(&self) -> Vec<f64> {
        let mut out: Vec<f64> = Vec::with_capacity(self.records.len());
        for record in self.records.iter() {
            if !out.iter().any(|t| t.to_bits() == record.temperature.to_bits()) {
                out.push(record.temperature);
            }
        }
        out
    }
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a WeatherRecord;
    type IntoIter = std::slice::Iter<'a, WeatherRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// NaN samples are ignored; an empty input yields `0.0`
fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        .unwrap_or(0.0)
}
