//! Hourly feed → daily record set

use crate::{
    FetchError, ForecastResponse, HourlySeries, RecordSet, Result, WeatherRecord, DATE_FORMAT,
    MAX_RECORDS,
};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Separator between the date and time parts of a feed timestamp
const TIME_SEPARATOR: char = 'T';

/// Decode a raw response body
pub fn parse_payload(body: &str) -> Result<ForecastResponse> {
    Ok(serde_json::from_str(body)?)
}

/// Decode and normalize a raw response body
pub fn normalize_body(body: &str) -> Result<RecordSet> {
    normalize(&parse_payload(body)?)
}

/// Reduce the hourly feed to one record per day.
///
/// The first sample of each date wins and scanning stops once
/// [`MAX_RECORDS`] dates are kept. Samples with a null temperature or
/// humidity are skipped without claiming their date.
pub fn normalize(payload: &ForecastResponse) -> Result<RecordSet> {
    let hourly = payload
        .hourly
        .as_ref()
        .ok_or_else(|| FetchError::malformed("missing `hourly` object"))?;

    let (time, temperature, humidity) = columns(hourly)?;

    let mut seen = HashSet::with_capacity(MAX_RECORDS);
    let mut records = Vec::with_capacity(MAX_RECORDS);

    for ((stamp, temp), hum) in time.iter().zip(temperature).zip(humidity) {
        let date = parse_date(date_part(stamp))?;

        if seen.contains(&date) {
            continue;
        }

        let (Some(temp), Some(hum)) = (*temp, *hum) else {
            tracing::trace!("Skipping incomplete sample at {}", stamp);
            continue;
        };

        seen.insert(date);
        records.push(WeatherRecord::new(date, temp, hum));

        if records.len() == MAX_RECORDS {
            break;
        }
    }

    tracing::debug!(
        "Normalized {} hourly samples into {} daily records",
        time.len(),
        records.len()
    );

    Ok(RecordSet::from_records(records))
}

type Columns<'a> = (&'a [String], &'a [Option<f64>], &'a [Option<f64>]);

fn columns(hourly: &HourlySeries) -> Result<Columns<'_>> {
    let time = hourly
        .time
        .as_deref()
        .ok_or_else(|| FetchError::malformed("missing `hourly.time` array"))?;
    let temperature = hourly
        .temperature_2m
        .as_deref()
        .ok_or_else(|| FetchError::malformed("missing `hourly.temperature_2m` array"))?;
    let humidity = hourly
        .relative_humidity_2m
        .as_deref()
        .ok_or_else(|| FetchError::malformed("missing `hourly.relative_humidity_2m` array"))?;

    if time.len() != temperature.len() || time.len() != humidity.len() {
        return Err(FetchError::malformed(format!(
            "array lengths differ (time={}, temperature_2m={}, relative_humidity_2m={})",
            time.len(),
            temperature.len(),
            humidity.len()
        )));
    }

    Ok((time, temperature, humidity))
}

/// Portion of a timestamp before the time separator (whole string if absent)
pub fn date_part(stamp: &str) -> &str {
    stamp.split(TIME_SEPARATOR).next().unwrap_or(stamp)
}

/// Parse a `YYYY-MM-DD` day key
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| FetchError::malformed(format!("invalid date `{}`: {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hourly feed with `per_day` samples on each of `days` consecutive days
    fn feed(days: u32, per_day: u32) -> ForecastResponse {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut time = Vec::new();
        let mut temp = Vec::new();
        let mut hum = Vec::new();

        for d in 0..days {
            let date = start + chrono::Duration::days(d as i64);
            for h in 0..per_day {
                time.push(format!("{}T{:02}:00", date.format(DATE_FORMAT), h));
                temp.push(Some(d as f64 * 10.0 + h as f64));
                hum.push(Some(50.0 + h as f64));
            }
        }

        ForecastResponse::with_hourly(HourlySeries::new(time, temp, hum))
    }

    #[test]
    fn test_fifteen_samples_three_dates() {
        let records = normalize(&feed(3, 5)).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records.dates(), vec!["2024-05-01", "2024-05-02", "2024-05-03"]);
    }

    #[test]
    fn test_first_sample_of_day_wins() {
        let records = normalize(&feed(3, 5)).unwrap();
        let temps: Vec<f64> = records.iter().map(|r| r.temperature).collect();
        assert_eq!(temps, vec![0.0, 10.0, 20.0]);
        assert!(records.iter().all(|r| r.humidity == 50.0));
    }

    #[test]
    fn test_twelve_dates_truncated_to_ten() {
        let records = normalize(&feed(12, 24)).unwrap();
        assert_eq!(records.len(), MAX_RECORDS);
        assert_eq!(records.dates().first().unwrap(), "2024-05-01");
        assert_eq!(records.dates().last().unwrap(), "2024-05-10");
    }

    #[test]
    fn test_count_is_min_of_distinct_dates_and_cap() {
        for days in 1..=14 {
            let records = normalize(&feed(days, 3)).unwrap();
            assert_eq!(records.len(), (days as usize).min(MAX_RECORDS));
        }
    }

    #[test]
    fn test_first_seen_order_not_sorted() {
        let hourly = HourlySeries::new(
            vec![
                "2024-05-03T00:00".into(),
                "2024-05-01T00:00".into(),
                "2024-05-03T01:00".into(),
                "2024-05-02T00:00".into(),
            ],
            vec![Some(3.0), Some(1.0), Some(33.0), Some(2.0)],
            vec![Some(30.0), Some(10.0), Some(31.0), Some(20.0)],
        );
        let records = normalize(&ForecastResponse::with_hourly(hourly)).unwrap();
        assert_eq!(records.dates(), vec!["2024-05-03", "2024-05-01", "2024-05-02"]);
        assert_eq!(records.get(0).unwrap().temperature, 3.0);
    }

    #[test]
    fn test_empty_arrays_give_empty_set() {
        let hourly = HourlySeries::new(vec![], vec![], vec![]);
        let records = normalize(&ForecastResponse::with_hourly(hourly)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_hourly_is_malformed() {
        let err = normalize(&ForecastResponse::default()).unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(_)));
    }

    #[test]
    fn test_missing_array_is_malformed() {
        let hourly = HourlySeries {
            time: Some(vec!["2024-05-01T00:00".into()]),
            temperature_2m: Some(vec![Some(1.0)]),
            relative_humidity_2m: None,
        };
        let err = normalize(&ForecastResponse::with_hourly(hourly)).unwrap_err();
        assert!(err.to_string().contains("relative_humidity_2m"));
    }

    #[test]
    fn test_mismatched_lengths_are_malformed() {
        let hourly = HourlySeries::new(
            vec!["2024-05-01T00:00".into(), "2024-05-01T01:00".into()],
            vec![Some(1.0)],
            vec![Some(1.0), Some(2.0)],
        );
        let err = normalize(&ForecastResponse::with_hourly(hourly)).unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(_)));
    }

    #[test]
    fn test_bad_timestamp_is_malformed() {
        let hourly = HourlySeries::new(
            vec!["yesterday".into()],
            vec![Some(1.0)],
            vec![Some(1.0)],
        );
        assert!(normalize(&ForecastResponse::with_hourly(hourly)).is_err());
    }

    #[test]
    fn test_null_sample_does_not_claim_date() {
        let hourly = HourlySeries::new(
            vec!["2024-05-01T00:00".into(), "2024-05-01T01:00".into()],
            vec![None, Some(7.5)],
            vec![Some(60.0), Some(61.0)],
        );
        let records = normalize(&ForecastResponse::with_hourly(hourly)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records.get(0).unwrap().temperature, 7.5);
        assert_eq!(records.get(0).unwrap().humidity, 61.0);
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2024-05-01T13:00"), "2024-05-01");
        assert_eq!(date_part("2024-05-01"), "2024-05-01");
    }

    #[test]
    fn test_normalize_body_decode_error() {
        assert!(matches!(normalize_body("not json"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_normalize_body() {
        let body = r#"{"hourly":{"time":["2024-05-01T00:00"],"temperature_2m":[10],"relative_humidity_2m":[50]}}"#;
        let records = normalize_body(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records.get(0).unwrap().date_label(), "2024-05-01");
    }
}
