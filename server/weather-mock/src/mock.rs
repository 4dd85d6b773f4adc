//! Synthetic hourly feed for demo/development

use std::f64::consts::PI;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Deserialize;

use weather_core::{ForecastResponse, HourlySeries, DATE_FORMAT};

/// Days served when the query names no range
pub const DEFAULT_DAYS: i64 = 10;

/// Upper bound on the served range
pub const MAX_DAYS: i64 = 92;

const HOURS_PER_DAY: u32 = 24;

/// Query string accepted on the feed routes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub hourly: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl FeedQuery {
    /// Inclusive day range, defaulting to [`DEFAULT_DAYS`] from 2024-05-01
    pub fn range(&self) -> (NaiveDate, NaiveDate) {
        let parse = |s: &Option<String>| {
            s.as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
        };

        let start = parse(&self.start_date)
            .or_else(|| NaiveDate::from_ymd_opt(2024, 5, 1))
            .unwrap_or_default();
        let end = parse(&self.end_date)
            .unwrap_or(start + Duration::days(DEFAULT_DAYS - 1));

        let (start, end) = if end < start { (end, start) } else { (start, end) };
        let end = end.min(start + Duration::days(MAX_DAYS - 1));
        (start, end)
    }
}

struct MockClimate {
    /// Daily mean temperature, °C
    mean: f64,
    /// Half of the diurnal swing, °C
    swing: f64,
    /// Day-to-day drift of the mean, °C
    drift: f64,
    /// Probability of a null sample
    gap_rate: f64,
}

impl MockClimate {
    fn for_latitude(latitude: f64) -> Self {
        Self {
            mean: 24.0 - latitude.abs() * 0.25,
            swing: 5.0,
            drift: 1.5,
            gap_rate: 0.02,
        }
    }

    /// Hourly temperature and humidity for one day
    fn day(&self, rng: &mut impl Rng, mean: f64) -> Vec<(Option<f64>, Option<f64>)> {
        (0..HOURS_PER_DAY)
            .map(|hour| {
                // Coolest around 04:00, warmest around 16:00
                let phase = (f64::from(hour) - 10.0) / f64::from(HOURS_PER_DAY) * 2.0 * PI;
                let temp = mean + self.swing * phase.sin() + rng.gen_range(-0.4..0.4);
                let hum = (70.0 - 2.5 * (temp - mean) + rng.gen_range(-3.0..3.0)).clamp(5.0, 100.0);

                let gap = rng.r#gen::<f64>() < self.gap_rate;
                if gap {
                    (None, Some(round(hum, 0)))
                } else {
                    (Some(round(temp, 1)), Some(round(hum, 0)))
                }
            })
            .collect()
    }
}

fn round(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Build an Open-Meteo shaped response for `query`
pub fn generate_feed(query: &FeedQuery) -> ForecastResponse {
    let mut rng = rand::thread_rng();
    let latitude = query.latitude.unwrap_or(52.52);
    let longitude = query.longitude.unwrap_or(13.41);
    let climate = MockClimate::for_latitude(latitude);
    let (start, end) = query.range();

    let mut time = Vec::new();
    let mut temperature = Vec::new();
    let mut humidity = Vec::new();

    let mut mean = climate.mean;
    let mut date = start;
    while date <= end {
        for (hour, (t, h)) in climate.day(&mut rng, mean).into_iter().enumerate() {
            time.push(format!("{}T{:02}:00", date.format(DATE_FORMAT), hour));
            temperature.push(t);
            humidity.push(h);
        }
        mean += rng.gen_range(-climate.drift..climate.drift);
        date += Duration::days(1);
    }

    tracing::debug!("Generated {} hourly samples for {}..={}", time.len(), start, end);

    ForecastResponse {
        latitude: Some(latitude),
        longitude: Some(longitude),
        timezone: Some("GMT".to_string()),
        hourly: Some(HourlySeries::new(time, temperature, humidity)),
    }
}
