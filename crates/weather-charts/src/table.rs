//! Tabular restatement of the record set

use weather_core::{RecordSet, WeatherRecord};

pub const TABLE_HEADERS: [&str; 3] = ["Date", "Temperature (°C)", "Humidity (%)"];

/// Header plus one row of cell text per record
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub headers: [&'static str; 3],
    pub rows: Vec<[String; 3]>,
}

impl TableModel {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for TableModel {
    fn default() -> Self {
        Self {
            headers: TABLE_HEADERS,
            rows: Vec::new(),
        }
    }
}

fn row(record: &WeatherRecord) -> [String; 3] {
    [record.date_label(), record.temperature_str(), record.humidity_str()]
}

/// Build a fresh table; the previous one is simply replaced by the caller
pub fn render_table(records: &RecordSet) -> TableModel {
    TableModel {
        headers: TABLE_HEADERS,
        rows: records.iter().map(row).collect(),
    }
}
