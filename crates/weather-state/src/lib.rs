//! # weather-state
//!
//! Reactive state management for the Weather Chart Explorer.
//! Uses Leptos signals for surgical DOM updates when data or the chart changes.

pub mod chart;

pub use chart::*;

use leptos::prelude::*;
use weather_charts::{render_table, ChartKind, TableModel};
use weather_core::{FetchError, RecordSet};

/// Chart drawn once data arrives
pub const INITIAL_CHART: ChartKind = ChartKind::Bar;

// ============================================================================
// LOAD STATUS
// ============================================================================

/// Progress of the one startup fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded(usize),
    Failed,
}

impl LoadStatus {
    pub fn label(&self) -> String {
        match self {
            Self::Idle => "Idle".to_string(),
            Self::Loading => "Loading weather data…".to_string(),
            Self::Loaded(0) => "No weather data".to_string(),
            Self::Loaded(n) => format!("{} days loaded", n),
            Self::Failed => "Load failed".to_string(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Idle => "status-idle",
            Self::Loading => "status-loading",
            Self::Loaded(_) => "status-loaded",
            Self::Failed => "status-failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone)]
pub struct AppState {
    /// The session's record set, empty until loaded
    pub records: RwSignal<RecordSet>,
    /// Table view of `records`
    pub table: RwSignal<TableModel>,
    /// Chart panel
    pub chart: ChartState,
    /// Startup fetch progress
    pub status: RwSignal<LoadStatus>,
    /// Current error message
    pub error: RwSignal<Option<String>>,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(RecordSet::empty()),
            table: RwSignal::new(TableModel::default()),
            chart: ChartState::new(),
            status: RwSignal::new(LoadStatus::Idle),
            error: RwSignal::new(None),
        }
    }

    // ========================================================================
    // Data
    // ========================================================================

    pub fn set_loading(&self) {
        self.status.set(LoadStatus::Loading);
    }

    /// Install the fetch outcome. A failure leaves an empty record set;
    /// either way the table is rebuilt and a chart is drawn.
    pub fn apply_load(&self, outcome: Result<RecordSet, FetchError>) {
        let records = match outcome {
            Ok(records) => {
                if records.is_empty() {
                    tracing::warn!("No weather data fetched");
                } else {
                    tracing::info!("Weather data fetched: {} days", records.len());
                }
                self.clear_error();
                self.status.set(LoadStatus::Loaded(records.len()));
                records
            }
            Err(e) => {
                tracing::error!("Failed to fetch weather data ({}): {}", e.kind_label(), e);
                self.set_error(e.to_string());
                self.status.set(LoadStatus::Failed);
                RecordSet::empty()
            }
        };

        self.set_records(records);
    }

    fn set_records(&self, records: RecordSet) {
        self.table.set(render_table(&records));
        self.chart.refresh(&records, INITIAL_CHART);
        self.records.set(records);
    }

    // ========================================================================
    // Chart
    // ========================================================================

    /// Draw `kind` from the current records
    pub fn show_chart(&self, kind: ChartKind) {
        self.records.with_untracked(|records| self.chart.show(kind, records));
    }

    pub fn record_count(&self) -> usize {
        self.records.with(RecordSet::len)
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Set error message
    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
    }

    /// Clear error
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Check if has error
    pub fn has_error(&self) -> bool {
        self.error.get().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.status.get().is_loading()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to component tree
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state.clone());
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weather_core::WeatherRecord;

    fn three_days() -> RecordSet {
        RecordSet::from_records((1..=3).map(|d| {
            let date = NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
            WeatherRecord::new(date, 10.0 + d as f64, 50.0)
        }))
    }

    #[test]
    fn test_load_status_labels() {
        assert_eq!(LoadStatus::Loaded(3).label(), "3 days loaded");
        assert_eq!(LoadStatus::Loaded(0).label(), "No weather data");
        assert!(LoadStatus::Loading.is_loading());
        assert_eq!(LoadStatus::Failed.css_class(), "status-failed");
    }

    #[test]
    fn test_loading_flag_spans_the_fetch() {
        let state = AppState::new();
        assert!(!state.is_loading());
        state.set_loading();
        assert!(state.is_loading());
        state.apply_load(Ok(three_days()));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_successful_load_fills_table_and_draws_bar() {
        let state = AppState::new();
        state.apply_load(Ok(three_days()));

        assert_eq!(state.record_count(), 3);
        assert_eq!(state.table.with(|t| t.rows.len()), 3);
        assert_eq!(state.chart.current(), Some(ChartKind::Bar));
        assert_eq!(state.status.get(), LoadStatus::Loaded(3));
        assert!(!state.has_error());
    }

    #[test]
    fn test_failed_load_degrades_to_empty() {
        let state = AppState::new();
        state.apply_load(Err(FetchError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
        }));

        assert_eq!(state.record_count(), 0);
        assert!(state.table.with(TableModel::is_empty));
        assert_eq!(state.status.get(), LoadStatus::Failed);
        assert_eq!(
            state.error.get().as_deref(),
            Some("HTTP error! status: 500 Internal Server Error")
        );
        // The empty chart is still drawn
        assert_eq!(state.chart.current(), Some(ChartKind::Bar));
    }

    #[test]
    fn test_show_chart_before_data_is_empty_render() {
        let state = AppState::new();
        state.show_chart(ChartKind::Scatter);
        assert_eq!(state.chart.current(), Some(ChartKind::Scatter));
        let shapes = state
            .chart
            .surface
            .with(|s| s.scene().map_or(0, |scene| scene.data_shapes().count()));
        assert_eq!(shapes, 0);
    }
}
