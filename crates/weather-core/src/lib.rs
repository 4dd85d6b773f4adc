//! # weather-core
//!
//! Core domain types for the Weather Chart Explorer.
//! Implements Strategy pattern for value formatting.

pub mod error;
pub mod normalize;
pub mod payload;
pub mod record;

pub use error::*;
pub use normalize::*;
pub use payload::*;
pub use record::*;

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for measurement formatting
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Fixed decimal places, used for axis ticks
#[derive(Debug, Clone)]
pub struct FixedFormatter {
    pub decimals: usize,
}

impl Default for FixedFormatter {
    fn default() -> Self {
        Self { decimals: 1 }
    }
}

impl ValueFormatter for FixedFormatter {
    fn format(&self, value: f64) -> String {
        let rounded = format!("{:.prec$}", value, prec = self.decimals);
        // "-0.0" style output for values that round to zero
        if rounded.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
            rounded.trim_start_matches('-').to_string()
        } else {
            rounded
        }
    }
}

/// Format a measurement the way it appears in labels and the table
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const BAR: &str = "#00246B";
    pub const LINE_STROKE: &str = "#00246B";
    pub const LINE_POINT: &str = "#e74c3c";
    pub const SCATTER_POINT: &str = "#00246B";
    pub const HISTOGRAM: &str = "#3498db";
    pub const HISTOGRAM_HOVER: &str = "#2980b9";
    pub const HEAT_LOW: &str = "#00246B";
    pub const HEAT_HIGH: &str = "#CADCFC";
    pub const LABEL: &str = "#ffffff";
    pub const LEGEND_TEXT: &str = "#00246B";
    pub const AXIS: &str = "currentColor";
    pub const TEXT: &str = "currentColor";
    pub const TABLE_HEADER: &str = "rgb(76 104 159)";
    pub const TABLE_HEADER_TEXT: &str = "white";
    pub const TABLE_HEADER_BORDER: &str = "#ddd";
    pub const TABLE_CELL_BORDER: &str = "black";
    pub const ERROR: &str = "#ef4444";

    /// Categorical palette for pie slices and legend swatches
    pub const CATEGORY10: [&str; 10] = [
        "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
        "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
    ];
}
