//! # weather-components
//!
//! Leptos UI components for the Weather Chart Explorer: the chart panel
//! and its trigger controls, the shared tooltip, the table and the status bar.

pub mod controls;
pub mod explorer;
pub mod table;
pub mod tooltip;

pub use controls::*;
pub use explorer::*;
pub use table::*;
pub use tooltip::*;

/// Fixed container identifiers
pub const CHART_CONTAINER_ID: &str = "chart-container";
pub const TOOLTIP_ID: &str = "tooltip";
pub const TABLE_CONTAINER_ID: &str = "weather-table";
