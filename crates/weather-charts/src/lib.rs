//! # weather-charts
//!
//! D3.js-style SVG charting for daily weather records, built with Leptos.
//!
//! ## Architecture
//!
//! Renderers are headless. Each one turns a [`RecordSet`](weather_core::RecordSet)
//! into a [`Scene`] of shape/text descriptors plus declarative animations; a
//! [`Surface`] receives the scene and [`SceneView`] draws it as SVG.
//!
//! Uses Strategy pattern for:
//! - Scale computation (linear, band, color, ordinal)
//! - Path generation (line, arc)
//! - Chart rendering ([`ChartRenderer`])
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, paths, pie layout
//! - `scene` / `surface` - Scene graph and the drawing surface capability
//! - `axes` / `interaction` - Axes, titles, tooltip and legend
//! - `bar`, `line`, `scatter`, `pie`, `heatmap`, `histogram` - Chart renderers
//! - `dispatch` - Chart selection state machine
//! - `table` - Tabular restatement of the records
//! - `view` - Leptos SVG view of a scene

pub mod axes;
pub mod bar;
pub mod chartkit;
pub mod dispatch;
pub mod heatmap;
pub mod histogram;
pub mod interaction;
pub mod line;
pub mod pie;
pub mod scatter;
pub mod scene;
pub mod surface;
pub mod table;
pub mod view;

pub use axes::*;
pub use bar::*;
pub use chartkit::*;
pub use dispatch::*;
pub use heatmap::*;
pub use histogram::*;
pub use interaction::*;
pub use line::*;
pub use pie::*;
pub use scatter::*;
pub use scene::*;
pub use surface::*;
pub use table::*;
pub use view::*;

// Re-export colors from weather-core for convenience
pub use weather_core::colors;

/// Logical canvas size every chart draws into
pub const CANVAS_WIDTH: f64 = 830.0;
pub const CANVAS_HEIGHT: f64 = 450.0;

/// Plot area spanned by the scales
pub const PLOT_WIDTH: f64 = 800.0;
pub const PLOT_HEIGHT: f64 = 400.0;

/// Chart title anchor
pub const TITLE_X: f64 = 400.0;
pub const TITLE_Y: f64 = 20.0;

/// Bar and histogram growth
pub const GROW_DURATION_MS: u32 = 800;
/// Pie sweep
pub const SWEEP_DURATION_MS: u32 = 1000;
/// Histogram hover recolor
pub const HOVER_FADE_MS: u32 = 200;
