//! Shared tooltip state and the pie legend

use weather_core::{colors, RecordSet, WeatherRecord};

use crate::{
    chartkit::OrdinalPalette,
    scene::{Geometry, Handlers, Scene, Style, TextBuilder, TextRole},
};

/// Legend group origin
pub const LEGEND_ORIGIN: (f64, f64) = (500.0, 50.0);
const LEGEND_ROW_HEIGHT: f64 = 20.0;
const LEGEND_SWATCH: f64 = 10.0;
const LEGEND_LABEL_X: f64 = 20.0;
const LEGEND_FONT_SIZE: f64 = 12.0;

// ============================================================================
// TOOLTIP
// ============================================================================

/// The single tooltip shared by every chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    record: Option<WeatherRecord>,
}

impl Tooltip {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn show(&mut self, record: &WeatherRecord) {
        tracing::trace!("Tooltip shown for {}", record.date_label());
        self.record = Some(record.clone());
    }

    pub fn hide(&mut self) {
        if self.record.take().is_some() {
            tracing::trace!("Tooltip hidden");
        }
    }

    pub fn is_visible(&self) -> bool {
        self.record.is_some()
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        self.record.as_ref()
    }

    /// CSS `display` value for the tooltip element
    pub fn display(&self) -> &'static str {
        if self.is_visible() { "block" } else { "none" }
    }

    pub fn content(&self) -> Option<TooltipContent> {
        self.record.as_ref().map(TooltipContent::from)
    }
}

/// Labelled lines shown inside the tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub lines: Vec<(&'static str, String)>,
}

impl From<&WeatherRecord> for TooltipContent {
    fn from(record: &WeatherRecord) -> Self {
        Self {
            lines: vec![
                ("Date:", record.date_label()),
                ("Temperature:", format!("{} °C", record.temperature_str())),
                ("Humidity:", format!("{} %", record.humidity_str())),
            ],
        }
    }
}

// ============================================================================
// LEGEND
// ============================================================================

/// One swatch and date label per record, stacked top to bottom
pub fn add_legend(scene: &mut Scene, records: &RecordSet, palette: &OrdinalPalette) {
    let (ox, oy) = LEGEND_ORIGIN;

    for (i, record) in records.iter().enumerate() {
        let row_y = oy + i as f64 * LEGEND_ROW_HEIGHT;

        scene.shape(
            Geometry::Rect { x: ox, y: row_y, width: LEGEND_SWATCH, height: LEGEND_SWATCH },
            Style::filled(palette.color(i)).with_class("legend-swatch"),
            Handlers::none(),
        );
        scene.text(
            TextBuilder::new(TextRole::Legend, ox + LEGEND_LABEL_X, row_y + LEGEND_SWATCH, record.date_label())
                .font_size(LEGEND_FONT_SIZE)
                .fill(colors::LEGEND_TEXT)
                .dy("0.3em"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_tooltip_show_hide() {
        let record = fixtures::record(1, 10.0, 50.0);
        let mut tooltip = Tooltip::hidden();
        assert_eq!(tooltip.display(), "none");

        tooltip.show(&record);
        assert!(tooltip.is_visible());
        assert_eq!(tooltip.display(), "block");
        assert_eq!(tooltip.record(), Some(&record));

        tooltip.hide();
        assert!(!tooltip.is_visible());
        assert!(tooltip.content().is_none());
    }

    #[test]
    fn test_tooltip_content_lines() {
        let content = TooltipContent::from(&fixtures::record(2, 12.5, 71.0));
        assert_eq!(
            content.lines,
            vec![
                ("Date:", "2024-05-02".to_string()),
                ("Temperature:", "12.5 °C".to_string()),
                ("Humidity:", "71 %".to_string()),
            ]
        );
    }

    #[test]
    fn test_legend_rows_follow_records() {
        let records = fixtures::sample();
        let mut scene = Scene::new("pie");
        add_legend(&mut scene, &records, &OrdinalPalette::category10());

        let labels: Vec<&str> = scene
            .texts_with_role(TextRole::Legend)
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(labels, vec!["2024-05-01", "2024-05-02", "2024-05-03"]);

        let swatches: Vec<(f64, Option<&str>)> = scene
            .shapes()
            .map(|s| match &s.geometry {
                Geometry::Rect { y, .. } => (*y, s.style.fill.as_deref()),
                other => panic!("unexpected {}", other.kind_name()),
            })
            .collect();
        assert_eq!(
            swatches,
            vec![
                (50.0, Some("#1f77b4")),
                (70.0, Some("#ff7f0e")),
                (90.0, Some("#2ca02c")),
            ]
        );
    }

    #[test]
    fn test_legend_empty_records() {
        let mut scene = Scene::new("pie");
        add_legend(&mut scene, &RecordSet::empty(), &OrdinalPalette::category10());
        assert_eq!(scene.node_count(), 0);
    }
}
