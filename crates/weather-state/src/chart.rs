//! Reactive chart panel state: surface, selection and the shared tooltip

use leptos::prelude::*;
use weather_charts::{render_chart, ChartKind, ChartSelection, SceneSurface, Tooltip};
use weather_core::RecordSet;

#[derive(Clone, Copy)]
pub struct ChartState {
    /// The single drawing surface
    pub surface: RwSignal<SceneSurface>,
    /// Chart currently on the surface
    pub selection: RwSignal<ChartSelection>,
    /// The single tooltip
    pub tooltip: RwSignal<Tooltip>,
}

impl ChartState {
    pub fn new() -> Self {
        Self {
            surface: RwSignal::new(SceneSurface::new()),
            selection: RwSignal::new(ChartSelection::None),
            tooltip: RwSignal::new(Tooltip::hidden()),
        }
    }

    /// Replace whatever is drawn with `kind`
    pub fn show(&self, kind: ChartKind, records: &RecordSet) {
        let mut selection = ChartSelection::None;
        self.surface.update(|surface| {
            selection = render_chart(surface, kind, records);
        });
        self.tooltip.update(Tooltip::hide);
        self.selection.set(selection);
    }

    /// Redraw the current chart, or `fallback` when nothing is shown yet
    pub fn refresh(&self, records: &RecordSet, fallback: ChartKind) {
        let kind = self.selection.get_untracked().kind().unwrap_or(fallback);
        self.show(kind, records);
    }

    pub fn current(&self) -> Option<ChartKind> {
        self.selection.get().kind()
    }

    pub fn is_showing(&self, kind: ChartKind) -> bool {
        self.selection.get().is_showing(kind)
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weather_core::WeatherRecord;

    fn records() -> RecordSet {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        RecordSet::from_records([WeatherRecord::new(date, 10.0, 50.0)])
    }

    #[test]
    fn test_show_then_switch() {
        let chart = ChartState::new();
        chart.show(ChartKind::Bar, &records());
        assert!(chart.is_showing(ChartKind::Bar));

        chart.show(ChartKind::Heatmap, &records());
        assert_eq!(chart.current(), Some(ChartKind::Heatmap));
        let class = chart.surface.with(|s| s.scene().map(|scene| scene.class));
        assert_eq!(class, Some("heatmap"));
    }

    #[test]
    fn test_refresh_keeps_selection() {
        let chart = ChartState::new();
        chart.refresh(&RecordSet::empty(), ChartKind::Bar);
        assert_eq!(chart.current(), Some(ChartKind::Bar));

        chart.show(ChartKind::Pie, &RecordSet::empty());
        chart.refresh(&records(), ChartKind::Bar);
        assert_eq!(chart.current(), Some(ChartKind::Pie));
    }

    #[test]
    fn test_show_hides_open_tooltip() {
        let chart = ChartState::new();
        let records = records();
        chart.show(ChartKind::Line, &records);
        chart.tooltip.update(|t| t.show(records.get(0).unwrap()));
        assert!(chart.tooltip.with(Tooltip::is_visible));

        chart.show(ChartKind::Bar, &records);
        assert!(!chart.tooltip.with(Tooltip::is_visible));
        assert!(!chart.surface.with(SceneSurface::is_empty));
    }
}
