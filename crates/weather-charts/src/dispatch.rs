//! Chart selection and render dispatch

use weather_core::RecordSet;

use crate::{
    bar::BarChart, heatmap::Heatmap, histogram::Histogram, line::LineChart, pie::PieChart,
    scatter::ScatterPlot, scene::Scene, surface::Surface,
};

/// The six interchangeable visualizations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
    Pie,
    Heatmap,
    Histogram,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        Self::Bar,
        Self::Pie,
        Self::Histogram,
        Self::Heatmap,
        Self::Line,
        Self::Scatter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Pie => "pie",
            Self::Heatmap => "heatmap",
            Self::Histogram => "histogram",
        }
    }

    /// Trigger control label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bar => "Bar Chart",
            Self::Line => "Line Chart",
            Self::Scatter => "Scatter Plot",
            Self::Pie => "Pie Chart",
            Self::Heatmap => "Heatmap",
            Self::Histogram => "Histogram",
        }
    }

    /// Title drawn inside the chart
    pub fn title(&self) -> &'static str {
        match self {
            Self::Histogram => "Interactive Histogram",
            other => other.label(),
        }
    }

    /// CSS class of the chart's svg element
    pub fn class(&self) -> &'static str {
        match self {
            Self::Scatter => "scatter-plot",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What currently occupies the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartSelection {
    #[default]
    None,
    Showing(ChartKind),
}

impl ChartSelection {
    pub fn kind(&self) -> Option<ChartKind> {
        match self {
            Self::None => None,
            Self::Showing(kind) => Some(*kind),
        }
    }

    pub fn is_showing(&self, kind: ChartKind) -> bool {
        self.kind() == Some(kind)
    }
}

// ============================================================================
// STRATEGY PATTERN: Chart Renderer
// ============================================================================

/// Pure mapping from records to a chart scene
pub trait ChartRenderer: Send + Sync {
    fn kind(&self) -> ChartKind;

    fn render(&self, records: &RecordSet) -> Scene;
}

pub fn renderer_for(kind: ChartKind) -> &'static dyn ChartRenderer {
    match kind {
        ChartKind::Bar => &BarChart,
        ChartKind::Line => &LineChart,
        ChartKind::Scatter => &ScatterPlot,
        ChartKind::Pie => &PieChart,
        ChartKind::Heatmap => &Heatmap,
        ChartKind::Histogram => &Histogram,
    }
}

/// Clear the surface, then draw `kind` from `records`.
///
/// The previous selection is always discarded first, so repeated or
/// alternating calls never leave more than one chart on the surface.
pub fn render_chart<S: Surface + ?Sized>(
    surface: &mut S,
    kind: ChartKind,
    records: &RecordSet,
) -> ChartSelection {
    surface.clear();

    let scene = renderer_for(kind).render(records);
    scene.draw_onto(surface);

    tracing::debug!(
        "Rendered {} chart: {} records, {} nodes, {} animations",
        kind,
        records.len(),
        scene.node_count(),
        scene.animations.len()
    );

    ChartSelection::Showing(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, scene::TextRole, surface::SceneSurface};

    #[test]
    fn test_renderer_for_matches_kind() {
        for kind in ChartKind::ALL {
            assert_eq!(renderer_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_render_chart_returns_selection() {
        let mut surface = SceneSurface::new();
        let selection = render_chart(&mut surface, ChartKind::Pie, &fixtures::sample());
        assert_eq!(selection, ChartSelection::Showing(ChartKind::Pie));
        assert!(selection.is_showing(ChartKind::Pie));
        assert_eq!(surface.scene().map(|s| s.class), Some("pie"));
    }

    #[test]
    fn test_rendering_twice_leaves_one_scene() {
        let records = fixtures::sample();
        for kind in ChartKind::ALL {
            let mut surface = SceneSurface::new();
            render_chart(&mut surface, kind, &records);
            let once = surface.node_count();
            render_chart(&mut surface, kind, &records);

            assert_eq!(surface.node_count(), once, "{kind} accumulated nodes");
            let titles = surface
                .scene()
                .map_or(0, |s| s.texts_with_role(TextRole::Title).count());
            assert_eq!(titles, 1);
        }
    }

    #[test]
    fn test_switching_removes_previous_scene() {
        let records = fixtures::sample();
        for from in ChartKind::ALL {
            for to in ChartKind::ALL {
                let mut surface = SceneSurface::new();
                render_chart(&mut surface, from, &records);
                render_chart(&mut surface, to, &records);

                let expected = renderer_for(to).render(&records);
                assert_eq!(surface.scene(), Some(&expected), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_empty_records_render_axes_and_title() {
        let empty = RecordSet::empty();
        for kind in ChartKind::ALL {
            let mut surface = SceneSurface::new();
            let selection = render_chart(&mut surface, kind, &empty);
            assert_eq!(selection.kind(), Some(kind));

            let scene = surface.scene().unwrap();
            assert_eq!(scene.title(), Some(kind.title()));
            assert_eq!(scene.data_shapes().count(), 0);
            if kind != ChartKind::Pie {
                assert_eq!(scene.texts_with_role(TextRole::AxisTitle).count(), 2);
            }
        }
    }

    #[test]
    fn test_default_selection_is_none() {
        assert_eq!(ChartSelection::default().kind(), None);
    }
}
