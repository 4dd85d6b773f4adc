//! Line chart through each day's temperature

use weather_core::{colors, RecordSet};

use crate::{
    axes::{add_axes, add_title, AxisScale},
    chartkit::{BandScale, Headroom, LinePath, LinearScale, PathGenerator, Scale},
    dispatch::{ChartKind, ChartRenderer},
    scene::{Action, Geometry, Handlers, Scene, Style, TextAnchor, TextBuilder, TextRole},
    PLOT_HEIGHT, PLOT_WIDTH,
};

const BAND_PADDING: f64 = 0.1;
pub const POINT_RADIUS: f64 = 5.0;
pub const POINT_HOVER_RADIUS: f64 = 8.0;
const LABEL_OFFSET_X: f64 = 16.0;
const LABEL_FONT_SIZE: f64 = 12.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct LineChart;

impl ChartRenderer for LineChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn render(&self, records: &RecordSet) -> Scene {
        let kind = self.kind();
        let mut scene = Scene::new(kind.class());

        let x = BandScale::new(records.dates())
            .range(0.0, PLOT_WIDTH)
            .padding_uniform(BAND_PADDING);
        let y = LinearScale::zero_based(records.max_temperature(), Headroom::Peak20)
            .range(PLOT_HEIGHT, 0.0);

        let points: Vec<(f64, f64)> = records
            .iter()
            .enumerate()
            .filter_map(|(i, r)| x.scale_center(i).map(|cx| (cx, y.scale(r.temperature))))
            .collect();

        scene.shape(
            Geometry::Path { d: LinePath.generate(&points) },
            Style::stroked(colors::LINE_STROKE, 1.0).with_class("line"),
            Handlers::none(),
        );

        for (record, &(cx, cy)) in records.iter().zip(&points) {
            scene.shape(
                Geometry::Circle { cx, cy, r: POINT_RADIUS },
                Style::filled(colors::LINE_POINT).with_class("point"),
                Handlers::tooltip(record)
                    .on_enter(Action::SetRadius(POINT_HOVER_RADIUS))
                    .on_leave(Action::SetRadius(POINT_RADIUS)),
            );
        }

        for (record, &(cx, cy)) in records.iter().zip(&points) {
            scene.text(
                TextBuilder::new(
                    TextRole::DataLabel,
                    cx + LABEL_OFFSET_X,
                    cy,
                    format!("Temp: {}", record.temperature_str()),
                )
                .anchor(TextAnchor::Start)
                .font_size(LABEL_FONT_SIZE)
                .fill(colors::LABEL),
            );
        }

        add_axes(
            &mut scene,
            AxisScale::Band(&x),
            AxisScale::Linear(&y),
            "Date",
            "Temperature (°C)",
        );
        add_title(&mut scene, kind.title());
        scene
    }
}
