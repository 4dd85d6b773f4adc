//! Scatter plot of humidity against temperature

use weather_core::{colors, RecordSet};

use crate::{
    axes::{add_axes, add_title, AxisScale},
    chartkit::{Headroom, LinearScale, Scale},
    dispatch::{ChartKind, ChartRenderer},
    scene::{Geometry, Handlers, Scene, Style, TextAnchor, TextBuilder, TextRole},
    PLOT_HEIGHT, PLOT_WIDTH,
};

const POINT_RADIUS: f64 = 8.0;
const LABEL_DROP: f64 = 20.0;
const LABEL_FONT_SIZE: f64 = 9.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterPlot;

impl ChartRenderer for ScatterPlot {
    fn kind(&self) -> ChartKind {
        ChartKind::Scatter
    }

    fn render(&self, records: &RecordSet) -> Scene {
        let kind = self.kind();
        let mut scene = Scene::new(kind.class());

        let x = LinearScale::zero_based(records.max_temperature(), Headroom::Exact)
            .range(0.0, PLOT_WIDTH);
        let y = LinearScale::zero_based(records.max_humidity(), Headroom::Peak20)
            .range(PLOT_HEIGHT, 0.0);

        let points: Vec<(f64, f64)> = records
            .iter()
            .map(|r| (x.scale(r.temperature), y.scale(r.humidity)))
            .collect();

        for (record, &(cx, cy)) in records.iter().zip(&points) {
            scene.shape(
                Geometry::Circle { cx, cy, r: POINT_RADIUS },
                Style::filled(colors::SCATTER_POINT).with_class("point"),
                Handlers::tooltip(record),
            );
        }

        for (record, &(cx, cy)) in records.iter().zip(&points) {
            scene.text(
                TextBuilder::new(
                    TextRole::DataLabel,
                    cx,
                    cy + LABEL_DROP,
                    format!("Humidity: {}", record.humidity_str()),
                )
                .anchor(TextAnchor::Middle)
                .font_size(LABEL_FONT_SIZE)
                .fill(colors::LABEL)
                .dy("0.3em"),
            );
        }

        add_axes(
            &mut scene,
            AxisScale::Linear(&x),
            AxisScale::Linear(&y),
            "Temperature (°C)",
            "Humidity (%)",
        );
        add_title(&mut scene, kind.title());
        scene
    }
}
