//! Bar chart: one bottom-anchored bar per day

use weather_core::{colors, RecordSet};

use crate::{
    axes::{add_axes, add_title, AxisScale},
    chartkit::{BandScale, Headroom, LinearScale, Scale},
    dispatch::{ChartKind, ChartRenderer},
    scene::{
        Animation, Completion, Geometry, Handlers, Property, Scene, Style, TextAnchor,
        TextBuilder, TextRole,
    },
    GROW_DURATION_MS, PLOT_HEIGHT, PLOT_WIDTH,
};

const BAND_PADDING: f64 = 0.3;
/// Label offset below the top of its bar
const LABEL_DROP: f64 = 15.0;
const LABEL_FONT_SIZE: f64 = 8.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct BarChart;

impl ChartRenderer for BarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn render(&self, records: &RecordSet) -> Scene {
        let kind = self.kind();
        let mut scene = Scene::new(kind.class());

        let x = BandScale::new(records.dates())
            .range(0.0, PLOT_WIDTH)
            .padding_uniform(BAND_PADDING);
        let y = LinearScale::zero_based(records.max_temperature(), Headroom::Exact)
            .range(PLOT_HEIGHT, 0.0);
        let width = x.bandwidth();

        for (i, record) in records.iter().enumerate() {
            let Some(left) = x.scale(i) else { continue };
            let top = y.scale(record.temperature);
            let height = PLOT_HEIGHT - top;

            let bar = scene.shape(
                Geometry::Rect { x: left, y: top, width, height },
                Style::filled(colors::BAR).with_class("bar"),
                Handlers::tooltip(record),
            );
            scene.animate(Animation::new(bar, Property::Y, PLOT_HEIGHT, top, GROW_DURATION_MS));
            scene.animate(
                Animation::new(bar, Property::Height, 0.0, height, GROW_DURATION_MS)
                    .then(Completion::RevealDeferred),
            );

            scene.text(
                TextBuilder::new(
                    TextRole::DataLabel,
                    left + width / 2.0,
                    top + LABEL_DROP,
                    format!("Temp: {}", record.temperature_str()),
                )
                .anchor(TextAnchor::Middle)
                .font_size(LABEL_FONT_SIZE)
                .fill(colors::LABEL)
                .deferred(),
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
