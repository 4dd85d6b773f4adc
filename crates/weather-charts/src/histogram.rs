//! Interactive histogram of daily temperatures

use weather_core::{colors, RecordSet};

use crate::{
    axes::{add_axes, add_title, AxisScale},
    chartkit::{BandScale, Headroom, LinearScale, Scale},
    dispatch::{ChartKind, ChartRenderer},
    scene::{Action, Animation, Geometry, Handlers, Property, Scene, Style},
    GROW_DURATION_MS, HOVER_FADE_MS, PLOT_HEIGHT, PLOT_WIDTH,
};

const BAND_PADDING: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default)]
pub struct Histogram;

impl ChartRenderer for Histogram {
    fn kind(&self) -> ChartKind {
        ChartKind::Histogram
    }

    fn render(&self, records: &RecordSet) -> Scene {
        let kind = self.kind();
        let mut scene = Scene::new(kind.class());

        let x = BandScale::new(records.dates())
            .range(0.0, PLOT_WIDTH)
            .padding_uniform(BAND_PADDING);
        let y = LinearScale::zero_based(records.max_temperature(), Headroom::Peak20)
            .range(PLOT_HEIGHT, 0.0);

        for (i, record) in records.iter().enumerate() {
            let Some(left) = x.scale(i) else { continue };
            let top = y.scale(record.temperature);
            let height = PLOT_HEIGHT - top;

            // The hover color stays after the pointer leaves
            let handlers = Handlers::tooltip(record).on_enter(Action::SetFill {
                color: colors::HISTOGRAM_HOVER,
                duration_ms: HOVER_FADE_MS,
            });

            let bar = scene.shape(
                Geometry::Rect { x: left, y: top, width: x.bandwidth(), height },
                Style::filled(colors::HISTOGRAM).with_class("bar"),
                handlers,
            );
            scene.animate(Animation::new(bar, Property::Y, PLOT_HEIGHT, top, GROW_DURATION_MS));
            scene.animate(Animation::new(bar, Property::Height, 0.0, height, GROW_DURATION_MS));
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
