//! Pie chart: one slice per day, sized by temperature

use weather_core::RecordSet;

use crate::{
    axes::add_title,
    chartkit::{pie_layout, OrdinalPalette},
    dispatch::{ChartKind, ChartRenderer},
    interaction::add_legend,
    scene::{Animation, Geometry, Handlers, Property, Scene, Style},
    SWEEP_DURATION_MS,
};

pub const PIE_CENTER: (f64, f64) = (400.0, 200.0);
pub const PIE_RADIUS: f64 = 150.0;

#[derive(Debug, Clone, Copy)]
pub struct PieChart;

impl PieChart {
    pub fn palette(&self) -> OrdinalPalette {
        OrdinalPalette::category10()
    }
}

impl ChartRenderer for PieChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn render(&self, records: &RecordSet) -> Scene {
        let kind = self.kind();
        let mut scene = Scene::new(kind.class());
        let palette = self.palette();

        let temperatures: Vec<f64> = records.iter().map(|r| r.temperature).collect();
        let (cx, cy) = PIE_CENTER;

        for (i, (record, (start, end))) in records.iter().zip(pie_layout(&temperatures)).enumerate() {
            let slice = scene.shape(
                Geometry::Arc {
                    cx,
                    cy,
                    inner_radius: 0.0,
                    outer_radius: PIE_RADIUS,
                    start_angle: start,
                    end_angle: end,
                },
                Style::filled(palette.color(i)).with_class("slice"),
                Handlers::tooltip(record),
            );
            scene.animate(Animation::new(slice, Property::StartAngle, 0.0, start, SWEEP_DURATION_MS));
            scene.animate(Animation::new(slice, Property::EndAngle, 0.0, end, SWEEP_DURATION_MS));
        }

        add_legend(&mut scene, records, &palette);
        add_title(&mut scene, kind.title());
        scene
    }
}
