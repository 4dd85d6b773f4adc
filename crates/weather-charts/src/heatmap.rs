//! Heatmap: one cell per day, colored by temperature

use weather_core::{colors, format_value, RecordSet};

use crate::{
    axes::{add_axes, add_title, AxisScale},
    chartkit::{BandScale, ColorScale},
    dispatch::{ChartKind, ChartRenderer},
    scene::{Geometry, Handlers, Scene, Style, TextAnchor, TextBuilder, TextRole},
    PLOT_HEIGHT, PLOT_WIDTH,
};

const BAND_PADDING: f64 = 0.1;
pub const HEATMAP_CAPTION: &str = "Temperature based on color intensity";
const CAPTION_POSITION: (f64, f64) = (400.0, 430.0);
const CAPTION_FONT_SIZE: f64 = 12.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Heatmap;

impl Heatmap {
    pub fn color_scale(&self, records: &RecordSet) -> ColorScale {
        ColorScale::between(colors::HEAT_LOW, colors::HEAT_HIGH)
            .domain(0.0, records.max_temperature())
    }
}

impl ChartRenderer for Heatmap {
    fn kind(&self) -> ChartKind {
        ChartKind::Heatmap
    }

    fn render(&self, records: &RecordSet) -> Scene {
        let kind = self.kind();
        let mut scene = Scene::new(kind.class());

        let x = BandScale::new(records.dates())
            .range(0.0, PLOT_WIDTH)
            .padding_uniform(BAND_PADDING);
        // One row per distinct temperature, first value at the bottom
        let y = BandScale::new(records.distinct_temperatures().into_iter().map(format_value))
            .range(PLOT_HEIGHT, 0.0);
        let color = self.color_scale(records);

        for (i, record) in records.iter().enumerate() {
            let (Some(left), Some(top)) = (x.scale(i), y.position(&record.temperature_str())) else {
                continue;
            };

            scene.shape(
                Geometry::Rect {
                    x: left,
                    y: top,
                    width: x.bandwidth(),
                    height: y.bandwidth(),
                },
                Style::filled(color.color(record.temperature)).with_class("cell"),
                Handlers::tooltip(record),
            );
        }

        add_axes(
            &mut scene,
            AxisScale::Band(&x),
            AxisScale::Band(&y),
            "Date",
            "Temperature (°C)",
        );
        add_title(&mut scene, kind.title());

        scene.text(
            TextBuilder::new(TextRole::Caption, CAPTION_POSITION.0, CAPTION_POSITION.1, HEATMAP_CAPTION)
                .anchor(TextAnchor::Middle)
                .font_size(CAPTION_FONT_SIZE)
                .fill(colors::LABEL),
        );
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn cells(scene: &Scene) -> Vec<(f64, f64, f64, String)> {
        scene
            .data_shapes()
            .map(|s| match s.geometry {
                Geometry::Rect { y, width, height, .. } => {
                    (y, width, height, s.style.fill.clone().unwrap_or_default())
                }
                ref other => panic!("unexpected {}", other.kind_name()),
            })
            .collect()
    }

    #[test]
    fn test_cells_stack_by_temperature() {
        let scene = Heatmap.render(&fixtures::sample());
        let cells = cells(&scene);
        assert_eq!(cells.len(), 3);

        // Three distinct values over [400, 0] in first-seen order: first key at the bottom
        let ys: Vec<f64> = cells.iter().map(|c| c.0).collect();
        assert!((ys[0] - 800.0 / 3.0).abs() < 1e-9);
        assert!((ys[1] - 400.0 / 3.0).abs() < 1e-9);
        assert!(ys[2].abs() < 1e-9);
        assert!(cells.iter().all(|c| (c.2 - 400.0 / 3.0).abs() < 1e-9));
    }

    #[test]
    fn test_color_intensity_tracks_temperature() {
        let scene = Heatmap.render(&fixtures::sample());
        let fills: Vec<String> = cells(&scene).into_iter().map(|c| c.3).collect();

        // Peak maps to the light end of the scale
        assert_eq!(fills[1], "rgb(202, 220, 252)");
        assert_ne!(fills[0], fills[2]);
    }

    #[test]
    fn test_repeated_temperature_shares_row() {
        let records = RecordSet::from_records([
            fixtures::record(1, 12.0, 40.0),
            fixtures::record(2, 12.0, 45.0),
        ]);
        let scene = Heatmap.render(&records);
        let ys: Vec<f64> = cells(&scene).iter().map(|c| c.0).collect();
        assert_eq!(ys, vec![0.0, 0.0]);
        assert_eq!(cells(&scene)[0].2, 400.0);
    }

    #[test]
    fn test_cells_carry_records() {
        let record = fixtures::record(1, 3.5, 90.0);
        let scene = Heatmap.render(&RecordSet::from_records([record.clone()]));
        let cell = scene.data_shapes().next().unwrap();
        assert_eq!(cell.handlers.tooltip_record(), Some(&record));
    }

    #[test]
    fn test_caption_and_empty_records() {
        let scene = Heatmap.render(&RecordSet::empty());
        assert!(cells(&scene).is_empty());
        assert_eq!(scene.title(), Some("Heatmap"));

        let caption = scene.texts_with_role(TextRole::Caption).next().unwrap();
        assert_eq!(caption.content, HEATMAP_CAPTION);
        assert_eq!((caption.x, caption.y), (400.0, 430.0));
    }
}
