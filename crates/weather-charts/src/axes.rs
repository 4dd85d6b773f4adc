//! Axis and title helpers shared by the cartesian charts

use weather_core::colors;

use crate::{
    chartkit::{BandScale, LinearScale, PathBuilder, Scale},
    scene::{Geometry, Handlers, Scene, Style, TextAnchor, TextBuilder, TextRole},
    PLOT_HEIGHT, TITLE_X, TITLE_Y,
};

/// Default tick count for linear axes
pub const LINEAR_TICKS: usize = 10;
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const TICK_FONT_SIZE: f64 = 10.0;
const AXIS_TITLE_FONT_SIZE: f64 = 14.0;
const TITLE_FONT_SIZE: f64 = 18.0;

/// Bottom axis group origin
pub const X_AXIS_ORIGIN: (f64, f64) = (10.0, 400.0);
/// Axis title offset inside the bottom axis group
const X_TITLE_OFFSET: (f64, f64) = (400.0, 40.0);
/// Distance of the rotated y-axis title left of the axis
const Y_TITLE_OFFSET: f64 = -60.0;

/// Scale driving an axis
#[derive(Debug, Clone, Copy)]
pub enum AxisScale<'a> {
    Band(&'a BandScale),
    Linear(&'a LinearScale),
}

impl AxisScale<'_> {
    /// (position, label) for each tick
    pub fn ticks(&self) -> Vec<(f64, String)> {
        match self {
            Self::Band(band) => band
                .keys()
                .iter()
                .enumerate()
                .filter_map(|(i, key)| band.scale_center(i).map(|p| (p, key.clone())))
                .collect(),
            Self::Linear(linear) => linear
                .tick_labels(LINEAR_TICKS)
                .into_iter()
                .map(|(value, label)| (linear.scale(value), label))
                .collect(),
        }
    }

    pub fn extent(&self) -> (f64, f64) {
        match self {
            Self::Band(band) => band.range_bounds(),
            Self::Linear(linear) => linear.range_bounds(),
        }
    }
}

fn axis_style() -> Style {
    Style::stroked(colors::AXIS, 1.0).with_class("domain")
}

/// Bottom and left axes with their titles
pub fn add_axes(
    scene: &mut Scene,
    x: AxisScale<'_>,
    y: AxisScale<'_>,
    x_title: &str,
    y_title: &str,
) {
    add_bottom_axis(scene, x, x_title);
    add_left_axis(scene, y, y_title);
}

fn add_bottom_axis(scene: &mut Scene, scale: AxisScale<'_>, title: &str) {
    let (ox, oy) = X_AXIS_ORIGIN;
    let (r0, r1) = scale.extent();

    let domain = PathBuilder::new()
        .move_to(ox + r0, oy + TICK_SIZE)
        .line_to(ox + r0, oy)
        .line_to(ox + r1, oy)
        .line_to(ox + r1, oy + TICK_SIZE)
        .build();
    scene.shape(Geometry::Path { d: domain }, axis_style(), Handlers::none());

    for (pos, label) in scale.ticks() {
        let x = ox + pos;
        scene.shape(
            Geometry::Line { x1: x, y1: oy, x2: x, y2: oy + TICK_SIZE },
            Style::stroked(colors::AXIS, 1.0).with_class("tick"),
            Handlers::none(),
        );
        scene.text(
            TextBuilder::new(TextRole::Tick, x, oy + TICK_SIZE + TICK_PADDING, label)
                .anchor(TextAnchor::Middle)
                .font_size(TICK_FONT_SIZE)
                .fill(colors::TEXT)
                .dy("0.71em"),
        );
    }

    scene.text(
        TextBuilder::new(TextRole::AxisTitle, ox + X_TITLE_OFFSET.0, oy + X_TITLE_OFFSET.1, title)
            .anchor(TextAnchor::Middle)
            .font_size(AXIS_TITLE_FONT_SIZE)
            .fill(colors::TEXT),
    );
}

fn add_left_axis(scene: &mut Scene, scale: AxisScale<'_>, title: &str) {
    let (r0, r1) = scale.extent();

    let domain = PathBuilder::new()
        .move_to(-TICK_SIZE, r0)
        .line_to(0.0, r0)
        .line_to(0.0, r1)
        .line_to(-TICK_SIZE, r1)
        .build();
    scene.shape(Geometry::Path { d: domain }, axis_style(), Handlers::none());

    for (pos, label) in scale.ticks() {
        scene.shape(
            Geometry::Line { x1: -TICK_SIZE, y1: pos, x2: 0.0, y2: pos },
            Style::stroked(colors::AXIS, 1.0).with_class("tick"),
            Handlers::none(),
        );
        scene.text(
            TextBuilder::new(TextRole::Tick, -(TICK_SIZE + TICK_PADDING), pos, label)
                .anchor(TextAnchor::End)
                .font_size(TICK_FONT_SIZE)
                .fill(colors::TEXT)
                .dy("0.32em"),
        );
    }

    // Rotated frame: x runs upward, so -height/2 is the vertical middle
    scene.text(
        TextBuilder::new(TextRole::AxisTitle, -PLOT_HEIGHT / 2.0, Y_TITLE_OFFSET, title)
            .anchor(TextAnchor::Middle)
            .font_size(AXIS_TITLE_FONT_SIZE)
            .fill(colors::TEXT)
            .rotate(-90.0),
    );
}

/// Chart title centered above the plot
pub fn add_title(scene: &mut Scene, title: &str) {
    scene.text(
        TextBuilder::new(TextRole::Title, TITLE_X, TITLE_Y, title)
            .anchor(TextAnchor::Middle)
            .font_size(TITLE_FONT_SIZE)
            .fill(colors::TEXT),
    );
}
