//! # chartkit
//!
//! Core chart primitives: scales, path builders, pie layout.
//! Implements Strategy pattern for flexible scale and rendering behaviors.

use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use weather_core::{FixedFormatter, ValueFormatter};

const ARC_EPSILON: f64 = 1e-12;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for continuous scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Inverse scale (range to domain)
    fn invert(&self, value: f64) -> f64;

    /// Generate tick values
    fn ticks(&self, count: usize) -> Vec<f64>;
}

// ============================================================================
// HEADROOM
// ============================================================================

/// Visual margin above the peak of a value axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Headroom {
    /// Domain ends exactly at the peak (bar, heatmap, color scales)
    #[default]
    Exact,
    /// Domain ends 20% above the peak (line, histogram, scatter)
    Peak20,
}

impl Headroom {
    pub fn factor(&self) -> f64 {
        match self {
            Self::Exact => 1.0,
            Self::Peak20 => 1.2,
        }
    }
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    /// Zero-based value scale: domain `[0, max * headroom]`
    pub fn zero_based(max: f64, headroom: Headroom) -> Self {
        Self::new().domain(0.0, max * headroom.factor())
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Get domain bounds
    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Get range bounds
    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    pub fn is_degenerate(&self) -> bool {
        (self.domain.1 - self.domain.0).abs() < f64::EPSILON
    }

    /// Tick labels matched to the tick step (`0`, `2`, `4` or `0.0`, `0.5`)
    pub fn tick_labels(&self, count: usize) -> Vec<(f64, String)> {
        let (start, stop) = self.domain;
        let formatter = FixedFormatter {
            decimals: tick_decimals(start, stop, count),
        };

        self.ticks(count)
            .into_iter()
            .map(|tick| (tick, formatter.format(tick)))
            .collect()
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if self.is_degenerate() {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }

    fn invert(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (r_max - r_min).abs() < f64::EPSILON {
            return (d_min + d_max) / 2.0;
        }

        let normalized = (value - r_min) / (r_max - r_min);
        d_min + normalized * (d_max - d_min)
    }

    /// "Nice" ticks at 1, 2 or 5 × 10^k, D3 `ticks()` semantics
    fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;

        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }

        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let Some((i1, i2, inc)) = tick_spec(start, stop, count) else {
            return Vec::new();
        };

        let mut ticks: Vec<f64> = (0..=(i2 - i1) as i64)
            .map(|i| {
                let n = i1 + i as f64;
                if inc < 0.0 { n / -inc } else { n * inc }
            })
            .collect();

        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

/// Index bounds and increment for nice ticks over `[start, stop]`.
/// A negative increment means "divide by" (used for sub-unit steps).
fn tick_spec(start: f64, stop: f64, count: usize) -> Option<(f64, f64, f64)> {
    let e10 = 50.0_f64.sqrt();
    let e5 = 10.0_f64.sqrt();
    let e2 = 2.0_f64.sqrt();

    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10.0_f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let div = 10.0_f64.powf(-power) / factor;
        i1 = (start * div).round();
        i2 = (stop * div).round();
        if i1 / div < start {
            i1 += 1.0;
        }
        if i2 / div > stop {
            i2 -= 1.0;
        }
        inc = -div;
    } else {
        let mul = 10.0_f64.powf(power) * factor;
        i1 = (start / mul).round();
        i2 = (stop / mul).round();
        if i1 * mul < start {
            i1 += 1.0;
        }
        if i2 * mul > stop {
            i2 -= 1.0;
        }
        inc = mul;
    }

    if !i1.is_finite() || !i2.is_finite() || i2 < i1 {
        return None;
    }
    Some((i1, i2, inc))
}

/// Decimal places needed to tell nice ticks over `[start, stop]` apart
pub fn tick_decimals(start: f64, stop: f64, count: usize) -> usize {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    if count == 0 || lo == hi || !lo.is_finite() || !hi.is_finite() {
        return 0;
    }
    match tick_spec(lo, hi, count) {
        // Sub-unit steps are 1/div apart
        Some((_, _, inc)) if inc < 0.0 => (-inc).log10().ceil().max(0.0) as usize,
        _ => 0,
    }
}

// ============================================================================
// BAND SCALE (for categorical/ordinal data like days)
// ============================================================================

/// Band scale for categorical data, D3 `scaleBand` semantics
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    keys: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
}

impl BandScale {
    /// Duplicate keys collapse onto their first occurrence
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            if !unique.contains(&key) {
                unique.push(key);
            }
        }

        Self {
            keys: unique,
            range: (0.0, 1.0),
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
        }
    }

    pub fn range(mut self, start: f64, stop: f64) -> Self {
        self.range = (start, stop);
        self
    }

    pub fn padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    pub fn padding_uniform(self, padding: f64) -> Self {
        self.padding(padding, padding)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// (first band start, step, reversed)
    fn layout(&self) -> (f64, f64, bool) {
        let (r0, r1) = self.range;
        let reverse = r1 < r0;
        let (start, stop) = if reverse { (r1, r0) } else { (r0, r1) };
        let n = self.keys.len() as f64;

        let step = (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        let offset = (stop - start - step * (n - self.padding_inner)) * self.align;

        (start + offset, step, reverse)
    }

    /// Distance between starts of adjacent bands
    pub fn step(&self) -> f64 {
        self.layout().1
    }

    /// Width of each band
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Band start for the key at `index`
    pub fn scale(&self, index: usize) -> Option<f64> {
        let n = self.keys.len();
        if index >= n {
            return None;
        }

        let (start, step, reverse) = self.layout();
        let slot = if reverse { n - 1 - index } else { index };
        Some(start + step * slot as f64)
    }

    /// Band center for the key at `index`
    pub fn scale_center(&self, index: usize) -> Option<f64> {
        self.scale(index).map(|x| x + self.bandwidth() / 2.0)
    }

    /// Band start for `key`
    pub fn position(&self, key: &str) -> Option<f64> {
        self.keys
            .iter()
            .position(|k| k == key)
            .and_then(|i| self.scale(i))
    }

    /// Band center for `key`
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth() / 2.0)
    }
}

// ============================================================================
// COLOR SCALES
// ============================================================================

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Linear interpolation between two colors across a numeric domain
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    scale: LinearScale,
    low: Rgb,
    high: Rgb,
}

impl ColorScale {
    pub fn new(low: Rgb, high: Rgb) -> Self {
        Self {
            scale: LinearScale::new(),
            low,
            high,
        }
    }

    /// Build from `#rrggbb` endpoints (unparseable colors fall back to black)
    pub fn between(low: &str, high: &str) -> Self {
        Self::new(
            Rgb::parse_hex(low).unwrap_or_default(),
            Rgb::parse_hex(high).unwrap_or_default(),
        )
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.scale = self.scale.domain(min, max);
        self
    }

    /// Interpolated color; values outside the domain extrapolate and clamp
    pub fn rgb(&self, value: f64) -> Rgb {
        let t = self.scale.scale(value);
        let lerp = |a: u8, b: u8| {
            let v = a as f64 + (b as f64 - a as f64) * t;
            if v.is_nan() { 0 } else { v.round().clamp(0.0, 255.0) as u8 }
        };

        Rgb::new(
            lerp(self.low.r, self.high.r),
            lerp(self.low.g, self.high.g),
            lerp(self.low.b, self.high.b),
        )
    }

    pub fn color(&self, value: f64) -> String {
        self.rgb(value).css()
    }
}

/// Fixed categorical palette indexed by position
#[derive(Debug, Clone, Copy)]
pub struct OrdinalPalette {
    colors: &'static [&'static str],
}

impl OrdinalPalette {
    pub const fn new(colors: &'static [&'static str]) -> Self {
        Self { colors }
    }

    pub const fn category10() -> Self {
        Self::new(&weather_core::colors::CATEGORY10)
    }

    pub fn color(&self, index: usize) -> &'static str {
        if self.colors.is_empty() {
            return weather_core::colors::TEXT;
        }
        self.colors[index % self.colors.len()]
    }
}

impl Default for OrdinalPalette {
    fn default() -> Self {
        Self::category10()
    }
}

// ============================================================================
// STRATEGY PATTERN: Path Generator Trait
// ============================================================================

/// Strategy trait for path generation
pub trait PathGenerator: Send + Sync {
    fn generate(&self, points: &[(f64, f64)]) -> String;
}

/// Line path generator
#[derive(Debug, Clone, Default)]
pub struct LinePath;

impl PathGenerator for LinePath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        let Some((&(x, y), rest)) = points.split_first() else {
            return String::new();
        };

        let mut builder = PathBuilder::new().move_to(x, y);
        for &(x, y) in rest {
            builder = builder.line_to(x, y);
        }
        builder.build()
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "L{:.2},{:.2}", x, y);
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        let _ = write!(
            self.commands,
            "A{:.2},{:.2},{:.2},{},{},{:.2},{:.2}",
            rx, ry, rotation, large_arc as u8, sweep as u8, x, y
        );
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

/// Generate line path (non-closed)
pub fn line_path(points: &[(f64, f64)]) -> String {
    LinePath.generate(points)
}

// ============================================================================
// ARCS & PIE LAYOUT
// ============================================================================

/// Point on a circle of radius `r` at `angle` (0 = 12 o'clock, clockwise)
fn polar(r: f64, angle: f64) -> (f64, f64) {
    (r * angle.sin(), -r * angle.cos())
}

/// Annular sector generator centered on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGenerator {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl ArcGenerator {
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius: inner_radius.max(0.0),
            outer_radius: outer_radius.max(0.0),
        }
    }

    /// Path for the sector between `start` and `end` (radians)
    pub fn path(&self, start: f64, end: f64) -> String {
        let (r0, r1) = (self.inner_radius, self.outer_radius);
        let sweep = (end - start).abs();
        let clockwise = end >= start;

        if r1 <= ARC_EPSILON {
            return PathBuilder::new().move_to(0.0, 0.0).close().build();
        }

        if sweep >= TAU - ARC_EPSILON {
            return full_ring(r0, r1);
        }

        let (x0, y0) = polar(r1, start);
        if sweep <= ARC_EPSILON {
            return PathBuilder::new().move_to(x0, y0).line_to(0.0, 0.0).close().build();
        }

        let (x1, y1) = polar(r1, end);
        let large = sweep > PI;
        let outer = PathBuilder::new()
            .move_to(x0, y0)
            .arc_to(r1, r1, 0.0, large, clockwise, x1, y1);

        if r0 <= ARC_EPSILON {
            return outer.line_to(0.0, 0.0).close().build();
        }

        let (ix1, iy1) = polar(r0, end);
        let (ix0, iy0) = polar(r0, start);
        outer
            .line_to(ix1, iy1)
            .arc_to(r0, r0, 0.0, large, !clockwise, ix0, iy0)
            .close()
            .build()
    }
}

fn full_ring(r0: f64, r1: f64) -> String {
    let mut builder = PathBuilder::new()
        .move_to(0.0, -r1)
        .arc_to(r1, r1, 0.0, true, true, 0.0, r1)
        .arc_to(r1, r1, 0.0, true, true, 0.0, -r1)
        .close();

    if r0 > ARC_EPSILON {
        builder = builder
            .move_to(0.0, -r0)
            .arc_to(r0, r0, 0.0, true, false, 0.0, r0)
            .arc_to(r0, r0, 0.0, true, false, 0.0, -r0)
            .close();
    }
    builder.build()
}

/// Sector path for a disc of `outer_radius`
pub fn arc_path(outer_radius: f64, start: f64, end: f64) -> String {
    ArcGenerator::new(0.0, outer_radius).path(start, end)
}

/// Start/end angles for each value, in input order.
///
/// Angles are handed out largest value first starting at 0, the positive
/// values share the full turn proportionally, and non-positive values get
/// an empty sweep.
pub fn pie_layout(values: &[f64]) -> Vec<(f64, f64)> {
    let positive = |v: f64| if v > 0.0 { v } else { 0.0 };
    let sum: f64 = values.iter().map(|&v| positive(v)).sum();
    let k = if sum > 0.0 { TAU / sum } else { 0.0 };

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[j].partial_cmp(&values[i]).unwrap_or(Ordering::Equal));

    let mut angles = vec![(0.0, 0.0); values.len()];
    let mut a0 = 0.0;
    for i in order {
        let a1 = a0 + positive(values[i]) * k;
        angles[i] = (a0, a1);
        a0 = a1;
    }
    angles
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_invert() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.invert(250.0), 50.0);
    }

    #[test]
    fn test_zero_based_headroom() {
        let exact = LinearScale::zero_based(10.0, Headroom::Exact).range(400.0, 0.0);
        assert_eq!(exact.domain_bounds(), (0.0, 10.0));
        assert_eq!(exact.scale(10.0), 0.0);

        let peak = LinearScale::zero_based(10.0, Headroom::Peak20).range(400.0, 0.0);
        assert!(approx(peak.domain_bounds().1, 12.0));
        assert!(approx(peak.scale(10.0), 400.0 - 400.0 / 1.2));
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new().domain(0.0, 0.0).range(400.0, 0.0);
        assert_eq!(scale.scale(0.0), 200.0);
        assert_eq!(scale.scale(7.0), 200.0);
        assert!(scale.is_degenerate());
    }

    #[test]
    fn test_nice_ticks() {
        let scale = LinearScale::new().domain(0.0, 10.0);
        let ticks = scale.ticks(10);
        assert_eq!(ticks, (0..=10).map(|i| i as f64).collect::<Vec<_>>());

        let scale = LinearScale::new().domain(0.0, 24.0);
        assert_eq!(scale.ticks(10), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0]);
    }

    #[test]
    fn test_fractional_ticks_and_labels() {
        let scale = LinearScale::new().domain(0.0, 1.2);
        let labels = scale.tick_labels(10);
        assert_eq!(labels.first().unwrap().1, "0.0");
        assert_eq!(labels.last().unwrap().1, "1.2");
        assert_eq!(labels.len(), 13);
    }

    #[test]
    fn test_degenerate_ticks() {
        let scale = LinearScale::new().domain(0.0, 0.0);
        assert_eq!(scale.ticks(10), vec![0.0]);
        assert_eq!(scale.tick_labels(10), vec![(0.0, "0".to_string())]);
    }

    #[test]
    fn test_band_scale() {
        let scale = BandScale::new(["a", "b", "c", "d", "e"])
            .range(0.0, 100.0)
            .padding_uniform(0.1);
        let bw = scale.bandwidth();
        assert!(bw > 0.0);
        assert!(bw < 20.0); // Should be less than 100/5
        assert!(approx(scale.step(), 100.0 / 5.1));
        assert!(approx(scale.position("a").unwrap(), scale.step() * 0.1));
    }

    #[test]
    fn test_band_scale_no_padding_fills_range() {
        let scale = BandScale::new(["a", "b", "c", "d"]).range(0.0, 400.0);
        assert_eq!(scale.bandwidth(), 100.0);
        assert_eq!(scale.position("a"), Some(0.0));
        assert_eq!(scale.position("d"), Some(300.0));
        assert_eq!(scale.center("b"), Some(150.0));
    }

    #[test]
    fn test_band_scale_reversed_range() {
        let scale = BandScale::new(["low", "high"]).range(400.0, 0.0);
        assert_eq!(scale.bandwidth(), 200.0);
        assert_eq!(scale.position("low"), Some(200.0));
        assert_eq!(scale.position("high"), Some(0.0));
    }

    #[test]
    fn test_band_scale_dedups_and_handles_empty() {
        let scale = BandScale::new(["x", "x", "y"]);
        assert_eq!(scale.len(), 2);

        let empty = BandScale::new(Vec::<String>::new()).range(0.0, 800.0).padding_uniform(0.3);
        assert!(empty.is_empty());
        assert!(empty.bandwidth().is_finite());
        assert_eq!(empty.scale(0), None);
        assert_eq!(empty.position("2024-05-01"), None);
    }

    #[test]
    fn test_single_band_is_centered() {
        let scale = BandScale::new(["only"]).range(0.0, 800.0).padding_uniform(0.3);
        let x = scale.position("only").unwrap();
        assert!(approx(x + scale.bandwidth() / 2.0, 400.0));
    }

    #[test]
    fn test_color_scale_endpoints() {
        let scale = ColorScale::between("#00246B", "#CADCFC").domain(0.0, 20.0);
        assert_eq!(scale.color(0.0), "rgb(0, 36, 107)");
        assert_eq!(scale.color(20.0), "rgb(202, 220, 252)");
        assert_eq!(scale.color(10.0), "rgb(101, 128, 180)");
    }

    #[test]
    fn test_color_scale_clamps_and_degenerate() {
        let scale = ColorScale::between("#00246B", "#CADCFC").domain(0.0, 10.0);
        assert_eq!(scale.color(-50.0), "rgb(0, 0, 0)");

        let flat = ColorScale::between("#000000", "#ffffff").domain(0.0, 0.0);
        assert_eq!(flat.color(0.0), "rgb(128, 128, 128)");
    }

    #[test]
    fn test_rgb_parse() {
        assert_eq!(Rgb::parse_hex("#CADCFC"), Some(Rgb::new(202, 220, 252)));
        assert_eq!(Rgb::parse_hex("CADCFC"), None);
        assert_eq!(Rgb::parse_hex("#xyz123"), None);
    }

    #[test]
    fn test_ordinal_palette_wraps() {
        let palette = OrdinalPalette::category10();
        assert_eq!(palette.color(0), "#1f77b4");
        assert_eq!(palette.color(10), "#1f77b4");
        assert_eq!(palette.color(3), "#d62728");
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 100.0)
            .close()
            .build();

        assert!(path.contains("M0.00,0.00"));
        assert!(path.contains("L100.00,100.00"));
        assert!(path.contains("Z"));
    }

    #[test]
    fn test_line_path_generator() {
        let generator = LinePath;
        let path = generator.generate(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);

        assert!(path.starts_with("M0.00,0.00"));
        assert!(path.contains("L50.00,50.00"));
        assert_eq!(line_path(&[]), "");
    }

    #[test]
    fn test_pie_layout_descending_assignment() {
        let angles = pie_layout(&[10.0, 30.0]);
        // Largest value starts at 0
        assert_eq!(angles[1].0, 0.0);
        assert!(approx(angles[1].1, TAU * 0.75));
        assert!(approx(angles[0].0, TAU * 0.75));
        assert!(approx(angles[0].1, TAU));
    }

    #[test]
    fn test_pie_layout_non_positive_and_empty() {
        let angles = pie_layout(&[-5.0, 0.0, 5.0]);
        assert!(approx(angles[2].1 - angles[2].0, TAU));
        assert_eq!(angles[0].1 - angles[0].0, 0.0);
        assert_eq!(angles[1].1 - angles[1].0, 0.0);

        let zeros = pie_layout(&[0.0, 0.0]);
        assert!(zeros.iter().all(|(a, b)| a == b));
        assert!(pie_layout(&[]).is_empty());
    }

    #[test]
    fn test_arc_path_quarter() {
        let path = arc_path(150.0, 0.0, PI / 2.0);
        assert!(path.starts_with("M0.00,-150.00"));
        assert!(path.contains("A150.00,150.00,0.00,0,1,150.00,"));
        assert!(path.ends_with("L0.00,0.00Z"));
    }

    #[test]
    fn test_arc_path_full_and_empty() {
        let full = arc_path(150.0, 0.0, TAU);
        assert_eq!(full.matches('A').count(), 2);

        let empty = arc_path(150.0, 1.0, 1.0);
        assert!(!empty.contains('A'));
    }

    #[test]
    fn test_donut_arc_has_inner_edge() {
        let path = ArcGenerator::new(50.0, 100.0).path(0.0, PI);
        assert_eq!(path.matches('A').count(), 2);
    }
}
