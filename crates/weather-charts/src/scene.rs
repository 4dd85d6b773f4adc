//! Scene graph descriptors produced by the renderers
//!
//! A renderer never draws. It returns a [`Scene`]: shape and text nodes at
//! their final geometry, plus declarative [`Animation`]s describing how the
//! geometry gets there. The view layer resolves a frame at a given elapsed
//! time with [`Scene::frame`].

use weather_core::WeatherRecord;

use crate::{CANVAS_HEIGHT, CANVAS_WIDTH};

pub type NodeId = usize;

/// Fixed-size drawing area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

// ============================================================================
// NODES
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    Path { d: String },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Pie sector centered on `(cx, cy)`; angles in radians, 0 = 12 o'clock
    Arc {
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

impl Geometry {
    /// Overwrite an animatable property; properties the geometry lacks are ignored
    pub fn set(&mut self, property: Property, value: f64) {
        match (self, property) {
            (Self::Rect { y, .. }, Property::Y) => *y = value,
            (Self::Rect { height, .. }, Property::Height) => *height = value,
            (Self::Circle { r, .. }, Property::Radius) => *r = value,
            (Self::Arc { start_angle, .. }, Property::StartAngle) => *start_angle = value,
            (Self::Arc { end_angle, .. }, Property::EndAngle) => *end_angle = value,
            _ => {}
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Circle { .. } => "circle",
            Self::Path { .. } => "path",
            Self::Line { .. } => "line",
            Self::Arc { .. } => "arc",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub class: Option<&'static str>,
}

impl Style {
    pub fn filled(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn stroked(color: impl Into<String>, width: f64) -> Self {
        Self {
            fill: Some("none".to_string()),
            stroke: Some(color.into()),
            stroke_width: Some(width),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

/// Effect of a pointer event on the hovered node or the shared tooltip
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShowTooltip(WeatherRecord),
    HideTooltip,
    SetRadius(f64),
    /// Recolor the node, easing over `duration_ms`
    SetFill { color: &'static str, duration_ms: u32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Handlers {
    pub on_enter: Vec<Action>,
    pub on_leave: Vec<Action>,
}

impl Handlers {
    pub fn none() -> Self {
        Self::default()
    }

    /// Show the record on enter, hide on leave
    pub fn tooltip(record: &WeatherRecord) -> Self {
        Self {
            on_enter: vec![Action::ShowTooltip(record.clone())],
            on_leave: vec![Action::HideTooltip],
        }
    }

    pub fn on_enter(mut self, action: Action) -> Self {
        self.on_enter.push(action);
        self
    }

    pub fn on_leave(mut self, action: Action) -> Self {
        self.on_leave.push(action);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.on_enter.is_empty() && self.on_leave.is_empty()
    }

    /// Record shown by the enter handler, if any
    pub fn tooltip_record(&self) -> Option<&WeatherRecord> {
        self.on_enter.iter().find_map(|a| match a {
            Action::ShowTooltip(record) => Some(record),
            _ => None,
        })
    }
}

/// When a node becomes visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Immediate,
    /// Hidden until an animation with [`Completion::RevealDeferred`] ends
    Deferred,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    pub id: NodeId,
    pub geometry: Geometry,
    pub style: Style,
    pub handlers: Handlers,
    pub reveal: Reveal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// What a text node is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    AxisTitle,
    Tick,
    DataLabel,
    Caption,
    Legend,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub fill: Option<&'static str>,
    pub dy: Option<&'static str>,
    /// Rotation in degrees about the origin; `x`/`y` are in the rotated frame
    pub rotate: Option<f64>,
    pub role: TextRole,
    pub reveal: Reveal,
}

impl TextNode {
    pub fn rotate_transform(&self) -> Option<String> {
        self.rotate.map(|deg| format!("rotate({})", deg))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Shape(ShapeNode),
    Text(TextNode),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Self::Shape(s) => s.id,
            Self::Text(t) => t.id,
        }
    }

    pub fn reveal(&self) -> Reveal {
        match self {
            Self::Shape(s) => s.reveal,
            Self::Text(t) => t.reveal,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeNode> {
        match self {
            Self::Shape(s) => Some(s),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Text(t) => Some(t),
            Self::Shape(_) => None,
        }
    }
}

// ============================================================================
// ANIMATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Y,
    Height,
    Radius,
    StartAngle,
    EndAngle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Make every [`Reveal::Deferred`] node visible
    RevealDeferred,
}

/// Timed interpolation of one property of one node
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub target: NodeId,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
    pub on_complete: Option<Completion>,
}

impl Animation {
    pub fn new(target: NodeId, property: Property, from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            target,
            property,
            from,
            to,
            duration_ms,
            on_complete: None,
        }
    }

    pub fn then(mut self, completion: Completion) -> Self {
        self.on_complete = Some(completion);
        self
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Eased value at `elapsed_ms`
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let t = ease_cubic_in_out(self.progress(elapsed_ms));
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms as f64
    }
}

/// Cubic in-out easing
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

// ============================================================================
// SCENE
// ============================================================================

/// Everything one chart draws
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// CSS class of the chart's svg element
    pub class: &'static str,
    pub canvas: Canvas,
    pub nodes: Vec<Node>,
    pub animations: Vec<Animation>,
}

impl Scene {
    pub fn new(class: &'static str) -> Self {
        Self::with_canvas(class, Canvas::default())
    }

    pub fn with_canvas(class: &'static str, canvas: Canvas) -> Self {
        Self {
            class,
            canvas,
            nodes: Vec::new(),
            animations: Vec::new(),
        }
    }

    fn next_id(&self) -> NodeId {
        self.nodes.len()
    }

    /// Append a shape and return its id
    pub fn shape(&mut self, geometry: Geometry, style: Style, handlers: Handlers) -> NodeId {
        self.shape_with(geometry, style, handlers, Reveal::Immediate)
    }

    pub fn shape_with(
        &mut self,
        geometry: Geometry,
        style: Style,
        handlers: Handlers,
        reveal: Reveal,
    ) -> NodeId {
        let id = self.next_id();
        self.nodes.push(Node::Shape(ShapeNode {
            id,
            geometry,
            style,
            handlers,
            reveal,
        }));
        id
    }

    /// Append a text node and return its id
    pub fn text(&mut self, text: TextBuilder) -> NodeId {
        let id = self.next_id();
        self.nodes.push(Node::Text(text.build(id)));
        id
    }

    pub fn animate(&mut self, animation: Animation) {
        self.animations.push(animation);
    }

    pub fn shapes(&self) -> impl Iterator<Item = &ShapeNode> {
        self.nodes.iter().filter_map(Node::as_shape)
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextNode> {
        self.nodes.iter().filter_map(Node::as_text)
    }

    /// Shapes carrying a record (bars, points, slices, cells)
    pub fn data_shapes(&self) -> impl Iterator<Item = &ShapeNode> {
        self.shapes().filter(|s| s.handlers.tooltip_record().is_some())
    }

    pub fn texts_with_role(&self, role: TextRole) -> impl Iterator<Item = &TextNode> {
        self.texts().filter(move |t| t.role == role)
    }

    pub fn title(&self) -> Option<&str> {
        self.texts_with_role(TextRole::Title)
            .next()
            .map(|t| t.content.as_str())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Length of the longest animation
    pub fn duration_ms(&self) -> u32 {
        self.animations
            .iter()
            .map(|a| a.duration_ms)
            .max()
            .unwrap_or(0)
    }

    pub fn deferred_revealed(&self, elapsed_ms: f64) -> bool {
        self.animations
            .iter()
            .any(|a| a.on_complete == Some(Completion::RevealDeferred) && a.is_finished(elapsed_ms))
    }

    /// Geometry of shape `id` with its animations resolved at `elapsed_ms`
    pub fn geometry_at(&self, id: NodeId, elapsed_ms: f64) -> Option<Geometry> {
        let mut geometry = self.node(id)?.as_shape()?.geometry.clone();
        for animation in self.animations.iter().filter(|a| a.target == id) {
            geometry.set(animation.property, animation.value_at(elapsed_ms));
        }
        Some(geometry)
    }

    pub fn is_visible_at(&self, node: &Node, elapsed_ms: f64) -> bool {
        node.reveal() == Reveal::Immediate || self.deferred_revealed(elapsed_ms)
    }

    /// Visible nodes with animated properties resolved at `elapsed_ms`
    pub fn frame(&self, elapsed_ms: f64) -> Vec<Node> {
        self.nodes
            .iter()
            .filter(|n| self.is_visible_at(n, elapsed_ms))
            .map(|node| match node {
                Node::Shape(shape) => {
                    let mut shape = shape.clone();
                    if let Some(geometry) = self.geometry_at(shape.id, elapsed_ms) {
                        shape.geometry = geometry;
                    }
                    Node::Shape(shape)
                }
                Node::Text(text) => Node::Text(text.clone()),
            })
            .collect()
    }
}

// ============================================================================
// TEXT BUILDER
// ============================================================================

/// Fluent builder for text nodes
#[derive(Debug, Clone)]
pub struct TextBuilder {
    x: f64,
    y: f64,
    content: String,
    anchor: TextAnchor,
    font_size: f64,
    fill: Option<&'static str>,
    dy: Option<&'static str>,
    rotate: Option<f64>,
    role: TextRole,
    reveal: Reveal,
}

impl TextBuilder {
    pub fn new(role: TextRole, x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            anchor: TextAnchor::Start,
            font_size: 10.0,
            fill: None,
            dy: None,
            rotate: None,
            role,
            reveal: Reveal::Immediate,
        }
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn fill(mut self, fill: &'static str) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn dy(mut self, dy: &'static str) -> Self {
        self.dy = Some(dy);
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    pub fn deferred(mut self) -> Self {
        self.reveal = Reveal::Deferred;
        self
    }

    fn build(self, id: NodeId) -> TextNode {
        TextNode {
            id,
            x: self.x,
            y: self.y,
            content: self.content,
            anchor: self.anchor,
            font_size: self.font_size,
            fill: self.fill,
            dy: self.dy,
            rotate: self.rotate,
            role: self.role,
            reveal: self.reveal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_scene() -> (Scene, NodeId, NodeId) {
        let mut scene = Scene::new("test");
        let bar = scene.shape(
            Geometry::Rect { x: 0.0, y: 100.0, width: 10.0, height: 300.0 },
            Style::filled("#000"),
            Handlers::none(),
        );
        let label = scene.text(TextBuilder::new(TextRole::DataLabel, 5.0, 115.0, "Temp: 1").deferred());
        scene.animate(Animation::new(bar, Property::Y, 400.0, 100.0, 800));
        scene.animate(Animation::new(bar, Property::Height, 0.0, 300.0, 800).then(Completion::RevealDeferred));
        (scene, bar, label)
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!(ease_cubic_in_out(0.25) < 0.25);
        assert!(ease_cubic_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_animation_value_at() {
        let anim = Animation::new(0, Property::Height, 0.0, 300.0, 800);
        assert_eq!(anim.value_at(0.0), 0.0);
        assert_eq!(anim.value_at(400.0), 150.0);
        assert_eq!(anim.value_at(800.0), 300.0);
        assert_eq!(anim.value_at(5000.0), 300.0);
        assert!(!anim.is_finished(799.0));
        assert!(anim.is_finished(800.0));
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let anim = Animation::new(0, Property::Y, 1.0, 2.0, 0);
        assert_eq!(anim.value_at(0.0), 2.0);
    }

    #[test]
    fn test_frame_starts_from_animation_origin() {
        let (scene, bar, label) = rect_scene();
        let frame = scene.frame(0.0);

        let Some(Node::Shape(shape)) = frame.iter().find(|n| n.id() == bar) else {
            panic!("bar missing from frame");
        };
        assert_eq!(shape.geometry, Geometry::Rect { x: 0.0, y: 400.0, width: 10.0, height: 0.0 });
        assert!(frame.iter().all(|n| n.id() != label));
    }

    #[test]
    fn test_frame_after_completion_reveals_labels() {
        let (scene, bar, label) = rect_scene();
        let frame = scene.frame(800.0);

        assert!(frame.iter().any(|n| n.id() == label));
        let Some(Node::Shape(shape)) = frame.iter().find(|n| n.id() == bar) else {
            panic!("bar missing from frame");
        };
        assert_eq!(shape.geometry, Geometry::Rect { x: 0.0, y: 100.0, width: 10.0, height: 300.0 });
        assert_eq!(scene.duration_ms(), 800);
    }

    #[test]
    fn test_geometry_at_tracks_only_its_target() {
        let (mut scene, bar, label) = rect_scene();
        let other = scene.shape(
            Geometry::Rect { x: 20.0, y: 50.0, width: 10.0, height: 350.0 },
            Style::filled("#000"),
            Handlers::none(),
        );

        assert_eq!(
            scene.geometry_at(bar, 400.0),
            Some(Geometry::Rect { x: 0.0, y: 250.0, width: 10.0, height: 150.0 })
        );
        assert_eq!(
            scene.geometry_at(other, 400.0),
            Some(Geometry::Rect { x: 20.0, y: 50.0, width: 10.0, height: 350.0 })
        );
        assert_eq!(scene.geometry_at(label, 400.0), None);
    }

    #[test]
    fn test_deferred_visibility_flips_at_completion() {
        let (scene, _, label) = rect_scene();
        let label = scene.node(label).unwrap();
        assert!(!scene.is_visible_at(label, 799.0));
        assert!(scene.is_visible_at(label, 800.0));
    }

    #[test]
    fn test_geometry_set_ignores_foreign_property() {
        let mut g = Geometry::Line { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 };
        g.set(Property::Height, 10.0);
        assert_eq!(g, Geometry::Line { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 });
    }

    #[test]
    fn test_node_ids_are_sequential() {
        let (scene, bar, label) = rect_scene();
        assert_eq!((bar, label), (0, 1));
        assert_eq!(scene.node_count(), 2);
        assert!(scene.node(1).and_then(Node::as_text).is_some());
    }
}
