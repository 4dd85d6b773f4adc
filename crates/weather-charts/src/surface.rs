//! Drawing surface capability
//!
//! Renderers produce scenes; a [`Surface`] receives them. The browser view
//! draws whatever [`SceneSurface`] holds, tests inspect it directly.

use crate::scene::{Animation, Canvas, Node, Scene, ShapeNode, TextNode};

pub trait Surface {
    /// Discard everything drawn so far
    fn clear(&mut self);

    /// Start a fresh canvas for a chart
    fn begin(&mut self, canvas: Canvas, class: &'static str);

    fn draw_shape(&mut self, shape: &ShapeNode);

    fn draw_text(&mut self, text: &TextNode);

    fn animate(&mut self, animation: &Animation);
}

impl Scene {
    /// Replay this scene onto a surface
    pub fn draw_onto<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.begin(self.canvas, self.class);
        for node in &self.nodes {
            match node {
                Node::Shape(shape) => surface.draw_shape(shape),
                Node::Text(text) => surface.draw_text(text),
            }
        }
        for animation in &self.animations {
            surface.animate(animation);
        }
    }
}

/// In-memory surface holding at most one scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneSurface {
    scene: Option<Scene>,
    generation: u64,
}

impl SceneSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.scene.is_none()
    }

    pub fn node_count(&self) -> usize {
        self.scene.as_ref().map_or(0, Scene::node_count)
    }

    /// Bumped every time a canvas is started; restarts animations in the view
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn current(&mut self) -> Option<&mut Scene> {
        if self.scene.is_none() {
            tracing::warn!("Drawing on a surface without a canvas; call begin() first");
        }
        self.scene.as_mut()
    }
}

impl Surface for SceneSurface {
    fn clear(&mut self) {
        self.scene = None;
    }

    fn begin(&mut self, canvas: Canvas, class: &'static str) {
        self.generation += 1;
        self.scene = Some(Scene::with_canvas(class, canvas));
    }

    fn draw_shape(&mut self, shape: &ShapeNode) {
        if let Some(scene) = self.current() {
            scene.nodes.push(Node::Shape(shape.clone()));
        }
    }

    fn draw_text(&mut self, text: &TextNode) {
        if let Some(scene) = self.current() {
            scene.nodes.push(Node::Text(text.clone()));
        }
    }

    fn animate(&mut self, animation: &Animation) {
        if let Some(scene) = self.current() {
            scene.animations.push(animation.clone());
        }
    }
}
