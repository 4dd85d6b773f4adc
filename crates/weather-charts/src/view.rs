//! Leptos SVG view of a scene
//!
//! Draws whatever the [`SceneSurface`] holds, runs its animations on a frame
//! clock and turns pointer events into tooltip updates and hover overrides.
//! Elements are built once per scene; the clock only drives the animated
//! attributes and deferred visibility.

use std::collections::HashMap;
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::{ev, prelude::*};
use wasm_bindgen_futures::spawn_local;

use crate::{
    chartkit::ArcGenerator,
    interaction::Tooltip,
    scene::{Action, Geometry, Node, NodeId, Reveal, Scene, ShapeNode, TextNode},
    surface::SceneSurface,
};

/// Frame clock period (~60fps)
const FRAME_MS: u32 = 16;

/// Per-node state left behind by hover actions
#[derive(Debug, Clone, Default, PartialEq)]
struct HoverOverride {
    radius: Option<f64>,
    fill: Option<(&'static str, u32)>,
}

type Overrides = HashMap<NodeId, HoverOverride>;

fn apply_actions(id: NodeId, actions: &[Action], tooltip: RwSignal<Tooltip>, overrides: RwSignal<Overrides>) {
    for action in actions {
        match action {
            Action::ShowTooltip(record) => tooltip.update(|t| t.show(record)),
            Action::HideTooltip => tooltip.update(Tooltip::hide),
            Action::SetRadius(r) => overrides.update(|o| {
                o.entry(id).or_default().radius = Some(*r);
            }),
            Action::SetFill { color, duration_ms } => overrides.update(|o| {
                o.entry(id).or_default().fill = Some((*color, *duration_ms));
            }),
        }
    }
}

/// Monotonic milliseconds, falling back to wall time without `performance`
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

/// Advance `elapsed` until the scene's animations finish or a newer scene
/// replaces this one
async fn run_clock(generation: u64, duration_ms: u32, active: StoredValue<u64>, elapsed: RwSignal<f64>) {
    let start = now_ms();
    loop {
        TimeoutFuture::new(FRAME_MS).await;
        if active.try_get_value() != Some(generation) {
            tracing::trace!("Frame clock for scene {} superseded", generation);
            break;
        }

        let t = now_ms() - start;
        elapsed.set(t);
        if t >= duration_ms as f64 {
            break;
        }
    }
}

/// Chart panel SVG
#[component]
pub fn SceneView(
    #[prop(into)] surface: Signal<SceneSurface>,
    tooltip: RwSignal<Tooltip>,
) -> impl IntoView {
    let elapsed = RwSignal::new(0.0_f64);
    let overrides = RwSignal::new(Overrides::new());
    let active = StoredValue::new(0_u64);

    // Restart the clock whenever a new canvas is started
    Effect::new(move |_| {
        let (generation, duration) = surface.with(|s| {
            (s.generation(), s.scene().map_or(0, Scene::duration_ms))
        });

        active.set_value(generation);
        overrides.set(Overrides::new());
        tooltip.update(Tooltip::hide);
        elapsed.set(0.0);

        if duration > 0 {
            spawn_local(run_clock(generation, duration, active, elapsed));
        }
    });

    move || {
        surface.with(|s| s.scene().cloned()).map(|scene| {
            let scene = Arc::new(scene);
            view! {
                <svg
                    class=scene.class
                    width=scene.canvas.width
                    height=scene.canvas.height
                    viewBox=scene.canvas.viewbox()
                    style="overflow: visible;"
                >
                    {scene
                        .nodes
                        .iter()
                        .map(|node| {
                            let ctx = NodeContext::new(&scene, node, elapsed);
                            match node {
                                Node::Shape(shape) => shape_view(shape, ctx, tooltip, overrides),
                                Node::Text(text) => text_view(text, ctx),
                            }
                        })
                        .collect_view()}
                </svg>
            }
        })
    }
}

/// What a node's reactive attributes read: its scene and the shared clock
#[derive(Clone)]
struct NodeContext {
    scene: Arc<Scene>,
    elapsed: RwSignal<f64>,
    id: NodeId,
    deferred: bool,
    animated: bool,
}

impl NodeContext {
    fn new(scene: &Arc<Scene>, node: &Node, elapsed: RwSignal<f64>) -> Self {
        let id = node.id();
        Self {
            scene: Arc::clone(scene),
            elapsed,
            id,
            deferred: node.reveal() == Reveal::Deferred,
            animated: scene.animations.iter().any(|a| a.target == id),
        }
    }

    /// Current geometry; only animated nodes subscribe to the clock
    fn geometry(&self, base: &Geometry) -> Geometry {
        if !self.animated {
            return base.clone();
        }
        self.scene
            .geometry_at(self.id, self.elapsed.get())
            .unwrap_or_else(|| base.clone())
    }

    fn visibility(&self) -> &'static str {
        if self.deferred && !self.scene.deferred_revealed(self.elapsed.get()) {
            "hidden"
        } else {
            "visible"
        }
    }
}

fn rect_y(g: &Geometry) -> f64 {
    match g {
        Geometry::Rect { y, .. } => *y,
        _ => 0.0,
    }
}

fn rect_height(g: &Geometry) -> f64 {
    match g {
        Geometry::Rect { height, .. } => height.max(0.0),
        _ => 0.0,
    }
}

fn circle_r(g: &Geometry) -> f64 {
    match g {
        Geometry::Circle { r, .. } => *r,
        _ => 0.0,
    }
}

fn arc_d(g: &Geometry) -> String {
    match g {
        Geometry::Arc { inner_radius, outer_radius, start_angle, end_angle, .. } => {
            ArcGenerator::new(*inner_radius, *outer_radius).path(*start_angle, *end_angle)
        }
        _ => String::new(),
    }
}

fn shape_view(
    shape: &ShapeNode,
    ctx: NodeContext,
    tooltip: RwSignal<Tooltip>,
    overrides: RwSignal<Overrides>,
) -> AnyView {
    let id = shape.id;
    let base = shape.geometry.clone();
    let base_fill = shape.style.fill.clone();
    let fill = move || {
        overrides
            .with(|o| o.get(&id).and_then(|h| h.fill))
            .map(|(color, _)| color.to_string())
            .or_else(|| base_fill.clone())
    };
    let transition = move || {
        overrides
            .with(|o| o.get(&id).and_then(|h| h.fill))
            .map(|(_, ms)| format!("transition: fill {}ms;", ms))
            .unwrap_or_default()
    };
    let stroke = shape.style.stroke.clone();
    let stroke_width = shape.style.stroke_width;
    let class = shape.style.class.unwrap_or_default();
    let visibility = {
        let ctx = ctx.clone();
        move || ctx.visibility()
    };

    let on_enter = shape.handlers.on_enter.clone();
    let on_leave = shape.handlers.on_leave.clone();
    let enter = move |_: ev::MouseEvent| apply_actions(id, &on_enter, tooltip, overrides);
    let leave = move |_: ev::MouseEvent| apply_actions(id, &on_leave, tooltip, overrides);

    match shape.geometry {
        Geometry::Rect { x, width, .. } => {
            let y = {
                let (ctx, base) = (ctx.clone(), base.clone());
                move || rect_y(&ctx.geometry(&base))
            };
            let height = move || rect_height(&ctx.geometry(&base));
            view! {
                <rect
                    class=class
                    x=x
                    y=y
                    width=width.max(0.0)
                    height=height
                    fill=fill
                    stroke=stroke
                    stroke-width=stroke_width
                    style=transition
                    visibility=visibility
                    on:mouseenter=enter
                    on:mouseleave=leave
                />
            }
            .into_any()
        }
        Geometry::Circle { cx, cy, .. } => {
            let radius = move || {
                overrides
                    .with(|o| o.get(&id).and_then(|h| h.radius))
                    .unwrap_or_else(|| circle_r(&ctx.geometry(&base)))
            };
            view! {
                <circle
                    class=class
                    cx=cx
                    cy=cy
                    r=radius
                    fill=fill
                    stroke=stroke
                    stroke-width=stroke_width
                    visibility=visibility
                    on:mouseenter=enter
                    on:mouseleave=leave
                />
            }
            .into_any()
        }
        Geometry::Path { ref d } => view! {
            <path
                class=class
                d=d.clone()
                fill=fill
                stroke=stroke
                stroke-width=stroke_width
                visibility=visibility
                on:mouseenter=enter
                on:mouseleave=leave
            />
        }
        .into_any(),
        Geometry::Line { x1, y1, x2, y2 } => view! {
            <line
                class=class
                x1=x1
                y1=y1
                x2=x2
                y2=y2
                stroke=stroke
                stroke-width=stroke_width
                visibility=visibility
            />
        }
        .into_any(),
        Geometry::Arc { cx, cy, .. } => {
            let d = move || arc_d(&ctx.geometry(&base));
            view! {
                <path
                    class=class
                    d=d
                    transform=format!("translate({},{})", cx, cy)
                    fill=fill
                    stroke=stroke
                    visibility=visibility
                    on:mouseenter=enter
                    on:mouseleave=leave
                />
            }
            .into_any()
        }
    }
}

fn text_view(text: &TextNode, ctx: NodeContext) -> AnyView {
    let transform = text.rotate_transform();
    view! {
        <text
            x=text.x
            y=text.y
            dy=text.dy
            transform=transform
            text-anchor=text.anchor.as_str()
            font-size=text.font_size
            fill=text.fill
            visibility=move || ctx.visibility()
        >
            {text.content.clone()}
        </text>
    }
    .into_any()
}
