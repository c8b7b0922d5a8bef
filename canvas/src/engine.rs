use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::camera::{ImagePoint, SurfaceGeometry, SurfacePoint};
use crate::input::{InputState, UiState};
use crate::render::{self, StrokeStyle};
use crate::stroke::{Rgb, Stroke, Tool};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from pointer handlers for the host to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Configure the context for the gesture that just started.
    ApplyStyle(StrokeStyle),
    /// Draw live feedback between two surface points.
    DrawSegment { from: SurfacePoint, to: SurfacePoint },
    /// A gesture ended and its stroke joined the pending buffer.
    StrokeCompleted { tool: Tool },
}

/// Maps a surface point into image space.
pub type ToImageFn = Box<dyn Fn(SurfacePoint) -> ImagePoint>;
/// Reports the current view scale (surface pixels per image pixel).
pub type ScaleFn = Box<dyn Fn() -> f64>;
/// Invoked after a lasso stroke joins the pending buffer.
pub type LassoCompleteFn = Box<dyn FnMut()>;
/// Receives the human-readable mode label whenever the tool changes.
pub type ModeIndicatorFn = Box<dyn FnMut(&str)>;

/// Host-injected collaborators. Absent hooks default to identity mapping,
/// unit scale, and no callbacks.
#[derive(Default)]
pub struct EngineHooks {
    pub to_image: Option<ToImageFn>,
    pub scale: Option<ScaleFn>,
    pub on_lasso_complete: Option<LassoCompleteFn>,
    pub mode_indicator: Option<ModeIndicatorFn>,
}

/// Shared handle: the browser listeners write strokes, the host drains them.
pub type SharedEngine = Rc<RefCell<EngineCore>>;

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub ui: UiState,
    pub input: InputState,
    pending: Vec<Stroke>,
    to_image: ToImageFn,
    scale: ScaleFn,
    on_lasso_complete: Option<LassoCompleteFn>,
    mode_indicator: Option<ModeIndicatorFn>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_hooks(EngineHooks::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a core bound to the host's coordinate mapping and callbacks.
    ///
    /// The mode indicator immediately receives the default tool's label.
    #[must_use]
    pub fn with_hooks(hooks: EngineHooks) -> Self {
        let mut core = Self {
            ui: UiState::default(),
            input: InputState::Idle,
            pending: Vec::new(),
            to_image: hooks.to_image.unwrap_or_else(|| Box::new(|p| ImagePoint::new(p.x, p.y))),
            scale: hooks.scale.unwrap_or_else(|| Box::new(|| 1.0)),
            on_lasso_complete: hooks.on_lasso_complete,
            mode_indicator: hooks.mode_indicator,
        };
        core.announce_mode();
        core
    }

    /// Wrap in the shared handle used by the browser engine and the host.
    #[must_use]
    pub fn into_shared(self) -> SharedEngine {
        Rc::new(RefCell::new(self))
    }

    // --- Style ---

    /// Set the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
        self.announce_mode();
    }

    /// Set the tool by identifier. Unknown identifiers leave the current tool
    /// active and return `false`.
    pub fn set_tool_named(&mut self, name: &str) -> bool {
        match Tool::parse(name) {
            Some(tool) => {
                self.set_tool(tool);
                true
            }
            None => false,
        }
    }

    /// Set the paint color for subsequent strokes.
    pub fn set_stroke_color(&mut self, r: i32, g: i32, b: i32) {
        self.ui.color = Rgb::new(r, g, b);
    }

    /// Set the pen/rubber width for subsequent strokes. Lasso width is fixed.
    pub fn set_brush_width(&mut self, px: f64) {
        self.ui.brush_size = px;
    }

    fn announce_mode(&mut self) {
        let label = self.ui.tool.mode_label();
        if let Some(indicator) = self.mode_indicator.as_mut() {
            indicator(label);
        }
    }

    // --- Pending buffer ---

    /// Completed strokes not yet flushed, oldest first.
    #[must_use]
    pub fn pending_strokes(&self) -> &[Stroke] {
        &self.pending
    }

    /// Drop every completed stroke and any gesture in progress.
    pub fn clear_pending_strokes(&mut self) {
        self.pending.clear();
        self.input = InputState::Idle;
    }

    /// Drop the oldest `count` strokes after the host committed them.
    ///
    /// Strokes completed while the commit was in flight stay pending.
    pub fn discard_flushed(&mut self, count: usize) {
        let count = count.min(self.pending.len());
        self.pending.drain(..count);
    }

    // --- Pointer input ---

    /// Press: snapshot the style into a new stroke and configure the context.
    pub fn on_pointer_down(&mut self, point: SurfacePoint) -> Vec<Action> {
        let origin = (self.to_image)(point);
        let stroke = Stroke::begin(self.ui.tool, self.ui.brush_size, self.ui.color, origin);
        self.input = InputState::Drawing { last: point, stroke };
        vec![Action::ApplyStyle(StrokeStyle::for_tool(&self.ui, (self.scale)()))]
    }

    /// Move while pressed: live segment from the last point, and record the
    /// new point in image space. Ignored while idle.
    pub fn on_pointer_move(&mut self, point: SurfacePoint) -> Vec<Action> {
        let InputState::Drawing { last, stroke } = &mut self.input else {
            return Vec::new();
        };
        let from = *last;
        *last = point;
        stroke.push((self.to_image)(point));
        vec![Action::DrawSegment { from, to: point }]
    }

    /// Release or leave: the stroke joins the pending buffer. Completing a
    /// lasso gesture invokes the host's commit hook. Ignored while idle.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let InputState::Drawing { stroke, .. } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };
        let tool = stroke.tool;
        self.pending.push(stroke);
        if tool.is_lasso() {
            if let Some(hook) = self.on_lasso_complete.as_mut() {
                hook();
            }
        }
        vec![Action::StrokeCompleted { tool }]
    }

    // --- Queries ---

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }

    /// The currently active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    /// Label for the active tool.
    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        self.ui.tool.mode_label()
    }
}

// =============================================================
// Browser engine
// =============================================================

type Listener = Closure<dyn FnMut(Event)>;

const PRESS_EVENTS: [&str; 2] = ["mousedown", "touchstart"];
const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
const RELEASE_EVENTS: [&str; 4] = ["mouseup", "mouseleave", "touchend", "touchcancel"];

/// When a listener suppresses the browser's default handling (scrolling, text selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prevent {
    Always,
    WhileDrawing,
    Never,
}

/// The full stroke engine. Owns the drawing surface and its listeners.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: SharedEngine,
    listeners: Vec<(&'static str, Listener)>,
}

impl Engine {
    /// Bind a new engine to `canvas` and install its pointer listeners.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a listener cannot be added.
    pub fn new(canvas: HtmlCanvasElement, hooks: EngineHooks) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let mut engine = Self { canvas, ctx, core: EngineCore::with_hooks(hooks).into_shared(), listeners: Vec::new() };
        engine.attach()?;
        Ok(engine)
    }

    /// Shared handle to the core for the host's flush logic.
    #[must_use]
    pub fn core(&self) -> SharedEngine {
        Rc::clone(&self.core)
    }

    fn attach(&mut self) -> Result<(), JsValue> {
        for name in PRESS_EVENTS {
            let listener = self.listener(Prevent::Always, |core, point| match point {
                Some(p) => core.on_pointer_down(p),
                None => Vec::new(),
            });
            self.add(name, listener)?;
        }
        for name in MOVE_EVENTS {
            let listener = self.listener(Prevent::WhileDrawing, |core, point| match point {
                Some(p) => core.on_pointer_move(p),
                None => Vec::new(),
            });
            self.add(name, listener)?;
        }
        for name in RELEASE_EVENTS {
            let listener = self.listener(Prevent::Never, |core, _| core.on_pointer_up());
            self.add(name, listener)?;
        }
        Ok(())
    }

    fn listener<F>(&self, prevent: Prevent, handle: F) -> Listener
    where
        F: Fn(&mut EngineCore, Option<SurfacePoint>) -> Vec<Action> + 'static,
    {
        let canvas = self.canvas.clone();
        let ctx = self.ctx.clone();
        let core = Rc::clone(&self.core);
        Closure::new(move |event: Event| {
            let drawing = core.borrow().is_drawing();
            if prevent == Prevent::Always || (prevent == Prevent::WhileDrawing && drawing) {
                event.prevent_default();
            }
            let point = client_position(&event).map(|(x, y)| geometry(&canvas).to_surface(x, y));
            let actions = handle(&mut core.borrow_mut(), point);
            if let Err(err) = render::apply_all(&ctx, &actions) {
                web_sys::console::error_1(&err);
            }
        })
    }

    fn add(&mut self, name: &'static str, listener: Listener) -> Result<(), JsValue> {
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        self.canvas.add_event_listener_with_callback_and_add_event_listener_options(
            name,
            listener.as_ref().unchecked_ref(),
            &options,
        )?;
        self.listeners.push((name, listener));
        Ok(())
    }

    /// Remove every installed listener. The engine stops capturing strokes;
    /// pending strokes stay readable through [`Engine::core`].
    pub fn dispose(&mut self) {
        for (name, listener) in self.listeners.drain(..) {
            if let Err(err) =
                self.canvas.remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
            {
                web_sys::console::error_1(&err);
            }
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn geometry(canvas: &HtmlCanvasElement) -> SurfaceGeometry {
    let rect = canvas.get_bounding_client_rect();
    SurfaceGeometry {
        left: rect.left(),
        top: rect.top(),
        css_width: rect.width(),
        css_height: rect.height(),
        width: f64::from(canvas.width()),
        height: f64::from(canvas.height()),
    }
}

fn client_position(event: &Event) -> Option<(f64, f64)> {
    if let Some(touch) = event.dyn_ref::<TouchEvent>() {
        let first = touch.touches().get(0)?;
        return Some((f64::from(first.client_x()), f64::from(first.client_y())));
    }
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| (f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}
