//! Animated wireframe backdrop.
//!
//! Owns the full-viewport canvas stacked behind the page, the per-frame
//! tick, and the resize wiring. If a 2D context cannot be acquired the
//! backdrop never draws and the page renders without it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dexoflux_scene::{DEFAULT_SHAPE_COUNT, Scene};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Wireframe stroke: indigo at 30% opacity.
const WIRE_STROKE: &str = "rgba(99, 102, 241, 0.3)";

/// Handle for the self-rescheduling frame loop. Once cancelled, no
/// further tick runs even if the browser still fires the pending frame.
struct FrameLoop {
    raf_id: Cell<i32>,
    cancelled: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            raf_id: Cell::new(0),
            cancelled: Cell::new(false),
            callback: RefCell::new(None),
        })
    }

    fn schedule(&self, window: &web_sys::Window) {
        if let Some(callback) = self.callback.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                self.raf_id.set(id);
            }
        }
    }

    /// Safe to call with no frame pending. Dropping the closure here
    /// releases the scene and context it captured.
    fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.raf_id.get());
        }
        self.callback.borrow_mut().take();
    }
}

#[component]
pub fn Backdrop() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        // No context, no backdrop.
        let Some(context) = context_2d(&canvas) else {
            return;
        };

        let width = viewport_width(&window);
        let height = viewport_height(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let mut random = || js_sys::Math::random() as f32;
        let scene = Rc::new(RefCell::new(Scene::new(
            width,
            height,
            DEFAULT_SHAPE_COUNT,
            &mut random,
        )));

        let frames = start_frames(&window, scene.clone(), context, canvas.clone());
        let resize = attach_resize(&window, scene, canvas);

        let window = window.clone();
        on_cleanup(move || {
            frames.cancel();
            let _ = window
                .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
            drop(resize);
        });
    });

    view! { <canvas class="backdrop" node_ref=canvas_ref></canvas> }
}

/// Kicks off the frame loop: tick every shape, redraw, re-schedule.
fn start_frames(
    window: &web_sys::Window,
    scene: Rc<RefCell<Scene>>,
    context: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
) -> Rc<FrameLoop> {
    let frames = FrameLoop::new();

    let frames_in_tick = frames.clone();
    *frames.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frames_in_tick.cancelled.get() {
            return;
        }

        {
            let mut scene = scene.borrow_mut();
            scene.tick();
            draw(&scene, &context, &canvas);
        }

        if let Some(window) = web_sys::window() {
            frames_in_tick.schedule(&window);
        }
    }) as Box<dyn FnMut()>));

    frames.schedule(window);
    frames
}

fn draw(scene: &Scene, context: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    let width = canvas.width();
    let height = canvas.height();

    context.clear_rect(0.0, 0.0, width as f64, height as f64);
    context.set_line_width(1.0);
    context.set_stroke_style_str(WIRE_STROKE);

    context.begin_path();
    scene.for_each_segment(width, height, |from, to| {
        context.move_to(from.0 as f64, from.1 as f64);
        context.line_to(to.0 as f64, to.1 as f64);
    });
    context.stroke();
}

/// Keeps camera aspect and canvas backing store in step with the window.
fn attach_resize(
    window: &web_sys::Window,
    scene: Rc<RefCell<Scene>>,
    canvas: HtmlCanvasElement,
) -> Closure<dyn FnMut()> {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web_sys::window() {
            let width = viewport_width(&window);
            let height = viewport_height(&window);
            canvas.set_width(width);
            canvas.set_height(height);
            scene.borrow_mut().resize(width, height);
        }
    }) as Box<dyn FnMut()>);

    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|object| object.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn viewport_width(window: &web_sys::Window) -> u32 {
    dimension(window.inner_width().ok())
}

fn viewport_height(window: &web_sys::Window) -> u32 {
    dimension(window.inner_height().ok())
}

fn dimension(value: Option<wasm_bindgen::JsValue>) -> u32 {
    value
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
        .max(0.0) as u32
}
