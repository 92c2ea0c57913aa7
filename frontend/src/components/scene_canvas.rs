use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};
use yew::prelude::*;

use crate::scene::{
    global::global_scene,
    hero::hero_scene,
    model::{GroupMotion, SceneSpec},
    motion::{group_pose, MouseSmoother},
    render::{build_frame, paint},
};
use crate::scroll::{is_mobile, scroll_progress};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SceneKind {
    Global,
    Hero,
}

#[derive(Properties, PartialEq)]
pub struct SceneCanvasProps {
    pub kind: SceneKind,
    #[prop_or(false)]
    pub mobile: bool,
    #[prop_or_default]
    pub class: Classes,
}

fn viewport(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn page_progress(window: &Window) -> f64 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_y, scroll_height, viewport(window).1)
}

/// Tracks whether the viewport is below the mobile breakpoint.
#[hook]
pub fn use_is_mobile() -> bool {
    let mobile = use_state_eq(|| web_sys::window().map_or(false, |w| is_mobile(viewport(&w).0)));

    {
        let mobile = mobile.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();
                let resize_callback = Closure::wrap(Box::new(move || {
                    mobile.set(is_mobile(viewport(&window_clone).0));
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback(
                    "resize",
                    resize_callback.as_ref().unchecked_ref(),
                );

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    *mobile
}

struct SceneLoop {
    spec: SceneSpec,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    window: Window,
    mouse_target: Rc<Cell<(f64, f64)>>,
    smoother: MouseSmoother,
    started: Option<f64>,
}

impl SceneLoop {
    fn tick(&mut self, timestamp: f64) {
        let start = *self.started.get_or_insert(timestamp);
        let t = (timestamp - start) / 1000.0;

        let width = self.canvas.client_width() as f64;
        let height = self.canvas.client_height() as f64;
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let ratio = self.window.device_pixel_ratio().clamp(1.0, self.spec.max_pixel_ratio.max(1.0));
        let pixel_width = (width * ratio).round() as u32;
        let pixel_height = (height * ratio).round() as u32;
        if self.canvas.width() != pixel_width || self.canvas.height() != pixel_height {
            self.canvas.set_width(pixel_width);
            self.canvas.set_height(pixel_height);
        }
        let _ = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);

        let mouse = self.smoother.step(self.mouse_target.get());
        let group = group_pose(self.spec.group, page_progress(&self.window), mouse);
        let frame = build_frame(&self.spec, t, group, width, height);

        if let Err(e) = paint(&self.ctx, &self.spec, &frame, width, height) {
            log::warn!("Scene paint failed: {:?}", e);
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct RunningScene {
    window: Window,
    frame_id: Rc<Cell<i32>>,
    callback: FrameCallback,
    mouse_listener: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl RunningScene {
    fn stop(self) {
        let _ = self.window.cancel_animation_frame(self.frame_id.get());
        if let Some(listener) = &self.mouse_listener {
            let _ = self
                .window
                .remove_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref());
        }
        self.callback.borrow_mut().take();
    }
}

fn start_scene(canvas_ref: &NodeRef, kind: SceneKind, mobile: bool) -> Option<RunningScene> {
    let window = web_sys::window()?;
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let spec = match kind {
        SceneKind::Global => global_scene(mobile),
        SceneKind::Hero => hero_scene(),
    };

    let mouse_target = Rc::new(Cell::new((0.5, 0.5)));
    let mouse_listener = match spec.group {
        GroupMotion::ScrollParallax { follow_mouse: true, .. } => {
            let target = mouse_target.clone();
            let window_clone = window.clone();
            let listener = Closure::wrap(Box::new(move |e: MouseEvent| {
                let (width, height) = viewport(&window_clone);
                if width > 0.0 && height > 0.0 {
                    target.set((e.client_x() as f64 / width, e.client_y() as f64 / height));
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            window
                .add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
                .ok()?;
            Some(listener)
        }
        _ => None,
    };

    let mut scene = SceneLoop {
        spec,
        canvas,
        ctx,
        window: window.clone(),
        mouse_target,
        smoother: MouseSmoother::default(),
        started: None,
    };

    let frame_id = Rc::new(Cell::new(0));
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    {
        let next = callback.clone();
        let frame_id = frame_id.clone();
        let window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            scene.tick(timestamp);
            if let Some(cb) = next.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    frame_id.set(id);
                }
            }
        }) as Box<dyn FnMut(f64)>));
    }

    let first = callback
        .borrow()
        .as_ref()
        .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok())?;
    frame_id.set(first);

    Some(RunningScene {
        window,
        frame_id,
        callback,
        mouse_listener,
    })
}

/// Canvas that renders one of the background scenes until unmounted.
#[function_component(SceneCanvas)]
pub fn scene_canvas(props: &SceneCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(kind, mobile)| {
                let running = start_scene(&canvas_ref, *kind, *mobile);
                if running.is_none() {
                    log::warn!("Could not start {:?} scene", kind);
                }
                move || {
                    if let Some(running) = running {
                        running.stop();
                    }
                }
            },
            (props.kind, props.mobile),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class={classes!("scene-canvas", props.class.clone())}
            aria-hidden="true"
        />
    }
}

/// Fixed bubble scene behind the whole page.
#[function_component(GlobalScene)]
pub fn global_scene_layer() -> Html {
    let mobile = use_is_mobile();

    html! {
        <div class="global-scene">
            <SceneCanvas kind={SceneKind::Global} mobile={mobile} />
            <style>
                {r#"
                    .global-scene {
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                    }
                    .scene-canvas {
                        display: block;
                        width: 100%;
                        height: 100%;
                        background: transparent;
                    }
                "#}
            </style>
        </div>
    }
}

/// Scene layered inside the hero banner.
#[function_component(HeroScene)]
pub fn hero_scene_layer() -> Html {
    html! {
        <div class="hero-scene" style="position: absolute; inset: 0; z-index: 1; pointer-events: none;">
            <SceneCanvas kind={SceneKind::Hero} />
        </div>
    }
}
