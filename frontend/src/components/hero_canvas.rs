use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::animation::decor::{fibonacci_sphere, rotation_at, Camera, Vec3};
use crate::config::AnimationConfig;

const POINT_COUNT: usize = 420;
const POINT_RADIUS: f64 = 1.6;
const POINT_COLOR: &str = "#7dd3fc";

type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn fit_to_layout(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = canvas.client_width().max(1) as u32;
    let height = canvas.client_height().max(1) as u32;
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    (width as f64, height as f64)
}

fn draw(canvas: &HtmlCanvasElement, context: &CanvasRenderingContext2d, points: &[Vec3], elapsed_ms: f64) {
    let (width, height) = fit_to_layout(canvas);
    context.clear_rect(0.0, 0.0, width, height);
    context.set_fill_style_str(POINT_COLOR);

    let (yaw, pitch) = rotation_at(elapsed_ms);
    let camera = Camera::default();
    for point in points {
        let Some(projected) = camera.project(point.rotate_y(yaw).rotate_x(pitch), width, height) else {
            continue;
        };
        context.set_global_alpha(0.15 + 0.75 * projected.depth);
        context.begin_path();
        if context
            .arc(
                projected.x,
                projected.y,
                POINT_RADIUS * projected.scale,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            context.fill();
        }
    }
    context.set_global_alpha(1.0);
}

#[function_component(HeroCanvas)]
pub fn hero_canvas() -> Html {
    let config = use_context::<AnimationConfig>().unwrap_or_default();
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |reduced_motion: &bool| {
                let running = Rc::new(Cell::new(true));
                let frame_handle = Rc::new(Cell::new(None::<i32>));
                let frame_loop: FrameLoop = Rc::new(RefCell::new(None));

                let setup = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| context_2d(&canvas).map(|context| (canvas, context)));

                match setup {
                    None => warn!("hero canvas has no 2d context"),
                    Some((canvas, context)) => {
                        let points = fibonacci_sphere(POINT_COUNT);
                        if *reduced_motion {
                            debug!("reduced motion: hero canvas drawn once");
                            draw(&canvas, &context, &points, 0.0);
                        } else {
                            let start = Cell::new(None::<f64>);
                            let next = frame_loop.clone();
                            let running_in_loop = running.clone();
                            let handle_in_loop = frame_handle.clone();
                            *frame_loop.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                                if !running_in_loop.get() {
                                    return;
                                }
                                let origin = start.get().unwrap_or(now);
                                start.set(Some(origin));
                                draw(&canvas, &context, &points, now - origin);
                                if let (Some(window), Some(callback)) = (web_sys::window(), next.borrow().as_ref()) {
                                    handle_in_loop.set(
                                        window
                                            .request_animation_frame(callback.as_ref().unchecked_ref())
                                            .ok(),
                                    );
                                }
                            })
                                as Box<dyn FnMut(f64)>));

                            if let (Some(window), Some(callback)) = (web_sys::window(), frame_loop.borrow().as_ref()) {
                                frame_handle.set(
                                    window
                                        .request_animation_frame(callback.as_ref().unchecked_ref())
                                        .ok(),
                                );
                            }
                        }
                    }
                }

                move || {
                    running.set(false);
                    if let (Some(window), Some(handle)) = (web_sys::window(), frame_handle.take()) {
                        let _ = window.cancel_animation_frame(handle);
                    }
                    let dropped = frame_loop.borrow_mut().take();
                    drop(dropped);
                }
            },
            config.reduced_motion,
        );
    }

    html! {
        <canvas class="hero-canvas" ref={canvas_ref} aria-hidden="true"></canvas>
    }
}
