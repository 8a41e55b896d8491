use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::progress::ScrollProgress;
use crate::animation::runtime::VIEWPORT_EVENTS;

fn document_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let offset = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    Some((offset, root.scroll_height() as f64, viewport))
}

struct BarState {
    tracker: ScrollProgress,
    bar: NodeRef,
    on_frame: Option<Closure<dyn FnMut(f64)>>,
    frame_handle: Option<i32>,
}

impl BarState {
    fn write(&self, progress: f64) {
        if let Some(element) = self.bar.cast::<HtmlElement>() {
            let _ = element
                .style()
                .set_property("transform", &format!("scaleX({:.4})", progress));
        }
    }

    fn measure(&mut self) -> Option<f64> {
        let (offset, document_height, viewport) = document_metrics()?;
        self.tracker.update(offset, document_height, viewport)
    }

    fn request_frame(&mut self) {
        if self.frame_handle.is_some() {
            return;
        }
        let (Some(window), Some(callback)) = (web_sys::window(), self.on_frame.as_ref()) else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.frame_handle = Some(handle),
            Err(err) => warn!("progress bar could not request a frame: {:?}", err),
        }
    }

    fn run_frame(&mut self) {
        self.frame_handle = None;
        if let Some(progress) = self.measure() {
            self.write(progress);
        }
    }
}

#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let bar = use_node_ref();

    {
        let bar = bar.clone();
        use_effect_with_deps(
            move |_| {
                let state = Rc::new(RefCell::new(BarState {
                    tracker: ScrollProgress::default(),
                    bar,
                    on_frame: None,
                    frame_handle: None,
                }));

                let weak = Rc::downgrade(&state);
                let on_frame = Closure::wrap(Box::new(move |_now: f64| {
                    if let Some(state) = weak.upgrade() {
                        state.borrow_mut().run_frame();
                    }
                }) as Box<dyn FnMut(f64)>);
                state.borrow_mut().on_frame = Some(on_frame);

                let weak = Rc::downgrade(&state);
                let on_viewport = Closure::wrap(Box::new(move || {
                    if let Some(state) = weak.upgrade() {
                        state.borrow_mut().request_frame();
                    }
                }) as Box<dyn FnMut()>);

                let window = web_sys::window();
                if let Some(window) = window.as_ref() {
                    for event in VIEWPORT_EVENTS {
                        if let Err(err) = window
                            .add_event_listener_with_callback(event, on_viewport.as_ref().unchecked_ref())
                        {
                            warn!("progress bar could not listen for {}: {:?}", event, err);
                        }
                    }
                }

                // The browser may have restored a scroll position before we attached
                {
                    let mut guard = state.borrow_mut();
                    guard.measure();
                    let current = guard.tracker.value();
                    guard.write(current);
                }

                move || {
                    if let Some(window) = window {
                        for event in VIEWPORT_EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                on_viewport.as_ref().unchecked_ref(),
                            );
                        }
                        if let Some(handle) = state.borrow_mut().frame_handle.take() {
                            let _ = window.cancel_animation_frame(handle);
                        }
                    }
                    let on_frame = state.borrow_mut().on_frame.take();
                    drop(on_frame);
                }
            },
            (),
        );
    }

    html! {
        <div class="scroll-progress" aria-hidden="true">
            <div class="scroll-progress-bar" ref={bar} style="transform: scaleX(0)"></div>
        </div>
    }
}
