//! Binds an [`AnimationScope`](super::scope::AnimationScope) to a DOM subtree:
//! measures trigger elements, writes inline styles and owns the browser listeners.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::runtime::{FrameHost, ScopeRuntime, VIEWPORT_EVENTS};
use super::scope::{with_animation_scope, FrameUpdate, ScopeHandle};
use super::trigger::{TargetKey, TriggerGeometry};
use super::tween::VisualState;
use crate::config::AnimationConfig;

const ANIMATED_PROPERTIES: [&str; 3] = ["opacity", "transform", "filter"];

#[derive(Default)]
struct BrowserHost {
    on_viewport: Option<Closure<dyn FnMut()>>,
    on_frame: Option<Closure<dyn FnMut(f64)>>,
}

impl FrameHost for BrowserHost {
    fn observe_viewport(&mut self) -> bool {
        let (Some(window), Some(listener)) = (web_sys::window(), self.on_viewport.as_ref()) else {
            return false;
        };
        let mut attached = false;
        for event in VIEWPORT_EVENTS {
            match window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
                Ok(()) => attached = true,
                Err(err) => warn!("could not listen for {}: {:?}", event, err),
            }
        }
        attached
    }

    fn unobserve_viewport(&mut self) {
        let (Some(window), Some(listener)) = (web_sys::window(), self.on_viewport.as_ref()) else {
            return;
        };
        for event in VIEWPORT_EVENTS {
            let _ = window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
    }

    fn request_frame(&mut self) -> Option<i32> {
        let window = web_sys::window()?;
        let callback = self.on_frame.as_ref()?;
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.cancel_animation_frame(handle) {
                warn!("could not cancel animation frame: {:?}", err);
            }
        }
    }
}

struct DriverState {
    runtime: ScopeRuntime<BrowserHost>,
    root: Element,
}

pub struct ScopeDriver {
    state: Rc<RefCell<DriverState>>,
}

impl ScopeDriver {
    pub fn mount<F>(root: Element, config: &AnimationConfig, setup: F) -> Self
    where
        F: FnOnce(&mut ScopeHandle<'_>),
    {
        let scope = with_animation_scope(config, setup);
        for (target, style) in scope.initial_styles() {
            if let Some(element) = resolve(&root, &target) {
                write_style(&element, &style);
            }
        }
        let registrations = scope.len();

        let state = Rc::new(RefCell::new(DriverState {
            runtime: ScopeRuntime::new(scope, BrowserHost::default()),
            root,
        }));

        let weak = Rc::downgrade(&state);
        let on_frame = Closure::wrap(Box::new(move |now: f64| {
            if let Some(state) = weak.upgrade() {
                run_frame(&state, now);
            }
        }) as Box<dyn FnMut(f64)>);

        let weak = Rc::downgrade(&state);
        let on_viewport = Closure::wrap(Box::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().runtime.viewport_changed();
            }
        }) as Box<dyn FnMut()>);

        {
            let mut guard = state.borrow_mut();
            let host = guard.runtime.host_mut();
            host.on_frame = Some(on_frame);
            host.on_viewport = Some(on_viewport);
            guard.runtime.start();
        }
        debug!("animation scope mounted with {} registrations", registrations);
        Self { state }
    }

    /// Kills every tween and binding, removes the listeners and reverts the
    /// inline styles this driver wrote. Safe to call more than once.
    pub fn teardown(&self) {
        let (on_viewport, on_frame) = {
            let mut guard = self.state.borrow_mut();
            if guard.runtime.is_torn_down() {
                return;
            }
            let targets = guard.runtime.teardown();
            for target in &targets {
                if let Some(element) = resolve(&guard.root, target) {
                    clear_style(&element);
                }
            }
            debug!("animation scope torn down, {} targets reverted", targets.len());
            let host = guard.runtime.host_mut();
            (host.on_viewport.take(), host.on_frame.take())
        };
        drop(on_viewport);
        drop(on_frame);
    }
}

impl Drop for ScopeDriver {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn run_frame(state: &Rc<RefCell<DriverState>>, now: f64) {
    let updates: Vec<FrameUpdate> = {
        let mut guard = state.borrow_mut();
        let DriverState { runtime, root } = &mut *guard;
        let updates = runtime.frame(now, |key| measure(root, key), viewport_height);
        for update in &updates {
            if let Some(element) = resolve(root, &update.target) {
                write_style(&element, &update.style);
            }
        }
        updates
    };

    // Listeners may re-render or unmount the owner, so they run unborrowed.
    for update in &updates {
        update.notify();
    }

    if let Ok(mut guard) = state.try_borrow_mut() {
        guard.runtime.continue_if_animating();
    }
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

fn resolve(root: &Element, key: &TargetKey) -> Option<Element> {
    let selector = key.selector();
    if root.matches(&selector).unwrap_or(false) {
        return Some(root.clone());
    }
    root.query_selector(&selector).ok().flatten()
}

fn measure(root: &Element, key: &TargetKey) -> Option<TriggerGeometry> {
    let element = resolve(root, key)?;
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    Some(TriggerGeometry {
        top: rect.top(),
        height: rect.height(),
    })
}

fn write_style(element: &Element, style: &VisualState) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let declaration = element.style();
    for (name, value) in style.style_properties() {
        if let Err(err) = declaration.set_property(name, &value) {
            warn!("could not set {} on animated element: {:?}", name, err);
        }
    }
}

fn clear_style(element: &Element) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let declaration = element.style();
    for name in ANIMATED_PROPERTIES {
        let _ = declaration.remove_property(name);
    }
}

/// Mounts a [`ScopeDriver`] on `root` after render and tears it down when
/// `deps` change or the component unmounts.
#[hook]
pub fn use_animation_scope<D, F>(root: NodeRef, deps: D, setup: F)
where
    D: PartialEq + 'static,
    F: FnOnce(&mut ScopeHandle<'_>) + 'static,
{
    let config = use_context::<AnimationConfig>().unwrap_or_default();
    use_effect_with_deps(
        move |_| {
            let driver = root
                .cast::<Element>()
                .map(|element| ScopeDriver::mount(element, &config, setup));
            if driver.is_none() {
                warn!("animation root was not rendered, skipping scope");
            }
            move || {
                if let Some(driver) = driver {
                    driver.teardown();
                }
            }
        },
        deps,
    );
}
