//! Lifecycle of a mounted scope: which viewport listeners it holds and which
//! animation frame it is waiting on. The browser side lives behind
//! [`FrameHost`] so the bookkeeping can run without a DOM.

use super::scope::{AnimationScope, FrameUpdate};
use super::trigger::{TargetKey, TriggerGeometry};

pub const VIEWPORT_EVENTS: [&str; 2] = ["scroll", "resize"];

pub trait FrameHost {
    fn observe_viewport(&mut self) -> bool;
    fn unobserve_viewport(&mut self);
    fn request_frame(&mut self) -> Option<i32>;
    fn cancel_frame(&mut self, handle: i32);
}

pub struct ScopeRuntime<H: FrameHost> {
    scope: AnimationScope,
    host: H,
    observing: bool,
    frame_handle: Option<i32>,
    viewport_dirty: bool,
}

impl<H: FrameHost> ScopeRuntime<H> {
    pub fn new(scope: AnimationScope, host: H) -> Self {
        Self {
            scope,
            host,
            observing: false,
            frame_handle: None,
            viewport_dirty: true,
        }
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_torn_down(&self) -> bool {
        self.scope.is_torn_down()
    }

    pub fn start(&mut self) {
        if self.scope.has_bindings() && !self.observing {
            self.observing = self.host.observe_viewport();
        }
        self.request_frame();
    }

    pub fn viewport_changed(&mut self) {
        if self.scope.is_torn_down() {
            return;
        }
        self.viewport_dirty = true;
        self.request_frame();
    }

    pub fn request_frame(&mut self) {
        if self.frame_handle.is_some() || self.scope.is_torn_down() {
            return;
        }
        self.frame_handle = self.host.request_frame();
    }

    /// Runs the scheduled frame: re-measures triggers if the viewport moved
    /// since the last one, then advances every tween to `now_ms`.
    pub fn frame<L, V>(&mut self, now_ms: f64, lookup: L, viewport_height: V) -> Vec<FrameUpdate>
    where
        L: FnMut(&TargetKey) -> Option<TriggerGeometry>,
        V: FnOnce() -> f64,
    {
        self.frame_handle = None;
        if self.scope.is_torn_down() {
            return Vec::new();
        }
        if self.viewport_dirty {
            self.viewport_dirty = false;
            self.scope.evaluate_triggers(lookup, viewport_height());
        }
        self.scope.tick(now_ms)
    }

    pub fn continue_if_animating(&mut self) {
        if self.scope.is_animating() {
            self.request_frame();
        }
    }

    /// Cancels the pending frame, detaches the listeners and kills the scope.
    /// Returns the targets to revert; later calls return nothing.
    pub fn teardown(&mut self) -> Vec<TargetKey> {
        if self.scope.is_torn_down() {
            return Vec::new();
        }
        if let Some(handle) = self.frame_handle.take() {
            self.host.cancel_frame(handle);
        }
        if self.observing {
            self.host.unobserve_viewport();
            self.observing = false;
        }
        self.scope.teardown()
    }

    #[cfg(test)]
    pub fn pending_frame(&self) -> Option<i32> {
        self.frame_handle
    }
}

impl<H: FrameHost> Drop for ScopeRuntime<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::animation::scope::{with_animation_scope, AnimationRegistration};
    use crate::animation::trigger::{ScrollTrigger, Threshold};
    use crate::animation::tween::{Tween, VisualState};
    use crate::config::AnimationConfig;

    #[derive(Default)]
    struct Registry {
        listeners: i32,
        frames: Vec<i32>,
        next_handle: i32,
    }

    struct CountingHost(Rc<RefCell<Registry>>);

    impl FrameHost for CountingHost {
        fn observe_viewport(&mut self) -> bool {
            self.0.borrow_mut().listeners += VIEWPORT_EVENTS.len() as i32;
            true
        }

        fn unobserve_viewport(&mut self) {
            self.0.borrow_mut().listeners -= VIEWPORT_EVENTS.len() as i32;
        }

        fn request_frame(&mut self) -> Option<i32> {
            let mut registry = self.0.borrow_mut();
            registry.next_handle += 1;
            let handle = registry.next_handle;
            registry.frames.push(handle);
            Some(handle)
        }

        fn cancel_frame(&mut self, handle: i32) {
            let mut registry = self.0.borrow_mut();
            let before = registry.frames.len();
            registry.frames.retain(|pending| *pending != handle);
            assert_eq!(registry.frames.len() + 1, before, "cancelled a frame twice");
        }
    }

    fn fade_in() -> Tween {
        Tween::new(
            VisualState {
                opacity: 0.0,
                ..VisualState::SETTLED
            },
            VisualState::SETTLED,
            300.0,
        )
    }

    fn mount(registry: &Rc<RefCell<Registry>>, with_binding: bool) -> ScopeRuntime<CountingHost> {
        let scope = with_animation_scope(&AnimationConfig::default(), |handle| {
            handle
                .register(AnimationRegistration::new("hero", fade_in()))
                .unwrap();
            if with_binding {
                handle
                    .register(
                        AnimationRegistration::new("card", fade_in())
                            .trigger(ScrollTrigger::every_entry("card", Threshold::new(0.0, 0.85))),
                    )
                    .unwrap();
            }
        });
        let mut runtime = ScopeRuntime::new(scope, CountingHost(registry.clone()));
        runtime.start();
        runtime
    }

    fn fire(
        registry: &Rc<RefCell<Registry>>,
        runtime: &mut ScopeRuntime<CountingHost>,
        now_ms: f64,
        top: f64,
    ) -> Vec<FrameUpdate> {
        if let Some(handle) = runtime.pending_frame() {
            registry.borrow_mut().frames.retain(|pending| *pending != handle);
        }
        let updates = runtime.frame(
            now_ms,
            |_| Some(TriggerGeometry { top, height: 200.0 }),
            || 1000.0,
        );
        runtime.continue_if_animating();
        updates
    }

    #[test]
    fn repeated_mount_and_teardown_leaves_nothing_behind() {
        let registry = Rc::new(RefCell::new(Registry::default()));
        for cycle in 0..10 {
            let mut runtime = mount(&registry, true);
            assert_eq!(registry.borrow().listeners, 2);
            assert_eq!(registry.borrow().frames.len(), 1);

            if cycle % 2 == 0 {
                fire(&registry, &mut runtime, 0.0, 400.0);
                runtime.viewport_changed();
                assert!(runtime.pending_frame().is_some());
            }

            let reverted = runtime.teardown();
            assert_eq!(reverted, vec![TargetKey::from("hero"), TargetKey::from("card")]);
            assert_eq!(registry.borrow().listeners, 0);
            assert!(registry.borrow().frames.is_empty());
            assert_eq!(runtime.pending_frame(), None);

            assert!(runtime.teardown().is_empty());
            drop(runtime);
            assert_eq!(registry.borrow().listeners, 0);
        }
        assert!(registry.borrow().frames.is_empty());
    }

    #[test]
    fn dropping_without_teardown_releases_listeners_and_frame() {
        let registry = Rc::new(RefCell::new(Registry::default()));
        for _ in 0..5 {
            let runtime = mount(&registry, true);
            assert_eq!(registry.borrow().listeners, 2);
            drop(runtime);
        }
        assert_eq!(registry.borrow().listeners, 0);
        assert!(registry.borrow().frames.is_empty());
    }

    #[test]
    fn unbound_scope_never_listens_and_stops_requesting_frames() {
        let registry = Rc::new(RefCell::new(Registry::default()));
        let mut runtime = mount(&registry, false);
        assert_eq!(registry.borrow().listeners, 0);

        fire(&registry, &mut runtime, 0.0, 0.0);
        assert!(runtime.pending_frame().is_some());
        let last = fire(&registry, &mut runtime, 300.0, 0.0);
        assert!(last[0].completed);
        assert_eq!(runtime.pending_frame(), None);
        assert!(registry.borrow().frames.is_empty());

        runtime.teardown();
        assert_eq!(registry.borrow().listeners, 0);
    }

    #[test]
    fn torn_down_runtime_ignores_late_events() {
        let registry = Rc::new(RefCell::new(Registry::default()));
        let mut runtime = mount(&registry, true);
        runtime.teardown();

        runtime.viewport_changed();
        runtime.request_frame();
        runtime.start();
        assert!(fire(&registry, &mut runtime, 16.0, 400.0).is_empty());
        assert!(registry.borrow().frames.is_empty());
        assert_eq!(registry.borrow().listeners, 0);
    }
}
