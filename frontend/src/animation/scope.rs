//! Scoped animation registry.
//!
//! Every tween created for a component goes through an [`AnimationScope`].
//! Entries live in a slot map keyed by [`RegistrationId`], so nothing outside
//! the scope holds a reference into it, and [`AnimationScope::teardown`] can
//! kill all of them at once when the owning component unmounts.

use std::collections::HashMap;

use log::debug;
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;
use yew::Callback;

use super::trigger::{ScrollTrigger, TargetKey, TriggerEvent, TriggerGeometry};
use super::tween::{Tween, VisualState};
use crate::config::AnimationConfig;

new_key_type! {
    pub struct RegistrationId;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("animation scope has already been torn down")]
    TornDown,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum PlayState {
    Pending { dirty: bool },
    Queued,
    Running { started_at: f64 },
    Scrubbed { progress: f64, dirty: bool },
    Done,
}

pub struct AnimationRegistration {
    pub target: TargetKey,
    pub tween: Tween,
    pub trigger: Option<ScrollTrigger>,
    on_progress: Option<Callback<f64>>,
    on_complete: Option<Callback<()>>,
    state: PlayState,
}

impl AnimationRegistration {
    pub fn new(target: impl Into<TargetKey>, tween: Tween) -> Self {
        Self {
            target: target.into(),
            tween,
            trigger: None,
            on_progress: None,
            on_complete: None,
            state: PlayState::Queued,
        }
    }

    pub fn trigger(mut self, trigger: ScrollTrigger) -> Self {
        self.trigger = Some(trigger);
        self.state = PlayState::Pending { dirty: false };
        self
    }

    pub fn on_progress(mut self, callback: Callback<f64>) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub fn on_complete(mut self, callback: Callback<()>) -> Self {
        self.on_complete = Some(callback);
        self
    }

    fn is_in_flight(&self) -> bool {
        matches!(self.state, PlayState::Queued | PlayState::Running { .. })
    }

    fn needs_frame(&self) -> bool {
        self.is_in_flight()
            || matches!(
                self.state,
                PlayState::Pending { dirty: true } | PlayState::Scrubbed { dirty: true, .. }
            )
    }
}

#[derive(Clone)]
pub struct FrameUpdate {
    pub target: TargetKey,
    pub style: VisualState,
    pub progress: f64,
    pub completed: bool,
    on_progress: Option<Callback<f64>>,
    on_complete: Option<Callback<()>>,
}

impl FrameUpdate {
    /// Runs the registration's listeners for this frame. Called by the driver
    /// after it has released the scope, since listeners may re-render.
    pub fn notify(&self) {
        if let Some(callback) = &self.on_progress {
            callback.emit(self.progress);
        }
        if self.completed {
            if let Some(callback) = &self.on_complete {
                callback.emit(());
            }
        }
    }
}

#[derive(Default)]
pub struct AnimationScope {
    registrations: SlotMap<RegistrationId, AnimationRegistration>,
    torn_down: bool,
}

impl AnimationScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        registration: AnimationRegistration,
    ) -> Result<RegistrationId, ScopeError> {
        if self.torn_down {
            return Err(ScopeError::TornDown);
        }
        Ok(self.registrations.insert(registration))
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// From-state of every registration, applied before the first paint so
    /// targets never flash in their final state.
    pub fn initial_styles(&self) -> Vec<(TargetKey, VisualState)> {
        self.registrations
            .values()
            .map(|entry| (entry.target.clone(), entry.tween.from))
            .collect()
    }

    pub fn active_bindings(&self) -> usize {
        self.registrations
            .values()
            .filter(|entry| entry.trigger.as_ref().map_or(false, ScrollTrigger::is_live))
            .count()
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.registrations
            .values()
            .filter(|entry| entry.is_in_flight())
            .count()
    }

    pub fn has_bindings(&self) -> bool {
        self.active_bindings() > 0
    }

    pub fn is_animating(&self) -> bool {
        self.registrations.values().any(AnimationRegistration::needs_frame)
    }

    /// Feeds fresh viewport measurements to every live binding. `lookup` is
    /// called at most once per distinct trigger key.
    pub fn evaluate_triggers<F>(&mut self, mut lookup: F, viewport_height: f64)
    where
        F: FnMut(&TargetKey) -> Option<TriggerGeometry>,
    {
        let mut measured: HashMap<TargetKey, Option<TriggerGeometry>> = HashMap::new();
        for entry in self.registrations.values_mut() {
            let Some(trigger) = entry.trigger.as_mut() else {
                continue;
            };
            if !trigger.is_live() {
                continue;
            }
            let geometry = *measured
                .entry(trigger.trigger.clone())
                .or_insert_with(|| lookup(&trigger.trigger));
            let event = trigger.evaluate(geometry, viewport_height);
            if trigger.is_detached() {
                debug!("trigger {} left the document, binding dropped", trigger.trigger);
            }
            match event {
                Some(TriggerEvent::Enter) => entry.state = PlayState::Queued,
                Some(TriggerEvent::Leave) => entry.state = PlayState::Pending { dirty: true },
                Some(TriggerEvent::Scrub(progress)) => {
                    entry.state = PlayState::Scrubbed {
                        progress,
                        dirty: true,
                    }
                }
                None => {}
            }
        }
    }

    /// Advances every running tween to `now_ms` and returns the styles to
    /// write.
    pub fn tick(&mut self, now_ms: f64) -> Vec<FrameUpdate> {
        let mut updates = Vec::new();
        for entry in self.registrations.values_mut() {
            let (style, progress, completed) = match entry.state {
                PlayState::Queued | PlayState::Running { .. } => {
                    let started_at = match entry.state {
                        PlayState::Running { started_at } => started_at,
                        _ => now_ms,
                    };
                    let elapsed = now_ms - started_at;
                    let finished = entry.tween.is_finished(elapsed);
                    entry.state = if finished {
                        PlayState::Done
                    } else {
                        PlayState::Running { started_at }
                    };
                    (
                        entry.tween.sample(elapsed),
                        entry.tween.progress_at(elapsed),
                        finished,
                    )
                }
                PlayState::Pending { dirty: true } => {
                    entry.state = PlayState::Pending { dirty: false };
                    (entry.tween.from, 0.0, false)
                }
                PlayState::Scrubbed {
                    progress,
                    dirty: true,
                } => {
                    entry.state = PlayState::Scrubbed {
                        progress,
                        dirty: false,
                    };
                    (
                        entry.tween.sample_progress(progress),
                        entry.tween.easing.apply(progress),
                        false,
                    )
                }
                _ => continue,
            };
            updates.push(FrameUpdate {
                target: entry.target.clone(),
                style,
                progress,
                completed,
                on_progress: entry.on_progress.clone(),
                on_complete: entry.on_complete.clone(),
            });
        }
        updates
    }

    /// Kills every registration and its binding, whatever state it is in.
    /// Returns the targets whose inline styles should be reverted; a second
    /// call returns nothing.
    pub fn teardown(&mut self) -> Vec<TargetKey> {
        if self.torn_down {
            return Vec::new();
        }
        self.torn_down = true;
        let mut targets: Vec<TargetKey> = Vec::new();
        for (_, mut entry) in self.registrations.drain() {
            if let Some(trigger) = entry.trigger.as_mut() {
                trigger.detach();
            }
            if !targets.contains(&entry.target) {
                targets.push(entry.target);
            }
        }
        targets
    }
}

pub struct ScopeHandle<'a> {
    scope: &'a mut AnimationScope,
    config: &'a AnimationConfig,
}

impl<'a> ScopeHandle<'a> {
    pub fn config(&self) -> &AnimationConfig {
        self.config
    }

    pub fn register(
        &mut self,
        mut registration: AnimationRegistration,
    ) -> Result<RegistrationId, ScopeError> {
        registration.tween = self.config.adjust(registration.tween);
        self.scope.register(registration)
    }
}

/// Builds a scope and runs `setup` against it. The caller owns the result and
/// must call [`AnimationScope::teardown`] when its subtree goes away.
pub fn with_animation_scope<F>(config: &AnimationConfig, setup: F) -> AnimationScope
where
    F: FnOnce(&mut ScopeHandle<'_>),
{
    let mut scope = AnimationScope::new();
    {
        let mut handle = ScopeHandle {
            scope: &mut scope,
            config,
        };
        setup(&mut handle);
    }
    scope
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::animation::easing::Easing;
    use crate::animation::trigger::Threshold;

    const VIEWPORT: f64 = 1000.0;

    fn fade_in() -> Tween {
        Tween::new(
            VisualState {
                opacity: 0.0,
                ..VisualState::SETTLED
            },
            VisualState::SETTLED,
            400.0,
        )
        .easing(Easing::Linear)
    }

    fn lookup_at(top: f64) -> impl FnMut(&TargetKey) -> Option<TriggerGeometry> {
        move |_| Some(TriggerGeometry { top, height: 200.0 })
    }

    #[test]
    fn untriggered_tween_runs_on_first_tick() {
        let completed = Rc::new(Cell::new(0));
        let counter = completed.clone();
        let mut scope = with_animation_scope(&AnimationConfig::default(), |handle| {
            handle
                .register(
                    AnimationRegistration::new("page", fade_in())
                        .on_complete(Callback::from(move |_| counter.set(counter.get() + 1))),
                )
                .unwrap();
        });
        assert_eq!(scope.in_flight(), 1);

        let first = scope.tick(1_000.0);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].style.opacity, 0.0);

        let middle = scope.tick(1_200.0);
        assert!((middle[0].style.opacity - 0.5).abs() < 1e-9);

        let last = scope.tick(1_400.0);
        assert!(last[0].completed);
        last.iter().for_each(FrameUpdate::notify);
        assert_eq!(completed.get(), 1);
        assert!(scope.tick(1_500.0).is_empty());
        assert!(!scope.is_animating());
    }

    #[test]
    fn initial_styles_hide_targets() {
        let mut scope = AnimationScope::new();
        scope
            .register(
                AnimationRegistration::new("card", fade_in())
                    .trigger(ScrollTrigger::once("card", Threshold::new(0.0, 0.85))),
            )
            .unwrap();
        let initial = scope.initial_styles();
        assert_eq!(initial.len(), 1);
        assert_eq!(initial[0].0, TargetKey::from("card"));
        assert_eq!(initial[0].1.opacity, 0.0);
        // pending until the trigger fires
        assert!(!scope.is_animating());
        assert!(scope.tick(0.0).is_empty());
    }

    #[test]
    fn play_once_runs_a_single_time() {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let mut scope = AnimationScope::new();
        scope
            .register(
                AnimationRegistration::new("card", fade_in())
                    .trigger(ScrollTrigger::once("card", Threshold::new(0.0, 0.85)))
                    .on_complete(Callback::from(move |_| counter.set(counter.get() + 1))),
            )
            .unwrap();

        let mut now = 0.0;
        for top in [1200.0, 500.0, 1200.0, 500.0] {
            scope.evaluate_triggers(lookup_at(top), VIEWPORT);
            for _ in 0..3 {
                now += 250.0;
                scope.tick(now).iter().for_each(FrameUpdate::notify);
            }
        }
        assert_eq!(runs.get(), 1);
        assert_eq!(scope.active_bindings(), 0);
    }

    #[test]
    fn every_entry_counter_resets_and_completes() {
        let value = Rc::new(RefCell::new(Vec::new()));
        let sink = value.clone();
        let mut scope = AnimationScope::new();
        scope
            .register(
                AnimationRegistration::new("stat", fade_in())
                    .trigger(ScrollTrigger::every_entry("stat", Threshold::new(0.0, 0.85)))
                    .on_progress(Callback::from(move |p: f64| {
                        sink.borrow_mut().push((p * 120.0).round() as u32)
                    })),
            )
            .unwrap();

        let mut now = 0.0;
        for _ in 0..3 {
            scope.evaluate_triggers(lookup_at(400.0), VIEWPORT);
            for _ in 0..3 {
                now += 200.0;
                scope.tick(now).iter().for_each(FrameUpdate::notify);
            }
            assert_eq!(value.borrow().last(), Some(&120));

            scope.evaluate_triggers(lookup_at(1400.0), VIEWPORT);
            now += 16.0;
            scope.tick(now).iter().for_each(FrameUpdate::notify);
            assert_eq!(value.borrow().last(), Some(&0));
        }
        assert_eq!(scope.active_bindings(), 1);
    }

    #[test]
    fn leave_interrupts_running_tween() {
        let mut scope = AnimationScope::new();
        scope
            .register(
                AnimationRegistration::new("stat", fade_in())
                    .trigger(ScrollTrigger::every_entry("stat", Threshold::new(0.0, 0.85))),
            )
            .unwrap();
        scope.evaluate_triggers(lookup_at(400.0), VIEWPORT);
        scope.tick(0.0);
        scope.tick(100.0);
        assert_eq!(scope.in_flight(), 1);

        scope.evaluate_triggers(lookup_at(1400.0), VIEWPORT);
        assert_eq!(scope.in_flight(), 0);
        let reset = scope.tick(116.0);
        assert_eq!(reset[0].style.opacity, 0.0);
    }

    #[test]
    fn shared_trigger_is_measured_once() {
        let mut scope = AnimationScope::new();
        for i in 0..4 {
            scope
                .register(
                    AnimationRegistration::new(format!("card-{i}"), fade_in())
                        .trigger(ScrollTrigger::once("grid", Threshold::new(0.0, 0.85))),
                )
                .unwrap();
        }
        let mut calls = 0;
        scope.evaluate_triggers(
            |_| {
                calls += 1;
                Some(TriggerGeometry {
                    top: 100.0,
                    height: 600.0,
                })
            },
            VIEWPORT,
        );
        assert_eq!(calls, 1);
        assert_eq!(scope.in_flight(), 4);
    }

    #[test]
    fn missing_trigger_element_is_discarded() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let mut scope = AnimationScope::new();
        scope
            .register(
                AnimationRegistration::new("ghost", fade_in())
                    .trigger(ScrollTrigger::once("ghost", Threshold::new(0.0, 0.85)))
                    .on_complete(Callback::from(move |_| flag.set(true))),
            )
            .unwrap();
        scope.evaluate_triggers(|_| None, VIEWPORT);
        scope.evaluate_triggers(lookup_at(0.0), VIEWPORT);
        scope.tick(0.0).iter().for_each(FrameUpdate::notify);
        scope.tick(1_000.0).iter().for_each(FrameUpdate::notify);
        assert!(!fired.get());
        assert_eq!(scope.active_bindings(), 0);
    }

    #[test]
    fn teardown_releases_everything_and_is_idempotent() {
        let config = AnimationConfig::default();
        for _ in 0..5 {
            let mut scope = with_animation_scope(&config, |handle| {
                handle
                    .register(AnimationRegistration::new("hero", fade_in()))
                    .unwrap();
                handle
                    .register(
                        AnimationRegistration::new("card", fade_in())
                            .trigger(ScrollTrigger::once("card", Threshold::new(0.0, 0.85))),
                    )
                    .unwrap();
                handle
                    .register(
                        AnimationRegistration::new("card", fade_in())
                            .trigger(ScrollTrigger::every_entry("card", Threshold::new(0.0, 0.5))),
                    )
                    .unwrap();
            });
            scope.tick(0.0);
            assert_eq!(scope.active_bindings(), 2);
            assert_eq!(scope.in_flight(), 1);

            let reverted = scope.teardown();
            assert_eq!(reverted, vec![TargetKey::from("hero"), TargetKey::from("card")]);
            assert_eq!(scope.active_bindings(), 0);
            assert_eq!(scope.in_flight(), 0);
            assert!(scope.is_empty());
            assert!(scope.teardown().is_empty());
            assert_eq!(
                scope.register(AnimationRegistration::new("late", fade_in())),
                Err(ScopeError::TornDown)
            );
        }
    }

    #[test]
    fn reduced_motion_registrations_finish_in_one_tick() {
        let config = AnimationConfig {
            reduced_motion: true,
            ..AnimationConfig::default()
        };
        let mut scope = with_animation_scope(&config, |handle| {
            handle
                .register(AnimationRegistration::new("hero", config.reveal_tween(200.0)))
                .unwrap();
        });
        let updates = scope.tick(0.0);
        assert!(updates[0].completed);
        assert_eq!(updates[0].style, VisualState::SETTLED);
    }
}
