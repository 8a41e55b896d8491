//! Viewport-intersection triggers.
//!
//! A [`ScrollTrigger`] watches one element, identified by its [`TargetKey`],
//! and turns successive viewport measurements into discrete enter/leave
//! events or a continuous scrub progress. Measurements are passed in, so the
//! binding itself never touches the DOM.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Stable identifier of an animated element: the value of its `data-anim`
/// attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetKey(String);

impl TargetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn selector(&self) -> String {
        format!("[data-anim=\"{}\"]", self.0)
    }
}

impl From<&str> for TargetKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for TargetKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerGeometry {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdParseError {
    #[error("threshold must look like \"<edge> <viewport>\", got {0:?}")]
    Format(String),
    #[error("unknown position {0:?}, expected top, center, bottom or a percentage")]
    Position(String),
}

/// "Point `element` of the trigger meets point `viewport` of the viewport",
/// both expressed as fractions from the top (0.0 = top, 1.0 = bottom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    pub element: f64,
    pub viewport: f64,
}

impl Threshold {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    pub fn distance(&self, geometry: TriggerGeometry, viewport_height: f64) -> f64 {
        self.viewport * viewport_height - (geometry.top + self.element * geometry.height)
    }

    pub fn is_crossed(&self, geometry: TriggerGeometry, viewport_height: f64) -> bool {
        self.distance(geometry, viewport_height) >= 0.0
    }
}

fn parse_position(token: &str) -> Result<f64, ThresholdParseError> {
    match token {
        "top" => Ok(0.0),
        "center" => Ok(0.5),
        "bottom" => Ok(1.0),
        _ => token
            .strip_suffix('%')
            .and_then(|number| number.parse::<f64>().ok())
            .map(|percent| percent / 100.0)
            .ok_or_else(|| ThresholdParseError::Position(token.to_string())),
    }
}

impl FromStr for Threshold {
    type Err = ThresholdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [element, viewport] => Ok(Threshold::new(
                parse_position(element)?,
                parse_position(viewport)?,
            )),
            _ => Err(ThresholdParseError::Format(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TogglePolicy {
    PlayOnce,
    PlayEveryEntry,
    Scrub,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerEvent {
    Enter,
    Leave,
    Scrub(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BindingState {
    Idle,
    Active,
    Fired,
    Detached,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub trigger: TargetKey,
    pub start: Threshold,
    pub end: Threshold,
    pub policy: TogglePolicy,
    state: BindingState,
    last_progress: Option<f64>,
}

impl ScrollTrigger {
    pub fn new(trigger: impl Into<TargetKey>, start: Threshold, policy: TogglePolicy) -> Self {
        Self {
            trigger: trigger.into(),
            start,
            end: Threshold::new(1.0, 0.0),
            policy,
            state: BindingState::Idle,
            last_progress: None,
        }
    }

    pub fn once(trigger: impl Into<TargetKey>, start: Threshold) -> Self {
        Self::new(trigger, start, TogglePolicy::PlayOnce)
    }

    pub fn every_entry(trigger: impl Into<TargetKey>, start: Threshold) -> Self {
        Self::new(trigger, start, TogglePolicy::PlayEveryEntry)
    }

    pub fn scrub(trigger: impl Into<TargetKey>, start: Threshold, end: Threshold) -> Self {
        Self::new(trigger, start, TogglePolicy::Scrub).end(end)
    }

    pub fn end(mut self, end: Threshold) -> Self {
        self.end = end;
        self
    }

    pub fn is_detached(&self) -> bool {
        self.state == BindingState::Detached
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.state == BindingState::Fired
    }

    pub fn is_live(&self) -> bool {
        !matches!(self.state, BindingState::Detached | BindingState::Fired)
    }

    pub fn detach(&mut self) {
        self.state = BindingState::Detached;
    }

    pub fn scrub_progress(&self, geometry: TriggerGeometry, viewport_height: f64) -> f64 {
        let from_start = self.start.distance(geometry, viewport_height);
        let span = from_start - self.end.distance(geometry, viewport_height);
        if span <= f64::EPSILON {
            return if from_start >= 0.0 { 1.0 } else { 0.0 };
        }
        (from_start / span).clamp(0.0, 1.0)
    }

    /// Feeds one measurement. `None` means the trigger element is gone, which
    /// detaches the binding without emitting anything.
    pub fn evaluate(
        &mut self,
        geometry: Option<TriggerGeometry>,
        viewport_height: f64,
    ) -> Option<TriggerEvent> {
        if self.is_detached() {
            return None;
        }
        let Some(geometry) = geometry else {
            self.detach();
            return None;
        };

        match self.policy {
            TogglePolicy::PlayOnce => {
                if self.state != BindingState::Fired
                    && self.start.is_crossed(geometry, viewport_height)
                {
                    self.state = BindingState::Fired;
                    Some(TriggerEvent::Enter)
                } else {
                    None
                }
            }
            TogglePolicy::PlayEveryEntry => {
                let crossed = self.start.is_crossed(geometry, viewport_height);
                match (crossed, self.state) {
                    (true, BindingState::Idle) => {
                        self.state = BindingState::Active;
                        Some(TriggerEvent::Enter)
                    }
                    (false, BindingState::Active) => {
                        self.state = BindingState::Idle;
                        Some(TriggerEvent::Leave)
                    }
                    _ => None,
                }
            }
            TogglePolicy::Scrub => {
                let progress = self.scrub_progress(geometry, viewport_height);
                let changed = self
                    .last_progress
                    .map_or(true, |last| (last - progress).abs() > 1e-4);
                if changed {
                    self.last_progress = Some(progress);
                    Some(TriggerEvent::Scrub(progress))
                } else {
                    None
                }
            }
        }
    }
}
