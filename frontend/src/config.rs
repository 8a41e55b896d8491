use log::Level;

use crate::animation::easing::Easing;
use crate::animation::trigger::Threshold;
use crate::animation::tween::{Tween, VisualState};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub duration_ms: f64,
    pub easing: Easing,
    pub reveal_start: Threshold,
    pub reveal_from: VisualState,
    pub page_enter_from: VisualState,
    pub page_enter_ms: f64,
    pub stagger_ms: f64,
    pub reduced_motion: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800.0,
            easing: Easing::EaseOut,
            reveal_start: Threshold::new(0.0, 0.85),
            reveal_from: VisualState {
                opacity: 0.0,
                y: 40.0,
                ..VisualState::SETTLED
            },
            page_enter_from: VisualState {
                opacity: 0.0,
                y: 20.0,
                blur: 8.0,
                ..VisualState::SETTLED
            },
            page_enter_ms: 500.0,
            stagger_ms: 120.0,
            reduced_motion: false,
        }
    }
}

impl AnimationConfig {
    pub fn detect() -> Self {
        let reduced_motion = web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false);
        Self {
            reduced_motion,
            ..Self::default()
        }
    }

    pub fn tween(&self, from: VisualState, to: VisualState, delay_ms: f64) -> Tween {
        let tween = Tween {
            from,
            to,
            duration_ms: self.duration_ms,
            delay_ms,
            easing: self.easing,
        };
        self.adjust(tween)
    }

    pub fn reveal_tween(&self, delay_ms: f64) -> Tween {
        self.tween(self.reveal_from, VisualState::SETTLED, delay_ms)
    }

    pub fn page_enter_tween(&self) -> Tween {
        let tween = Tween {
            from: self.page_enter_from,
            to: VisualState::SETTLED,
            duration_ms: self.page_enter_ms,
            delay_ms: 0.0,
            easing: Easing::EaseInOut,
        };
        self.adjust(tween)
    }

    pub fn adjust(&self, tween: Tween) -> Tween {
        if self.reduced_motion {
            tween.instant()
        } else {
            tween
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub company: &'static str,
    pub contact_email: &'static str,
    pub submit_delay_ms: u32,
    pub newsletter_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company: "Brightline",
            contact_email: "hello@brightline.studio",
            submit_delay_ms: 1_500,
            newsletter_delay_ms: 900,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_collapses_tweens() {
        let config = AnimationConfig {
            reduced_motion: true,
            ..AnimationConfig::default()
        };
        let tween = config.reveal_tween(300.0);
        assert_eq!(tween.duration_ms, 0.0);
        assert_eq!(tween.delay_ms, 0.0);
        assert_eq!(tween.sample(0.0), VisualState::SETTLED);
    }

    #[test]
    fn reveal_starts_hidden() {
        let config = AnimationConfig::default();
        let tween = config.reveal_tween(0.0);
        assert_eq!(tween.sample(0.0).opacity, 0.0);
        assert_eq!(tween.sample(config.duration_ms), VisualState::SETTLED);
    }
}
