use super::easing::Easing;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub blur: f64,
}

impl VisualState {
    pub const SETTLED: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        blur: 0.0,
    };

    pub fn lerp(&self, other: &VisualState, t: f64) -> VisualState {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(self.opacity, other.opacity),
            x: mix(self.x, other.x),
            y: mix(self.y, other.y),
            scale: mix(self.scale, other.scale),
            blur: mix(self.blur, other.blur).max(0.0),
        }
    }

    pub fn style_properties(&self) -> [(&'static str, String); 3] {
        let filter = if self.blur > 0.001 {
            format!("blur({:.2}px)", self.blur)
        } else {
            "none".to_string()
        };
        [
            ("opacity", format!("{:.3}", self.opacity.clamp(0.0, 1.0))),
            (
                "transform",
                format!(
                    "translate3d({:.2}px, {:.2}px, 0) scale({:.3})",
                    self.x, self.y, self.scale
                ),
            ),
            ("filter", filter),
        ]
    }

    pub fn to_css(&self) -> String {
        self.style_properties()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for VisualState {
    fn default() -> Self {
        VisualState::SETTLED
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: VisualState, to: VisualState, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn instant(mut self) -> Self {
        self.duration_ms = 0.0;
        self.delay_ms = 0.0;
        self
    }

    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    /// Eased progress in [0, 1] after `elapsed_ms` since the tween started.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if elapsed_ms >= self.total_ms() {
            return 1.0;
        }
        let active = elapsed_ms - self.delay_ms;
        if active <= 0.0 || self.duration_ms <= 0.0 {
            return 0.0;
        }
        self.easing.apply(active / self.duration_ms)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.total_ms()
    }

    pub fn sample(&self, elapsed_ms: f64) -> VisualState {
        self.from.lerp(&self.to, self.progress_at(elapsed_ms))
    }

    pub fn sample_progress(&self, progress: f64) -> VisualState {
        self.from.lerp(&self.to, self.easing.apply(progress))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<(f64, Tween)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tween` to start once everything before it has finished.
    pub fn then(mut self, tween: Tween) -> Self {
        let offset = self.duration_ms();
        self.entries.push((offset, tween));
        self
    }

    /// Starts `tween` together with the most recently added entry.
    pub fn with(mut self, tween: Tween) -> Self {
        let offset = self.entries.last().map(|(offset, _)| *offset).unwrap_or(0.0);
        self.entries.push((offset, tween));
        self
    }

    pub fn staggered(tween: Tween, count: usize, step_ms: f64) -> Self {
        let entries = (0..count).map(|i| (i as f64 * step_ms, tween)).collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn duration_ms(&self) -> f64 {
        self.entries
            .iter()
            .map(|(offset, tween)| offset + tween.total_ms())
            .fold(0.0, f64::max)
    }

    #[cfg(test)]
    pub fn sample(&self, index: usize, elapsed_ms: f64) -> Option<VisualState> {
        self.entries
            .get(index)
            .map(|(offset, tween)| tween.sample(elapsed_ms - offset))
    }

    /// Folds every offset into its tween's delay so entries can be scheduled
    /// independently against one start time.
    pub fn into_tweens(self) -> Vec<Tween> {
        self.entries
            .into_iter()
            .map(|(offset, tween)| tween.delay(tween.delay_ms + offset))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden() -> VisualState {
        VisualState {
            opacity: 0.0,
            y: 40.0,
            ..VisualState::SETTLED
        }
    }

    #[test]
    fn delay_holds_from_state() {
        let tween = Tween::new(hidden(), VisualState::SETTLED, 400.0).delay(200.0);
        assert_eq!(tween.sample(0.0), hidden());
        assert_eq!(tween.sample(199.0), hidden());
        assert!(tween.sample(300.0).opacity > 0.0);
        assert_eq!(tween.sample(600.0), VisualState::SETTLED);
        assert!(tween.is_finished(600.0));
        assert!(!tween.is_finished(599.0));
    }

    #[test]
    fn linear_midpoint() {
        let tween = Tween::new(hidden(), VisualState::SETTLED, 100.0).easing(Easing::Linear);
        let mid = tween.sample(50.0);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn css_contains_all_properties() {
        let css = VisualState {
            blur: 4.0,
            ..hidden()
        }
        .to_css();
        assert!(css.contains("opacity: 0.000;"));
        assert!(css.contains("translate3d(0.00px, 40.00px, 0) scale(1.000)"));
        assert!(css.contains("blur(4.00px)"));
        assert!(VisualState::SETTLED.to_css().contains("filter: none;"));
    }

    #[test]
    fn timeline_then_and_with() {
        let a = Tween::new(hidden(), VisualState::SETTLED, 300.0);
        let b = Tween::new(hidden(), VisualState::SETTLED, 200.0);
        let timeline = Timeline::new().then(a).then(b).with(a);
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.duration_ms(), 600.0);
        assert_eq!(timeline.sample(1, 300.0), Some(hidden()));
        assert_eq!(timeline.sample(2, 600.0), Some(VisualState::SETTLED));
        assert_eq!(timeline.sample(3, 0.0), None);
    }

    #[test]
    fn stagger_folds_into_delay() {
        let base = Tween::new(hidden(), VisualState::SETTLED, 500.0);
        let tweens = Timeline::staggered(base, 3, 100.0).into_tweens();
        let delays: Vec<f64> = tweens.iter().map(|t| t.delay_ms).collect();
        assert_eq!(delays, vec![0.0, 100.0, 200.0]);
    }
}
