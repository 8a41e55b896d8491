#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
    OutExpo,
    OutBack,
}

impl Easing {
    /// Maps linear progress to eased progress. Input is clamped to [0, 1] and
    /// every curve returns exactly 0 and 1 at the ends.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseOut => {
                let t1 = t - 1.0;
                t1 * t1 * t1 + 1.0
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let t1 = -2.0 * t + 2.0;
                    1.0 - t1 * t1 * t1 / 2.0
                }
            }
            Easing::OutExpo => 1.0 - 2f64.powf(-10.0 * t),
            Easing::OutBack => {
                // Overshoots slightly past 1 before settling.
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                let t1 = t - 1.0;
                1.0 + C3 * t1 * t1 * t1 + C1 * t1 * t1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::OutExpo,
        Easing::OutBack,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.5), 1.0);
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.3) > 0.3);
        assert!(Easing::EaseInOut.apply(0.3) < 0.3);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn out_back_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::OutBack.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }
}
