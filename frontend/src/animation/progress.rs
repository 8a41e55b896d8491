/// Fraction of the document scrolled, in [0, 1]. Pages that fit in the
/// viewport report 0.
pub fn scroll_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollProgress {
    value: f64,
    resolution: f64,
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self {
            value: 0.0,
            resolution: 0.001,
        }
    }
}

impl ScrollProgress {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn update(&mut self, offset: f64, document_height: f64, viewport_height: f64) -> Option<f64> {
        let next = scroll_progress(offset, document_height, viewport_height);
        let at_edge = (next == 0.0 || next == 1.0) && next != self.value;
        if at_edge || (next - self.value).abs() >= self.resolution {
            self.value = next;
            Some(next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(500.0, 3000.0, 1000.0), 0.25);
    }

    #[test]
    fn short_documents_report_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(40.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(-80.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2300.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn monotonic_while_scrolling_down() {
        let mut last = 0.0;
        for offset in (0..=2000).step_by(37) {
            let progress = scroll_progress(offset as f64, 3000.0, 1000.0);
            assert!(progress >= last);
            last = progress;
        }
    }

    #[test]
    fn first_measurement_picks_up_restored_offset() {
        let mut tracker = ScrollProgress::default();
        assert_eq!(tracker.update(1500.0, 3000.0, 1000.0), Some(0.75));
        assert_eq!(tracker.value(), 0.75);

        let mut at_top = ScrollProgress::default();
        assert_eq!(at_top.update(0.0, 3000.0, 1000.0), None);
        assert_eq!(at_top.value(), 0.0);
    }

    #[test]
    fn tracker_drops_sub_step_changes() {
        let mut tracker = ScrollProgress::default();
        assert_eq!(tracker.update(0.5, 3000.0, 1000.0), None);
        assert_eq!(tracker.update(1000.0, 3000.0, 1000.0), Some(0.5));
        assert_eq!(tracker.update(1000.5, 3000.0, 1000.0), None);
        assert_eq!(tracker.update(2000.0, 3000.0, 1000.0), Some(1.0));
        assert_eq!(tracker.update(0.0, 3000.0, 1000.0), Some(0.0));
        assert_eq!(tracker.value(), 0.0);
    }
}
