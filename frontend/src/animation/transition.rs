#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Initial,
    Settled,
    Transitioning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTransitionState {
    pub current: Option<String>,
    pub previous: Option<String>,
    pub is_first_render: bool,
}

impl Default for RouteTransitionState {
    fn default() -> Self {
        Self {
            current: None,
            previous: None,
            is_first_render: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionDecision {
    ShowImmediately,
    PlayEnter,
    Unchanged,
}

/// `Initial -> Settled -> Transitioning -> Settled -> ...`
///
/// The old page is never animated out; new content replaces it and animates
/// in. A navigation that lands mid-transition restarts the enter animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTransitionMachine {
    phase: TransitionPhase,
    route: RouteTransitionState,
}

impl Default for PageTransitionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTransitionMachine {
    pub fn new() -> Self {
        Self {
            phase: TransitionPhase::Initial,
            route: RouteTransitionState::default(),
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn route(&self) -> &RouteTransitionState {
        &self.route
    }

    pub fn navigate(&mut self, path: &str) -> TransitionDecision {
        if self.phase == TransitionPhase::Initial {
            self.route.current = Some(path.to_string());
            self.route.is_first_render = false;
            self.phase = TransitionPhase::Settled;
            return TransitionDecision::ShowImmediately;
        }
        if self.route.current.as_deref() == Some(path) {
            return TransitionDecision::Unchanged;
        }
        self.route.previous = self.route.current.replace(path.to_string());
        self.phase = TransitionPhase::Transitioning;
        TransitionDecision::PlayEnter
    }

    pub fn settle(&mut self) {
        if self.phase == TransitionPhase::Transitioning {
            self.phase = TransitionPhase::Settled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_render_is_not_animated() {
        let mut machine = PageTransitionMachine::new();
        assert!(machine.route().is_first_render);
        assert_eq!(machine.navigate("/"), TransitionDecision::ShowImmediately);
        assert_eq!(machine.phase(), TransitionPhase::Settled);
        assert!(!machine.route().is_first_render);
        assert_eq!(machine.route().previous, None);
    }

    #[test]
    fn each_distinct_route_plays_once() {
        let mut machine = PageTransitionMachine::new();
        machine.navigate("/");
        let mut plays = 0;
        for path in ["/about", "/about", "/pricing", "/pricing", "/blog/hello"] {
            if machine.navigate(path) == TransitionDecision::PlayEnter {
                plays += 1;
                assert_eq!(machine.phase(), TransitionPhase::Transitioning);
                machine.settle();
            }
            assert_eq!(machine.phase(), TransitionPhase::Settled);
        }
        assert_eq!(plays, 3);
        assert_eq!(machine.route().previous.as_deref(), Some("/pricing"));
        assert_eq!(machine.route().current.as_deref(), Some("/blog/hello"));
        assert!(!machine.route().is_first_render);
    }

    #[test]
    fn navigation_mid_transition_restarts() {
        let mut machine = PageTransitionMachine::new();
        machine.navigate("/");
        assert_eq!(machine.navigate("/services"), TransitionDecision::PlayEnter);
        assert_eq!(machine.navigate("/process"), TransitionDecision::PlayEnter);
        assert_eq!(machine.route().previous.as_deref(), Some("/services"));
        machine.settle();
        machine.settle();
        assert_eq!(machine.phase(), TransitionPhase::Settled);
    }

    #[test]
    fn settle_before_any_navigation_is_a_no_op() {
        let mut machine = PageTransitionMachine::new();
        machine.settle();
        assert_eq!(machine.phase(), TransitionPhase::Initial);
    }
}
