use log::warn;
use yew::prelude::*;

use crate::animation::driver::use_animation_scope;
use crate::animation::easing::Easing;
use crate::animation::scope::AnimationRegistration;
use crate::animation::trigger::ScrollTrigger;
use crate::animation::tween::{Tween, VisualState};
use crate::config::AnimationConfig;

const COUNTER_KEY: &str = "count-up";
const COUNT_MS: f64 = 1_600.0;

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub target: u32,
    #[prop_or_default]
    pub start: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub label: AttrValue,
}

pub fn value_at(start: u32, target: u32, progress: f64) -> u32 {
    let span = target as f64 - start as f64;
    (start as f64 + span * progress.clamp(0.0, 1.0)).round() as u32
}

#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let config = use_context::<AnimationConfig>().unwrap_or_default();
    let node = use_node_ref();
    let value = use_state_eq(|| props.start);
    {
        let value = value.clone();
        let start = props.start;
        let target = props.target;
        let config = config.clone();
        use_animation_scope(node.clone(), (start, target), move |handle| {
            let tween = Tween::new(
                VisualState {
                    opacity: 0.4,
                    scale: 0.92,
                    ..VisualState::SETTLED
                },
                VisualState::SETTLED,
                COUNT_MS,
            )
            .easing(Easing::OutExpo);
            let registration = AnimationRegistration::new(COUNTER_KEY, tween)
                .trigger(ScrollTrigger::every_entry(COUNTER_KEY, config.reveal_start))
                .on_progress(Callback::from(move |progress: f64| {
                    value.set(value_at(start, target, progress));
                }));
            if let Err(err) = handle.register(registration) {
                warn!("counter not registered: {}", err);
            }
        });
    }

    html! {
        <div class="count-up" ref={node} data-anim={COUNTER_KEY}>
            <span class="count-up-value">{ *value }{ props.suffix.to_string() }</span>
            if !props.label.is_empty() {
                <span class="count-up-label">{ props.label.to_string() }</span>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_and_clamps() {
        assert_eq!(value_at(0, 120, 0.0), 0);
        assert_eq!(value_at(0, 120, 0.5), 60);
        assert_eq!(value_at(0, 120, 1.0), 120);
        assert_eq!(value_at(0, 120, 1.3), 120);
        assert_eq!(value_at(10, 0, 0.5), 5);
    }
}
