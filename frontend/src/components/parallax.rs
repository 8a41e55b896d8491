use log::warn;
use yew::prelude::*;

use crate::animation::driver::use_animation_scope;
use crate::animation::easing::Easing;
use crate::animation::scope::AnimationRegistration;
use crate::animation::trigger::{ScrollTrigger, Threshold};
use crate::animation::tween::{Tween, VisualState};

const BAND_KEY: &str = "parallax";
const LAYER_KEY: &str = "parallax-layer";

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(120.0)]
    pub travel_px: f64,
}

#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let node = use_node_ref();
    let travel = props.travel_px;
    use_animation_scope(node.clone(), travel, move |handle| {
        if handle.config().reduced_motion {
            return;
        }
        let tween = Tween::new(
            VisualState {
                y: travel / 2.0,
                ..VisualState::SETTLED
            },
            VisualState {
                y: -travel / 2.0,
                ..VisualState::SETTLED
            },
            0.0,
        )
        .easing(Easing::Linear);
        let registration = AnimationRegistration::new(LAYER_KEY, tween).trigger(ScrollTrigger::scrub(
            BAND_KEY,
            Threshold::new(0.0, 1.0),
            Threshold::new(1.0, 0.0),
        ));
        if let Err(err) = handle.register(registration) {
            warn!("parallax not registered: {}", err);
        }
    });

    html! {
        <div ref={node} class={classes!("parallax", props.class.clone())} data-anim={BAND_KEY}>
            <div class="parallax-layer" data-anim={LAYER_KEY}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
