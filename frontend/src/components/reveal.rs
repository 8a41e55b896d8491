use log::{debug, warn};
use yew::prelude::*;

use crate::animation::driver::use_animation_scope;
use crate::animation::scope::AnimationRegistration;
use crate::animation::trigger::ScrollTrigger;
use crate::animation::tween::Timeline;
use crate::config::AnimationConfig;

const REVEAL_KEY: &str = "reveal";
const GROUP_KEY: &str = "reveal-group";

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.0)]
    pub delay_ms: f64,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = use_context::<AnimationConfig>().unwrap_or_default();
    let node = use_node_ref();
    {
        let config = config.clone();
        let delay_ms = props.delay_ms;
        use_animation_scope(node.clone(), (), move |handle| {
            let registration = AnimationRegistration::new(REVEAL_KEY, config.reveal_tween(delay_ms))
                .trigger(ScrollTrigger::once(REVEAL_KEY, config.reveal_start));
            if let Err(err) = handle.register(registration) {
                warn!("reveal not registered: {}", err);
            }
        });
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone())}
            data-anim={REVEAL_KEY}
            style={config.reveal_from.to_css()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealGroupProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(RevealGroup)]
pub fn reveal_group(props: &RevealGroupProps) -> Html {
    let config = use_context::<AnimationConfig>().unwrap_or_default();
    let node = use_node_ref();
    let count = props.children.len();
    {
        let config = config.clone();
        use_animation_scope(node.clone(), count, move |handle| {
            let timeline = Timeline::staggered(config.reveal_tween(0.0), count, config.stagger_ms);
            if timeline.is_empty() {
                return;
            }
            debug!("staggering {} items over {}ms", timeline.len(), timeline.duration_ms());
            for (i, tween) in timeline.into_tweens().into_iter().enumerate() {
                let registration = AnimationRegistration::new(format!("{}-{}", GROUP_KEY, i), tween)
                    .trigger(ScrollTrigger::once(GROUP_KEY, config.reveal_start));
                if let Err(err) = handle.register(registration) {
                    warn!("group item {} not registered: {}", i, err);
                }
            }
        });
    }

    let hidden = config.reveal_from.to_css();
    html! {
        <div ref={node} class={props.class.clone()} data-anim={GROUP_KEY}>
            {
                for props.children.iter().enumerate().map(|(i, child)| html! {
                    <div class="reveal-item" data-anim={format!("{}-{}", GROUP_KEY, i)} style={hidden.clone()}>
                        { child }
                    </div>
                })
            }
        </div>
    }
}
