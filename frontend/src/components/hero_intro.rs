use log::warn;
use yew::prelude::*;

use crate::animation::driver::use_animation_scope;
use crate::animation::easing::Easing;
use crate::animation::scope::AnimationRegistration;
use crate::animation::tween::{Timeline, Tween, VisualState};
use crate::config::AnimationConfig;

const PARTS: [&str; 4] = ["hero-eyebrow", "hero-title", "hero-lead", "hero-actions"];

const EYEBROW_MS: f64 = 400.0;
const TITLE_MS: f64 = 700.0;
const ACTIONS_MS: f64 = 500.0;

pub fn intro_timeline(config: &AnimationConfig) -> Timeline {
    let rise = |duration_ms: f64, easing: Easing| {
        Tween::new(config.reveal_from, VisualState::SETTLED, duration_ms).easing(easing)
    };
    let pop = Tween::new(
        VisualState {
            opacity: 0.0,
            scale: 0.92,
            ..VisualState::SETTLED
        },
        VisualState::SETTLED,
        TITLE_MS,
    )
    .easing(Easing::OutBack);

    Timeline::new()
        .then(rise(EYEBROW_MS, config.easing))
        .then(pop)
        .with(rise(TITLE_MS, config.easing))
        .then(rise(ACTIONS_MS, Easing::EaseInOut))
}

#[derive(Properties, PartialEq)]
pub struct HeroIntroProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    pub lead: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(HeroIntro)]
pub fn hero_intro(props: &HeroIntroProps) -> Html {
    let config = use_context::<AnimationConfig>().unwrap_or_default();
    let node = use_node_ref();
    {
        let config = config.clone();
        use_animation_scope(node.clone(), (), move |handle| {
            let tweens = intro_timeline(&config).into_tweens();
            for (key, tween) in PARTS.into_iter().zip(tweens) {
                if let Err(err) = handle.register(AnimationRegistration::new(key, tween)) {
                    warn!("hero part {} not registered: {}", key, err);
                }
            }
        });
    }

    let hidden: Vec<String> = intro_timeline(&config)
        .into_tweens()
        .iter()
        .map(|tween| tween.from.to_css())
        .collect();
    let style = |i: usize| hidden.get(i).cloned().unwrap_or_default();

    html! {
        <div ref={node} class="container hero-content">
            <span class="eyebrow" data-anim={PARTS[0]} style={style(0)}>{ props.eyebrow.clone() }</span>
            <h1 data-anim={PARTS[1]} style={style(1)}>{ props.title.clone() }</h1>
            <p class="section-lead" data-anim={PARTS[2]} style={style(2)}>{ props.lead.clone() }</p>
            <div class="hero-actions" data-anim={PARTS[3]} style={style(3)}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_runs_in_order_with_lead_beside_title() {
        let timeline = intro_timeline(&AnimationConfig::default());
        assert_eq!(timeline.len(), PARTS.len());
        assert_eq!(timeline.duration_ms(), EYEBROW_MS + TITLE_MS + ACTIONS_MS);

        let delays: Vec<f64> = timeline.into_tweens().iter().map(|t| t.delay_ms).collect();
        assert_eq!(delays, vec![0.0, EYEBROW_MS, EYEBROW_MS, EYEBROW_MS + TITLE_MS]);
    }

    #[test]
    fn headline_pops_from_smaller_scale() {
        let tweens = intro_timeline(&AnimationConfig::default()).into_tweens();
        assert_eq!(tweens[1].easing, Easing::OutBack);
        assert!(tweens[1].from.scale < 1.0);
        assert_eq!(tweens[1].sample(tweens[1].total_ms()), VisualState::SETTLED);
    }
}
