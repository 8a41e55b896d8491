use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{Reveal, RevealGroup};
use crate::content::pricing::{BillingCycle, FAQ, TIERS};
use crate::Route;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let cycle = use_state(BillingCycle::default);
    let open_faq = use_state(|| None::<usize>);

    let toggle_cycle = {
        let cycle = cycle.clone();
        Callback::from(move |_: MouseEvent| cycle.set(cycle.toggled()))
    };

    html! {
        <div class="pricing-page">
            <section class="section page-header">
                <div class="container">
                    <span class="eyebrow">{"Pricing"}</span>
                    <h1>{"Simple plans, no surprises"}</h1>
                    <p class="section-lead">{"Pick a monthly plan or pay yearly and get two months free."}</p>
                    <div class="billing-toggle">
                        <span class={classes!((*cycle == BillingCycle::Monthly).then_some("active"))}>{"Monthly"}</span>
                        <button
                            class={classes!("switch", (*cycle == BillingCycle::Annual).then_some("on"))}
                            aria-label="Toggle annual billing"
                            onclick={toggle_cycle}
                        >
                            <span class="knob"></span>
                        </button>
                        <span class={classes!((*cycle == BillingCycle::Annual).then_some("active"))}>{"Annual"}</span>
                    </div>
                </div>
            </section>

            <section class="section">
                <RevealGroup class="container grid-3">
                    {
                        for TIERS.iter().map(|tier| html! {
                            <div class={classes!("card", "tier", tier.highlighted.then_some("highlighted"))}>
                                if tier.highlighted {
                                    <span class="tier-badge">{"Most popular"}</span>
                                }
                                <h2>{ tier.name }</h2>
                                <p class="tier-tagline">{ tier.tagline }</p>
                                <div class="tier-price">
                                    <strong>{ tier.price_label(*cycle) }</strong>
                                    if tier.price(*cycle).is_some() {
                                        <span>{ cycle.period_label() }</span>
                                    }
                                </div>
                                <ul>
                                    { for tier.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                                </ul>
                                <Link<Route>
                                    to={Route::Contact}
                                    classes={if tier.highlighted { "button-primary" } else { "button-secondary" }}
                                >
                                    { tier.cta }
                                </Link<Route>>
                            </div>
                        })
                    }
                </RevealGroup>
            </section>

            <section class="section">
                <div class="container faq">
                    <Reveal>
                        <h2 class="section-title">{"Questions"}</h2>
                    </Reveal>
                    {
                        for FAQ.iter().enumerate().map(|(i, item)| {
                            let is_open = *open_faq == Some(i);
                            let onclick = {
                                let open_faq = open_faq.clone();
                                Callback::from(move |_: MouseEvent| {
                                    open_faq.set(if is_open { None } else { Some(i) });
                                })
                            };
                            html! {
                                <div class={classes!("faq-item", is_open.then_some("open"))}>
                                    <button class="faq-question" aria-expanded={is_open.to_string()} {onclick}>
                                        { item.question }
                                        <span>{ if is_open { "−" } else { "+" } }</span>
                                    </button>
                                    if is_open {
                                        <p class="faq-answer">{ item.answer }</p>
                                    }
                                </div>
                            }
                        })
                    }
                </div>
            </section>

            <style>
                {r#"
.page-header { padding-top: 160px; text-align: center; }
.page-header h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); margin: 12px 0 20px; }
.page-header .section-lead { margin: 0 auto 32px; }
.billing-toggle { display: inline-flex; align-items: center; gap: 12px; color: var(--muted); }
.billing-toggle .active { color: var(--text); }
.switch { width: 52px; height: 28px; border-radius: 999px; border: 1px solid var(--border); background: var(--bg-raised); position: relative; cursor: pointer; }
.switch .knob { position: absolute; top: 3px; left: 3px; width: 20px; height: 20px; border-radius: 50%; background: var(--accent); transition: left 0.2s ease; }
.switch.on .knob { left: 27px; }
.tier { display: flex; flex-direction: column; height: 100%; position: relative; }
.tier.highlighted { border-color: var(--accent); }
.tier-badge { position: absolute; top: -12px; right: 24px; background: var(--accent); color: #04131d; border-radius: 999px; padding: 2px 12px; font-size: 0.8rem; font-weight: 700; }
.tier-tagline { color: var(--muted); }
.tier-price strong { font-size: 2.4rem; }
.tier-price span { color: var(--muted); margin-left: 4px; }
.tier ul { flex: 1; padding-left: 18px; color: var(--muted); }
.faq { max-width: 760px; }
.faq-item { border-bottom: 1px solid var(--border); }
.faq-question { width: 100%; display: flex; justify-content: space-between; background: none; border: none; color: var(--text); font-size: 1.05rem; padding: 20px 0; cursor: pointer; text-align: left; }
.faq-answer { color: var(--muted); margin: 0 0 20px; }
                "#}
            </style>
        </div>
    }
}
