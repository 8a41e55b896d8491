use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::category_tabs::CategoryTabs;
use crate::components::reveal::{Reveal, RevealGroup};
use crate::config::SiteConfig;
use crate::content::careers::{OPENINGS, PERKS};
use crate::content::filter::{categories, filter_by_category, ALL};
use crate::Route;

#[function_component(Careers)]
pub fn careers() -> Html {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let selected = use_state(|| ALL);
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |tab: &'static str| selected.set(tab))
    };
    let openings = filter_by_category(&OPENINGS, *selected);

    html! {
        <div class="careers-page">
            <section class="section page-header">
                <div class="container">
                    <span class="eyebrow">{"Careers"}</span>
                    <h1>{"Do the best work of your career"}</h1>
                    <p class="section-lead">
                        {"Small teams, real ownership and clients who want to be challenged. We hire slowly and keep people for a long time."}
                    </p>
                </div>
            </section>

            <section class="section">
                <RevealGroup class="container grid-4">
                    {
                        for PERKS.iter().map(|(title, body)| html! {
                            <div class="card perk">
                                <h3>{ *title }</h3>
                                <p>{ *body }</p>
                            </div>
                        })
                    }
                </RevealGroup>
            </section>

            <section class="section">
                <div class="container">
                    <Reveal>
                        <h2 class="section-title">{"Open roles"}</h2>
                    </Reveal>
                    <CategoryTabs tabs={categories(&OPENINGS)} selected={*selected} {on_select} />
                    if openings.is_empty() {
                        <p class="empty-state">{"No open roles in this team right now."}</p>
                    } else {
                        <RevealGroup key={*selected} class="openings">
                            {
                                for openings.into_iter().map(|opening| html! {
                                    <a
                                        class="card opening"
                                        href={format!("mailto:{}?subject={}", site.contact_email, urlencoding::encode(opening.title))}
                                        id={opening.id}
                                    >
                                        <div>
                                            <h3>{ opening.title }</h3>
                                            <p>{ opening.summary }</p>
                                        </div>
                                        <div class="opening-meta">
                                            <span>{ opening.department }</span>
                                            <span>{ opening.location }</span>
                                            <span>{ opening.kind }</span>
                                        </div>
                                    </a>
                                })
                            }
                        </RevealGroup>
                    }
                    <Reveal class="careers-open-application">
                        <p>{"Don't see your role? We read every open application."}</p>
                        <Link<Route> to={Route::Contact} classes="button-secondary">{"Introduce yourself"}</Link<Route>>
                    </Reveal>
                </div>
            </section>

            <style>
                {r#"
.page-header { padding-top: 160px; }
.page-header h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); margin: 12px 0 20px; }
.perk { height: 100%; }
.perk p { color: var(--muted); }
.openings { display: flex; flex-direction: column; gap: 16px; }
.opening { display: flex; justify-content: space-between; gap: 24px; color: var(--text); }
.opening:hover { color: var(--text); border-color: var(--accent); }
.opening h3 { margin: 0 0 6px; }
.opening p { margin: 0; color: var(--muted); }
.opening-meta { display: flex; flex-direction: column; align-items: flex-end; color: var(--muted); font-size: 0.9rem; white-space: nowrap; }
.careers-open-application { margin-top: 48px; text-align: center; }
                "#}
            </style>
        </div>
    }
}
