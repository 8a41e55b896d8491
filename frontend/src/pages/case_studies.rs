use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::category_tabs::CategoryTabs;
use crate::components::reveal::{Reveal, RevealGroup};
use crate::content::case_studies::CASE_STUDIES;
use crate::content::filter::{categories, filter_by_category, ALL};
use crate::content::services;
use crate::Route;

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    let selected = use_state(|| ALL);
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |tab: &'static str| selected.set(tab))
    };
    let studies = filter_by_category(&CASE_STUDIES, *selected);

    html! {
        <div class="cases-page">
            <section class="section page-header">
                <div class="container">
                    <span class="eyebrow">{"Case studies"}</span>
                    <h1>{"Work we're proud of"}</h1>
                    <p class="section-lead">{"Real projects, real numbers. Filter by industry to find something close to yours."}</p>
                </div>
            </section>
            <section class="section">
                <div class="container">
                    <CategoryTabs tabs={categories(&CASE_STUDIES)} selected={*selected} {on_select} />
                    if studies.is_empty() {
                        <p class="empty-state">{"Nothing here yet."}</p>
                    } else {
                        <RevealGroup key={*selected} class="grid-2">
                            {
                                for studies.into_iter().map(|study| html! {
                                    <div class="card case-card">
                                        <img src={study.image} alt="" loading="lazy" />
                                        <span class="eyebrow">{ format!("{} · {}", study.client, study.industry) }</span>
                                        <h3>{ study.title }</h3>
                                        <p>{ study.summary }</p>
                                        <div class="case-results">
                                            {
                                                for study.results.iter().map(|(value, label)| html! {
                                                    <div><strong>{ *value }</strong><span>{ *label }</span></div>
                                                })
                                            }
                                        </div>
                                        <div class="case-services">
                                            {
                                                for study.services.iter().filter_map(|id| services::find(id)).map(|service| html! {
                                                    <Link<Route> to={Route::Service { id: service.id.to_string() }} classes="chip">
                                                        { service.name }
                                                    </Link<Route>>
                                                })
                                            }
                                        </div>
                                    </div>
                                })
                            }
                        </RevealGroup>
                    }
                </div>
            </section>
            <section class="section">
                <Reveal class="container cta">
                    <h2 class="section-title">{"Your project could be next"}</h2>
                    <Link<Route> to={Route::Contact} classes="button-primary">{"Start a conversation"}</Link<Route>>
                </Reveal>
            </section>
            <style>
                {r#"
.page-header { padding-top: 160px; }
.page-header h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); margin: 12px 0 20px; }
.case-card { height: 100%; display: flex; flex-direction: column; gap: 10px; }
.case-card img { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; border-radius: 10px; background: var(--bg); }
.case-card h3 { margin: 0; }
.case-card p { color: var(--muted); margin: 0; }
.case-results { display: flex; gap: 32px; margin: 8px 0; }
.case-results strong { display: block; font-size: 1.8rem; color: var(--accent); }
.case-results span { color: var(--muted); font-size: 0.9rem; }
.case-services { display: flex; gap: 8px; flex-wrap: wrap; margin-top: auto; }
.chip { border: 1px solid var(--border); border-radius: 999px; padding: 4px 14px; color: var(--muted); font-size: 0.85rem; }
.cta { text-align: center; }
                "#}
            </style>
        </div>
    }
}
