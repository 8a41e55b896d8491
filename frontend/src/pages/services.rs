use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{Reveal, RevealGroup};
use crate::content::services::{self, SERVICES};
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(Services)]
pub fn services_page() -> Html {
    html! {
        <div class="services-page">
            <section class="section page-header">
                <div class="container">
                    <span class="eyebrow">{"Services"}</span>
                    <h1>{"Everything it takes to ship"}</h1>
                    <p class="section-lead">
                        {"Hire us for one discipline or the whole journey. Every engagement is staffed by the people you meet in the first call."}
                    </p>
                </div>
            </section>
            <section class="section">
                <RevealGroup class="container grid-2">
                    {
                        for SERVICES.iter().map(|service| html! {
                            <div class="card service-summary">
                                <span class="service-icon">{ service.icon }</span>
                                <h2>{ service.name }</h2>
                                <p>{ service.summary }</p>
                                <Link<Route> to={Route::Service { id: service.id.to_string() }}>
                                    {"Learn more →"}
                                </Link<Route>>
                            </div>
                        })
                    }
                </RevealGroup>
            </section>
            <style>
                {r#"
.page-header { padding-top: 160px; }
.page-header h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); margin: 12px 0 20px; }
.service-summary { height: 100%; }
.service-summary p { color: var(--muted); }
.service-icon { font-size: 2rem; color: var(--accent); }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub id: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let Some(service) = services::find(&props.id) else {
        info!("Unknown service id {}", props.id);
        return html! { <NotFound /> };
    };

    html! {
        <div class="service-detail">
            <section class="section page-header">
                <div class="container">
                    <Link<Route> to={Route::Services} classes="back-link">{"← All services"}</Link<Route>>
                    <h1>{ service.icon }{" "}{ service.name }</h1>
                    <p class="section-lead">{ service.description }</p>
                </div>
            </section>
            <section class="section">
                <div class="container grid-2">
                    <Reveal class="card">
                        <h2>{"What you get"}</h2>
                        <ul>
                            { for service.deliverables.iter().map(|item| html! { <li>{ *item }</li> }) }
                        </ul>
                    </Reveal>
                    <Reveal class="card" delay_ms={120.0}>
                        <h2>{"Typical stack"}</h2>
                        <div class="chips">
                            { for service.stack.iter().map(|item| html! { <span class="chip">{ *item }</span> }) }
                        </div>
                    </Reveal>
                </div>
            </section>
            <section class="section">
                <Reveal class="container cta">
                    <h2 class="section-title">{ format!("Talk to us about {}", service.name.to_lowercase()) }</h2>
                    <Link<Route> to={Route::Contact} classes="button-primary">{"Start a project"}</Link<Route>>
                </Reveal>
            </section>
            <style>
                {r#"
.page-header { padding-top: 160px; }
.page-header h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); margin: 12px 0 20px; }
.back-link { color: var(--muted); }
.chips { display: flex; flex-wrap: wrap; gap: 8px; }
.chip { border: 1px solid var(--border); border-radius: 999px; padding: 4px 14px; color: var(--muted); }
.cta { text-align: center; }
                "#}
            </style>
        </div>
    }
}
