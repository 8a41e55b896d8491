use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::count_up::CountUp;
use crate::components::hero_canvas::HeroCanvas;
use crate::components::hero_intro::HeroIntro;
use crate::components::parallax::Parallax;
use crate::components::reveal::{Reveal, RevealGroup};
use crate::content::company::{STATS, TESTIMONIALS};
use crate::content::services::SERVICES;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="hero">
                <HeroCanvas />
                <HeroIntro
                    eyebrow="Digital product studio"
                    title="We build sites and software that move people."
                    lead="Strategy, design and engineering under one roof. From a first sketch to a product your customers come back to."
                >
                    <Link<Route> to={Route::Contact} classes="button-primary">{"Start a project"}</Link<Route>>
                    <Link<Route> to={Route::CaseStudies} classes="button-secondary">{"See our work"}</Link<Route>>
                </HeroIntro>
            </section>

            <section class="section">
                <div class="container">
                    <Reveal>
                        <span class="eyebrow">{"What we do"}</span>
                        <h2 class="section-title">{"Four disciplines, one team"}</h2>
                    </Reveal>
                    <RevealGroup class="grid-4">
                        {
                            for SERVICES.iter().map(|service| html! {
                                <Link<Route> to={Route::Service { id: service.id.to_string() }} classes="card service-card">
                                    <span class="service-icon">{ service.icon }</span>
                                    <h3>{ service.name }</h3>
                                    <p>{ service.summary }</p>
                                </Link<Route>>
                            })
                        }
                    </RevealGroup>
                </div>
            </section>

            <section class="section stats-band">
                <div class="container grid-4">
                    {
                        for STATS.iter().map(|stat| html! {
                            <CountUp target={stat.value} suffix={stat.suffix} label={stat.label} />
                        })
                    }
                </div>
            </section>

            <Parallax class="quote-band" travel_px={160.0}>
                <div class="container">
                    <p class="band-quote">{"Good work is quiet. It just feels right."}</p>
                </div>
            </Parallax>

            <section class="section">
                <div class="container">
                    <Reveal>
                        <span class="eyebrow">{"Kind words"}</span>
                        <h2 class="section-title">{"From the people we build with"}</h2>
                    </Reveal>
                    <RevealGroup class="grid-3">
                        {
                            for TESTIMONIALS.iter().map(|testimonial| html! {
                                <figure class="card testimonial">
                                    <blockquote>{ testimonial.quote }</blockquote>
                                    <figcaption>
                                        <strong>{ testimonial.author }</strong>
                                        <span>{ testimonial.company }</span>
                                    </figcaption>
                                </figure>
                            })
                        }
                    </RevealGroup>
                </div>
            </section>

            <section class="section">
                <Reveal class="container cta">
                    <h2 class="section-title">{"Have something in mind?"}</h2>
                    <p class="section-lead">{"Tell us where you are and where you want to be. We'll reply within two working days."}</p>
                    <Link<Route> to={Route::Contact} classes="button-primary">{"Get in touch"}</Link<Route>>
                </Reveal>
            </section>

            <style>
                {r#"
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    overflow: hidden;
}
.hero-canvas {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    opacity: 0.8;
}
.hero-content { position: relative; z-index: 1; }
.hero h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); line-height: 1.05; margin: 16px 0 24px; max-width: 820px; }
.hero-actions { display: flex; gap: 16px; flex-wrap: wrap; }
.service-card { display: block; color: var(--text); height: 100%; transition: border-color 0.2s ease; }
.service-card:hover { border-color: var(--accent); color: var(--text); }
.service-card p { color: var(--muted); }
.service-icon { font-size: 2rem; }
.stats-band { background: var(--bg-raised); border-top: 1px solid var(--border); border-bottom: 1px solid var(--border); }
.quote-band { padding: 160px 0; background: radial-gradient(circle at 30% 50%, rgba(56, 189, 248, 0.12), transparent 60%); }
.band-quote { font-size: clamp(1.8rem, 4vw, 3rem); font-weight: 700; text-align: center; margin: 0; }
.testimonial { margin: 0; height: 100%; }
.testimonial blockquote { margin: 0 0 20px; font-size: 1.05rem; }
.testimonial figcaption { display: flex; flex-direction: column; color: var(--muted); }
.cta { text-align: center; }
.cta .section-lead { margin-left: auto; margin-right: auto; }
                "#}
            </style>
        </div>
    }
}
