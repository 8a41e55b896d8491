use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::count_up::CountUp;
use crate::components::reveal::{Reveal, RevealGroup};
use crate::content::company::{STATS, TEAM, VALUES};
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="section page-header">
                <div class="container">
                    <span class="eyebrow">{"About"}</span>
                    <h1>{"A small studio with a long memory"}</h1>
                    <p class="section-lead">
                        {"We started in 2016 building sites for friends. Today we are a senior team of designers, engineers and strategists who still answer our own email."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="container grid-4">
                    {
                        for STATS.iter().map(|stat| html! {
                            <CountUp target={stat.value} suffix={stat.suffix} label={stat.label} />
                        })
                    }
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <Reveal>
                        <h2 class="section-title">{"What we hold to"}</h2>
                    </Reveal>
                    <RevealGroup class="grid-3">
                        {
                            for VALUES.iter().map(|(title, body)| html! {
                                <div class="card">
                                    <h3>{ *title }</h3>
                                    <p>{ *body }</p>
                                </div>
                            })
                        }
                    </RevealGroup>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <Reveal>
                        <h2 class="section-title">{"The people"}</h2>
                    </Reveal>
                    <RevealGroup class="grid-4">
                        {
                            for TEAM.iter().map(|member| html! {
                                <div class="team-member">
                                    <img src={member.photo} alt={member.name} loading="lazy" />
                                    <h3>{ member.name }</h3>
                                    <p>{ member.role }</p>
                                </div>
                            })
                        }
                    </RevealGroup>
                    <Reveal class="about-cta" delay_ms={150.0}>
                        <p>{"Want to work with us, or for us?"}</p>
                        <Link<Route> to={Route::Careers} classes="button-secondary">{"Open roles"}</Link<Route>>
                    </Reveal>
                </div>
            </section>

            <style>
                {r#"
.page-header { padding-top: 160px; }
.page-header h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); margin: 12px 0 20px; }
.team-member img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: var(--radius); background: var(--bg-raised); }
.team-member h3 { margin: 16px 0 4px; }
.team-member p { color: var(--muted); margin: 0; }
.about-cta { margin-top: 64px; text-align: center; }
                "#}
            </style>
        </div>
    }
}
