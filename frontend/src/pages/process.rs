use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::parallax::Parallax;
use crate::components::reveal::Reveal;
use crate::content::company::PROCESS;
use crate::Route;

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <div class="process-page">
            <section class="section page-header">
                <div class="container">
                    <span class="eyebrow">{"Process"}</span>
                    <h1>{"How a project runs"}</h1>
                    <p class="section-lead">
                        {"Five stages, each with a clear output. You can stop after any of them and still walk away with something useful."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="container timeline">
                    {
                        for PROCESS.iter().map(|step| html! {
                            <Reveal class="timeline-step">
                                <span class="step-number">{ step.number }</span>
                                <div>
                                    <h2>{ step.title }<small>{ step.duration }</small></h2>
                                    <p>{ step.description }</p>
                                    <div class="chips">
                                        { for step.outputs.iter().map(|output| html! { <span class="chip">{ *output }</span> }) }
                                    </div>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <Parallax class="process-band">
                <div class="container">
                    <p class="band-quote">{"Weekly demos. No surprises."}</p>
                </div>
            </Parallax>

            <section class="section">
                <Reveal class="container cta">
                    <h2 class="section-title">{"Ready for step one?"}</h2>
                    <Link<Route> to={Route::Contact} classes="button-primary">{"Book a discovery call"}</Link<Route>>
                </Reveal>
            </section>

            <style>
                {r#"
.page-header { padding-top: 160px; }
.page-header h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); margin: 12px 0 20px; }
.timeline { display: flex; flex-direction: column; gap: 40px; border-left: 1px solid var(--border); padding-left: 32px; }
.timeline-step { display: flex; gap: 24px; }
.step-number { font-size: 2.4rem; font-weight: 800; color: var(--accent); min-width: 64px; }
.timeline-step h2 { margin: 0 0 8px; display: flex; gap: 12px; align-items: baseline; }
.timeline-step small { color: var(--muted); font-weight: 400; font-size: 0.9rem; }
.timeline-step p { color: var(--muted); }
.chips { display: flex; flex-wrap: wrap; gap: 8px; }
.chip { border: 1px solid var(--border); border-radius: 999px; padding: 4px 14px; color: var(--muted); }
.process-band { padding: 140px 0; }
.band-quote { font-size: clamp(1.8rem, 4vw, 3rem); font-weight: 700; text-align: center; margin: 0; }
.cta { text-align: center; }
                "#}
            </style>
        </div>
    }
}
