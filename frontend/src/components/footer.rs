use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SiteConfig;
use crate::forms::{simulate_submission, NewsletterForm, SubmissionStatus};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let form = use_state(NewsletterForm::default);
    let status = use_state(|| SubmissionStatus::Idle);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(NewsletterForm { email: input.value() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let delay_ms = site.newsletter_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }
            let payload = NewsletterForm {
                email: form.email.trim().to_string(),
            };
            if let Err(errors) = payload.validate() {
                debug!("newsletter form rejected: {} problem(s)", errors.len());
                status.set(SubmissionStatus::Invalid(errors));
                return;
            }
            status.set(SubmissionStatus::Submitting);
            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                simulate_submission("newsletter", &payload, delay_ms).await;
                form.set(NewsletterForm::default());
                status.set(SubmissionStatus::Succeeded);
            });
        })
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="nav-logo">{ site.company }</Link<Route>>
                    <p>{"Design and engineering for teams that ship."}</p>
                    <a href={format!("mailto:{}", site.contact_email)}>{ site.contact_email }</a>
                </div>
                <div class="footer-links">
                    <h4>{"Studio"}</h4>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Process}>{"Process"}</Link<Route>>
                    <Link<Route> to={Route::Careers}>{"Careers"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-links">
                    <h4>{"Work"}</h4>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::CaseStudies}>{"Case studies"}</Link<Route>>
                    <Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>>
                    <Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>>
                </div>
                <form class="footer-newsletter" onsubmit={on_submit} novalidate=true>
                    <h4>{"Field notes, monthly"}</h4>
                    <div class="newsletter-row">
                        <input
                            type="email"
                            placeholder="you@company.com"
                            value={form.email.clone()}
                            oninput={on_email}
                            disabled={status.is_submitting()}
                        />
                        <button type="submit" class="button-primary" disabled={status.is_submitting()}>
                            { if status.is_submitting() { "Joining..." } else { "Join" } }
                        </button>
                    </div>
                    {
                        match &*status {
                            SubmissionStatus::Succeeded => html! {
                                <p class="form-success">{"Thanks, you're on the list."}</p>
                            },
                            SubmissionStatus::Invalid(errors) => html! {
                                <>
                                    { for errors.iter().map(|error| html! {
                                        <p class="form-error">{ error.to_string() }</p>
                                    }) }
                                </>
                            },
                            _ => html! {},
                        }
                    }
                </form>
            </div>
            <div class="footer-legal">
                <span>{ format!("© 2026 {}", site.company) }</span>
                <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
            </div>
        </footer>
    }
}
