use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::SiteConfig;
use crate::forms::{simulate_submission, ContactForm, SubmissionStatus, BUDGET_OPTIONS};

fn field_errors(status: &SubmissionStatus, field: &str) -> Html {
    html! {
        <>
            { for status.errors().iter().filter(|error| error.field() == field).map(|error| html! {
                <p class="form-error">{ error.to_string() }</p>
            }) }
        </>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let form = use_state(|| ContactForm {
        budget: BUDGET_OPTIONS[0].to_string(),
        ..ContactForm::default()
    });
    let status = use_state(|| SubmissionStatus::Idle);

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let set = update(|form, value| form.name = value);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|form, value| form.email = value);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_company = {
        let set = update(|form, value| form.company = value);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_budget = {
        let set = update(|form, value| form.budget = value);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let set = update(|form, value| form.message = value);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let delay_ms = site.submit_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }
            if let Err(errors) = form.validate() {
                debug!("contact form rejected: {} problem(s)", errors.len());
                status.set(SubmissionStatus::Invalid(errors));
                return;
            }
            status.set(SubmissionStatus::Submitting);
            let payload = form.trimmed();
            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                simulate_submission("contact", &payload, delay_ms).await;
                form.set(ContactForm {
                    budget: BUDGET_OPTIONS[0].to_string(),
                    ..ContactForm::default()
                });
                status.set(SubmissionStatus::Succeeded);
            });
        })
    };

    let submitting = status.is_submitting();

    html! {
        <div class="contact-page">
            <section class="section page-header">
                <div class="container">
                    <span class="eyebrow">{"Contact"}</span>
                    <h1>{"Let's talk about your project"}</h1>
                    <p class="section-lead">
                        {"A few lines is plenty. We reply within two working days, or write to "}
                        <a href={format!("mailto:{}", site.contact_email)}>{ site.contact_email }</a>
                        {"."}
                    </p>
                </div>
            </section>

            <section class="section">
                <Reveal class="container">
                    if matches!(*status, SubmissionStatus::Succeeded) {
                        <div class="card form-done">
                            <h2>{"Thanks, message received."}</h2>
                            <p>{ format!("Someone from {} will be in touch shortly.", site.company) }</p>
                        </div>
                    }
                    <form class="card contact-form" onsubmit={on_submit} novalidate=true>
                        <div class="form-row">
                            <label>
                                {"Name"}
                                <input type="text" value={form.name.clone()} oninput={on_name} disabled={submitting} />
                                { field_errors(&status, "name") }
                            </label>
                            <label>
                                {"Email"}
                                <input type="email" value={form.email.clone()} oninput={on_email} disabled={submitting} />
                                { field_errors(&status, "email") }
                            </label>
                        </div>
                        <div class="form-row">
                            <label>
                                {"Company (optional)"}
                                <input type="text" value={form.company.clone()} oninput={on_company} disabled={submitting} />
                            </label>
                            <label>
                                {"Budget"}
                                <select onchange={on_budget} disabled={submitting}>
                                    {
                                        for BUDGET_OPTIONS.iter().map(|option| html! {
                                            <option value={*option} selected={form.budget == *option}>{ *option }</option>
                                        })
                                    }
                                </select>
                            </label>
                        </div>
                        <label>
                            {"Project details"}
                            <textarea rows="6" value={form.message.clone()} oninput={on_message} disabled={submitting} />
                            { field_errors(&status, "message") }
                        </label>
                        <button type="submit" class="button-primary" disabled={submitting}>
                            { if submitting { "Sending..." } else { "Send message" } }
                        </button>
                    </form>
                </Reveal>
            </section>

            <style>
                {r#"
.page-header { padding-top: 160px; }
.page-header h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); margin: 12px 0 20px; }
.contact-form { display: flex; flex-direction: column; gap: 20px; max-width: 760px; }
.contact-form label { display: flex; flex-direction: column; gap: 6px; color: var(--muted); flex: 1; }
.form-row { display: flex; gap: 20px; }
.form-done { max-width: 760px; margin-bottom: 24px; border-color: var(--success); }
@media (max-width: 860px) { .form-row { flex-direction: column; } }
                "#}
            </style>
        </div>
    }
}
