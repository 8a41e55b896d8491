use yew::prelude::*;

use crate::config::SiteConfig;

const SECTIONS: [(&str, &str); 5] = [
    (
        "What we collect",
        "This site does not set tracking cookies or run third-party analytics. Forms on this site are demonstrations: what you type stays in your browser and is never sent to a server.",
    ),
    (
        "Email",
        "If you write to us directly, we keep your message for as long as we are talking about a project and delete it within twelve months after that conversation ends.",
    ),
    (
        "Browser storage",
        "When you open a deep link, the requested address is kept in session storage for a moment so we can take you to the right page. It is removed as soon as the page loads.",
    ),
    (
        "Your rights",
        "You can ask us what we hold about you, ask us to correct it, or ask us to delete it. We answer within 30 days.",
    ),
    (
        "Changes",
        "We will update this page if anything here changes. The date below shows the latest revision.",
    ),
];

#[function_component(Privacy)]
pub fn privacy() -> Html {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    html! {
        <div class="legal-page">
            <div class="container narrow">
                <span class="eyebrow">{"Legal"}</span>
                <h1>{"Privacy policy"}</h1>
                {
                    for SECTIONS.iter().map(|(title, body)| html! {
                        <section>
                            <h2>{ *title }</h2>
                            <p>{ *body }</p>
                        </section>
                    })
                }
                <section>
                    <h2>{"Contact"}</h2>
                    <p>
                        { format!("Questions about privacy go to {} at ", site.company) }
                        <a href={format!("mailto:{}", site.contact_email)}>{ site.contact_email }</a>
                        {"."}
                    </p>
                </section>
                <p class="legal-updated">{"Last updated: September 1, 2026"}</p>
            </div>
            <style>
                {r#"
.legal-page { padding: 160px 0 64px; }
.legal-page .narrow { max-width: 760px; }
.legal-page h1 { font-size: clamp(2rem, 4.5vw, 3rem); margin: 12px 0 32px; }
.legal-page section { border-top: 1px solid var(--border); padding: 24px 0; }
.legal-page h2 { font-size: 1.2rem; margin: 0 0 8px; }
.legal-page p { color: var(--muted); margin: 0; }
.legal-updated { margin-top: 32px !important; font-size: 0.85rem; }
                "#}
            </style>
        </div>
    }
}
