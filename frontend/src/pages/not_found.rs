use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="section not-found">
            <div class="container">
                <span class="eyebrow">{"404"}</span>
                <h1>{"This page wandered off"}</h1>
                <p class="section-lead">{"The link may be old, or the page may have moved."}</p>
                <Link<Route> to={Route::Home} classes="button-primary">{"Back to home"}</Link<Route>>
            </div>
            <style>
                {r#"
.not-found { padding-top: 180px; text-align: center; min-height: 70vh; }
.not-found h1 { font-size: clamp(2rem, 5vw, 3.2rem); margin: 12px 0 16px; }
.not-found .section-lead { margin-left: auto; margin-right: auto; }
                "#}
            </style>
        </section>
    }
}
