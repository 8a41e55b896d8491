use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod forms;
mod redirect;
mod animation {
    pub mod decor;
    pub mod driver;
    pub mod easing;
    pub mod progress;
    pub mod runtime;
    pub mod scope;
    pub mod transition;
    pub mod trigger;
    pub mod tween;
}
mod content {
    pub mod blog;
    pub mod careers;
    pub mod case_studies;
    pub mod company;
    pub mod filter;
    pub mod pricing;
    pub mod services;
}
mod components {
    pub mod category_tabs;
    pub mod count_up;
    pub mod footer;
    pub mod hero_canvas;
    pub mod hero_intro;
    pub mod page_transition;
    pub mod parallax;
    pub mod reveal;
    pub mod scroll_progress;
    pub mod theme;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod careers;
    pub mod case_studies;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod pricing;
    pub mod privacy;
    pub mod process;
    pub mod services;
}

use components::{
    footer::Footer,
    page_transition::PageTransition,
    scroll_progress::ScrollProgressBar,
    theme::GlobalStyle,
};
use config::{AnimationConfig, SiteConfig};
use pages::{
    about::About,
    blog::{Blog, BlogPostPage},
    careers::Careers,
    case_studies::CaseStudies,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    pricing::Pricing,
    privacy::Privacy,
    process::Process,
    services::{ServiceDetail, Services},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/services/:id")]
    Service { id: String },
    #[at("/process")]
    Process,
    #[at("/pricing")]
    Pricing,
    #[at("/contact")]
    Contact,
    #[at("/case-studies")]
    CaseStudies,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/careers")]
    Careers,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Service { id } => {
            info!("Rendering Service page for {}", id);
            html! { <ServiceDetail {id} /> }
        },
        Route::Process => {
            info!("Rendering Process page");
            html! { <Process /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::CaseStudies => {
            info!("Rendering Case Studies page");
            html! { <CaseStudies /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering Blog post {}", slug);
            html! { <BlogPostPage {slug} /> }
        },
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <Privacy /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

const NAV_LINKS: [(Route, &str); 6] = [
    (Route::Services, "Services"),
    (Route::CaseStudies, "Work"),
    (Route::Process, "Process"),
    (Route::Pricing, "Pricing"),
    (Route::Blog, "Blog"),
    (Route::About, "About"),
];

const SCROLLED_AFTER_PX: f64 = 40.0;

#[function_component(Nav)]
pub fn nav() -> Html {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > SCROLLED_AFTER_PX;
    let current = use_route::<Route>();

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            current.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { site.company }
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" aria-expanded={(*menu_open).to_string()} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for NAV_LINKS.iter().map(|(route, label)| {
                            let active = current.as_ref() == Some(route);
                            html! {
                                <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                                    { *label }
                                </Link<Route>>
                            }
                        })
                    }
                    <Link<Route> to={Route::Contact} classes="button-primary">
                        {"Contact"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let animation = use_state(AnimationConfig::detect);
    let site = use_state(SiteConfig::default);

    html! {
        <ContextProvider<AnimationConfig> context={(*animation).clone()}>
            <ContextProvider<SiteConfig> context={(*site).clone()}>
                <BrowserRouter>
                    <GlobalStyle />
                    <ScrollProgressBar />
                    <Nav />
                    <main>
                        <PageTransition>
                            <Switch<Route> render={switch} />
                        </PageTransition>
                    </main>
                    <Footer />
                </BrowserRouter>
            </ContextProvider<SiteConfig>>
        </ContextProvider<AnimationConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    // A deep link bounced through 404.html must be restored before the router reads the URL
    redirect::restore();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_page() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(
            Route::recognize("/services/ai"),
            Some(Route::Service { id: "ai".to_string() })
        );
        assert_eq!(Route::recognize("/case-studies"), Some(Route::CaseStudies));
        assert_eq!(
            Route::recognize("/blog/core-web-vitals-in-practice"),
            Some(Route::BlogPost {
                slug: "core-web-vitals-in-practice".to_string()
            })
        );
        assert_eq!(Route::recognize("/privacy"), Some(Route::Privacy));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    #[test]
    fn nested_paths_build_from_routes() {
        assert_eq!(Route::Service { id: "web".to_string() }.to_path(), "/services/web");
        assert_eq!(Route::BlogPost { slug: "a".to_string() }.to_path(), "/blog/a");
    }
}
