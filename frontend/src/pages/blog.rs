use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::category_tabs::CategoryTabs;
use crate::components::reveal::{Reveal, RevealGroup};
use crate::content::blog::{self, BlogPost, POSTS};
use crate::content::filter::{categories, ALL};
use crate::pages::not_found::NotFound;
use crate::Route;

fn post_card(post: &'static BlogPost) -> Html {
    html! {
        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }} classes="card post-card">
            <img src={post.image} alt="" loading="lazy" />
            <span class="eyebrow">{ post.category }</span>
            <h3>{ post.title }</h3>
            <p>{ post.excerpt }</p>
            <span class="post-meta">
                { format!("{} · {} · {} min read", post.author, post.display_date(), post.read_minutes) }
            </span>
        </Link<Route>>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let selected = use_state(|| ALL);
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |tab: &'static str| selected.set(tab))
    };
    let posts = blog::in_category(*selected);

    html! {
        <div class="blog-page">
            <section class="section page-header">
                <div class="container">
                    <span class="eyebrow">{"Blog"}</span>
                    <h1>{"Notes from the studio"}</h1>
                    <p class="section-lead">{"What we learn shipping sites, products and AI features for our clients."}</p>
                </div>
            </section>
            <section class="section">
                <div class="container">
                    <CategoryTabs tabs={categories(&POSTS)} selected={*selected} {on_select} />
                    if posts.is_empty() {
                        <p class="empty-state">{"No posts in this category yet."}</p>
                    } else {
                        <RevealGroup key={*selected} class="grid-3">
                            { for posts.into_iter().map(post_card) }
                        </RevealGroup>
                    }
                </div>
            </section>
            <style>
                {r#"
.page-header { padding-top: 160px; }
.page-header h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); margin: 12px 0 20px; }
.post-card { display: flex; flex-direction: column; gap: 8px; height: 100%; color: var(--text); padding: 0 0 24px; overflow: hidden; }
.post-card:hover { color: var(--text); border-color: var(--accent); }
.post-card img { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; background: var(--bg); }
.post-card > *:not(img) { margin: 0 24px; }
.post-card p { color: var(--muted); flex: 1; }
.post-meta { color: var(--muted); font-size: 0.85rem; }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    let Some(post) = blog::find(&props.slug) else {
        info!("Unknown blog post {}", props.slug);
        return html! { <NotFound /> };
    };
    let related = blog::related(post, 3);

    html! {
        <article class="blog-post">
            <header class="section page-header">
                <div class="container narrow">
                    <Link<Route> to={Route::Blog} classes="back-link">{"← All posts"}</Link<Route>>
                    <span class="eyebrow">{ post.category }</span>
                    <h1>{ post.title }</h1>
                    <p class="post-meta">
                        { format!("{} · {} · {} min read", post.author, post.display_date(), post.read_minutes) }
                    </p>
                </div>
            </header>
            <div class="container narrow">
                <div class="post-body" key={post.slug}>
                    <img class="post-hero" src={post.image} alt="" />
                    { for post.body.iter().map(|paragraph| html! { <Reveal><p>{ *paragraph }</p></Reveal> }) }
                </div>
            </div>
            if !related.is_empty() {
                <section class="section">
                    <div class="container">
                        <h2 class="section-title">{"Keep reading"}</h2>
                        <div class="related-posts">
                            <RevealGroup key={post.slug} class="grid-3">
                                { for related.into_iter().map(post_card) }
                            </RevealGroup>
                        </div>
                    </div>
                </section>
            }
            <style>
                {r#"
.page-header { padding-top: 160px; }
.narrow { max-width: 760px; }
.blog-post h1 { font-size: clamp(2rem, 4.5vw, 3.2rem); margin: 12px 0; }
.back-link { display: block; color: var(--muted); margin-bottom: 24px; }
.post-meta { color: var(--muted); font-size: 0.9rem; }
.post-hero { width: 100%; border-radius: var(--radius); margin-bottom: 32px; background: var(--bg-raised); }
.blog-post p { font-size: 1.1rem; }
.post-card { display: flex; flex-direction: column; gap: 8px; height: 100%; color: var(--text); padding: 0 0 24px; overflow: hidden; }
.post-card img { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; }
.post-card > *:not(img) { margin: 0 24px; }
.post-card p { color: var(--muted); font-size: 1rem; flex: 1; }
                "#}
            </style>
        </article>
    }
}
