use yew::prelude::*;

#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
    html! {
        <style>
            {r#"
:root {
    --bg: #07090f;
    --bg-raised: #0f1320;
    --border: rgba(148, 163, 184, 0.16);
    --text: #e2e8f0;
    --muted: #94a3b8;
    --accent: #7dd3fc;
    --accent-strong: #38bdf8;
    --danger: #f87171;
    --success: #4ade80;
    --radius: 14px;
}

* { box-sizing: border-box; }

html, body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    line-height: 1.6;
}

a { color: var(--accent); text-decoration: none; }
a:hover { color: var(--accent-strong); }

main { min-height: 70vh; }

.container {
    max-width: 1120px;
    margin: 0 auto;
    padding: 0 24px;
}

.section { padding: 96px 0; }
.section-title { font-size: 2.2rem; margin: 0 0 12px; }
.section-lead { color: var(--muted); max-width: 640px; margin: 0 0 48px; }

.eyebrow {
    display: inline-block;
    text-transform: uppercase;
    letter-spacing: 0.18em;
    font-size: 0.75rem;
    color: var(--accent);
}

.card {
    background: var(--bg-raised);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 28px;
}

.grid-2, .grid-3, .grid-4 { display: grid; gap: 24px; }
.grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
.grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.grid-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }

.button-primary, .button-secondary {
    display: inline-block;
    border-radius: 999px;
    padding: 12px 26px;
    font-weight: 600;
    border: 1px solid transparent;
    cursor: pointer;
    font-size: 1rem;
}
.button-primary { background: var(--accent); color: #04131d; }
.button-primary:hover { background: var(--accent-strong); color: #04131d; }
.button-primary:disabled { opacity: 0.6; cursor: progress; }
.button-secondary { background: transparent; color: var(--text); border-color: var(--border); }

.tabs { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 32px; }
.tab {
    background: transparent;
    color: var(--muted);
    border: 1px solid var(--border);
    border-radius: 999px;
    padding: 6px 16px;
    cursor: pointer;
}
.tab.active { color: #04131d; background: var(--accent); border-color: var(--accent); }

.empty-state { color: var(--muted); text-align: center; padding: 48px 0; }

.form-error { color: var(--danger); margin: 6px 0 0; font-size: 0.9rem; }
.form-success { color: var(--success); margin: 6px 0 0; }

input, select, textarea {
    width: 100%;
    background: var(--bg);
    color: var(--text);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 12px 14px;
    font: inherit;
}
input:focus, select:focus, textarea:focus { outline: 2px solid var(--accent); }

.scroll-progress {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 3px;
    z-index: 1001;
    pointer-events: none;
}
.scroll-progress-bar {
    height: 100%;
    background: linear-gradient(90deg, var(--accent), var(--accent-strong));
    transform-origin: 0 50%;
}

.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 1000;
    padding: 18px 0;
    transition: background 0.3s ease, padding 0.3s ease;
}
.top-nav.scrolled {
    background: rgba(7, 9, 15, 0.85);
    backdrop-filter: blur(12px);
    padding: 10px 0;
    border-bottom: 1px solid var(--border);
}
.nav-content {
    max-width: 1120px;
    margin: 0 auto;
    padding: 0 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo { font-weight: 800; font-size: 1.3rem; color: var(--text); }
.nav-right { display: flex; gap: 24px; align-items: center; }
.nav-link { color: var(--muted); }
.nav-link:hover { color: var(--text); }
.burger-menu { display: none; background: none; border: none; cursor: pointer; }
.burger-menu span { display: block; width: 22px; height: 2px; margin: 5px 0; background: var(--text); }

.page-transition { will-change: opacity, transform; }

.reveal-item { height: 100%; }

.parallax { overflow: hidden; }

.count-up { text-align: center; }
.count-up-value { display: block; font-size: 3rem; font-weight: 800; color: var(--accent); }
.count-up-label { color: var(--muted); }

.site-footer { border-top: 1px solid var(--border); padding: 64px 24px 32px; margin-top: 64px; }
.footer-grid {
    max-width: 1120px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1.5fr 1fr 1fr 2fr;
    gap: 32px;
}
.footer-brand p { color: var(--muted); }
.footer-links { display: flex; flex-direction: column; gap: 8px; }
.footer-links a { color: var(--muted); }
.footer-links h4, .footer-newsletter h4 { margin: 0 0 8px; }
.newsletter-row { display: flex; gap: 8px; }
.newsletter-row input { flex: 1; }
.footer-legal {
    max-width: 1120px;
    margin: 48px auto 0;
    display: flex;
    justify-content: space-between;
    color: var(--muted);
    font-size: 0.85rem;
}

@media (max-width: 860px) {
    .grid-2, .grid-3, .grid-4, .footer-grid { grid-template-columns: 1fr; }
    .burger-menu { display: block; }
    .nav-right {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        background: var(--bg-raised);
        padding: 24px;
    }
    .nav-right.mobile-menu-open { display: flex; }
    .section { padding: 64px 0; }
}

@media (prefers-reduced-motion: reduce) {
    .top-nav { transition: none; }
}
"#}
        </style>
    }
}
