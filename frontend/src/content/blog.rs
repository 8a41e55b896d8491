use chrono::NaiveDate;

use super::filter::{filter_by_category, Categorized};

#[derive(Debug, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub author: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub published: &'static str,
    pub read_minutes: u32,
    pub image: &'static str,
    pub body: &'static [&'static str],
}

impl BlogPost {
    pub fn published_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").ok()
    }

    pub fn display_date(&self) -> String {
        self.published_date()
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| self.published.to_string())
    }
}

impl Categorized for BlogPost {
    fn category(&self) -> &str {
        self.category
    }
}

pub static POSTS: [BlogPost; 6] = [
    BlogPost {
        slug: "shipping-ai-features-responsibly",
        title: "Shipping AI Features Without Shipping Surprises",
        excerpt: "A practical checklist we use before any model-backed feature reaches real users.",
        category: "AI",
        author: "Maya Chen",
        published: "2025-05-12",
        read_minutes: 7,
        image: "/assets/blog/ai-checklist.webp",
        body: &[
            "Every AI feature we have shipped started as a demo that worked perfectly on the happy path. The work that matters happens after that demo.",
            "We start by writing down what the feature must never do. Those constraints become evaluation cases long before anyone tunes a prompt.",
            "Next comes observability: every model call is traced with its inputs, outputs and latency so regressions are visible the day they appear.",
            "Finally we design the failure state first. If the model is slow or wrong, the interface should degrade to something a person can still use.",
        ],
    },
    BlogPost {
        slug: "core-web-vitals-in-practice",
        title: "Core Web Vitals in Practice",
        excerpt: "What actually moved LCP and CLS on three client sites, and what did not.",
        category: "Web",
        author: "Jonas Berg",
        published: "2025-04-02",
        read_minutes: 6,
        image: "/assets/blog/web-vitals.webp",
        body: &[
            "Performance budgets only work when they are measured on the devices your customers actually use.",
            "The biggest LCP win across all three projects was boring: serve the hero image at the right size, in a modern format, with a preload hint.",
            "Layout shift came almost entirely from late-loading fonts and embeds. Reserving space fixed nearly all of it.",
        ],
    },
    BlogPost {
        slug: "llm-search-for-support-teams",
        title: "Retrieval Search for Support Teams",
        excerpt: "How we cut average handling time by giving agents grounded answers with sources.",
        category: "AI",
        author: "Maya Chen",
        published: "2025-02-18",
        read_minutes: 9,
        image: "/assets/blog/support-search.webp",
        body: &[
            "Support agents do not want a chatbot. They want the right paragraph from the right document, quickly.",
            "We indexed help-center articles, internal runbooks and resolved tickets, then showed the top passages next to every draft reply.",
            "Because every suggestion links to its source, agents trust it, and wrong answers get corrected at the document instead of the prompt.",
        ],
    },
    BlogPost {
        slug: "design-systems-that-survive",
        title: "Design Systems That Survive the Second Year",
        excerpt: "Tokens, ownership and the small rituals that keep a component library alive.",
        category: "Design",
        author: "Priya Nair",
        published: "2025-01-21",
        read_minutes: 5,
        image: "/assets/blog/design-systems.webp",
        body: &[
            "Most design systems do not fail at launch. They fail quietly when nobody owns them anymore.",
            "We give every system a named owner, a changelog and a fortnightly review where product teams bring the components that hurt.",
            "Design tokens are the contract. Components may change, but the tokens keep brand decisions in one place.",
        ],
    },
    BlogPost {
        slug: "static-sites-are-back",
        title: "Static Sites Are Back, and They Never Left",
        excerpt: "Why we default to prerendered pages for marketing sites in 2025.",
        category: "Web",
        author: "Jonas Berg",
        published: "2024-11-08",
        read_minutes: 4,
        image: "/assets/blog/static-sites.webp",
        body: &[
            "A marketing site has one job: load instantly and say something clearly. Static hosting does the first part for free.",
            "With client-side routing layered on top, visitors still get app-like navigation between pages.",
        ],
    },
    BlogPost {
        slug: "running-discovery-workshops",
        title: "Running Discovery Workshops That Produce Decisions",
        excerpt: "Our two-day format for turning a vague brief into a scoped first release.",
        category: "Strategy",
        author: "Leo Martins",
        published: "2024-09-30",
        read_minutes: 8,
        image: "/assets/blog/discovery.webp",
        body: &[
            "A workshop that ends with a wall of sticky notes and no decisions is a very expensive meeting.",
            "Day one maps the problem: users, constraints and the metrics that would prove success.",
            "Day two is about cutting. We leave with a single release scope that everyone in the room has agreed to defend.",
        ],
    },
];

pub fn find(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

pub fn newest_first() -> Vec<&'static BlogPost> {
    let mut posts: Vec<&'static BlogPost> = POSTS.iter().collect();
    posts.sort_by(|a, b| b.published_date().cmp(&a.published_date()));
    posts
}

pub fn in_category(selected: &str) -> Vec<&'static BlogPost> {
    let mut posts = filter_by_category(&POSTS, selected);
    posts.sort_by(|a, b| b.published_date().cmp(&a.published_date()));
    posts
}

pub fn related(post: &BlogPost, limit: usize) -> Vec<&'static BlogPost> {
    let mut others: Vec<&'static BlogPost> = newest_first()
        .into_iter()
        .filter(|other| other.slug != post.slug)
        .collect();
    others.sort_by_key(|other| other.category != post.category);
    others.truncate(limit);
    others
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::filter::{categories, ALL};

    #[test]
    fn every_post_has_a_valid_date_and_unique_slug() {
        for (i, post) in POSTS.iter().enumerate() {
            assert!(post.published_date().is_some(), "{}", post.slug);
            assert!(POSTS[i + 1..].iter().all(|other| other.slug != post.slug));
        }
    }

    #[test]
    fn formats_dates() {
        let post = find("core-web-vitals-in-practice").unwrap();
        assert_eq!(post.display_date(), "April 2, 2025");
    }

    #[test]
    fn sorted_newest_first() {
        let dates: Vec<_> = newest_first().iter().map(|p| p.published_date()).collect();
        assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn category_tabs_cover_all_posts() {
        let tabs = categories(&POSTS);
        assert_eq!(tabs[0], ALL);
        let total: usize = tabs[1..]
            .iter()
            .map(|tab| filter_by_category(&POSTS, tab).len())
            .sum();
        assert_eq!(total, POSTS.len());
        assert_eq!(filter_by_category(&POSTS, "AI").len(), 2);
    }

    #[test]
    fn category_view_is_sorted_and_exact() {
        let ai = in_category("AI");
        assert_eq!(ai.len(), 2);
        assert!(ai[0].published_date() >= ai[1].published_date());
        assert_eq!(in_category(ALL).len(), POSTS.len());
        assert!(in_category("ai").is_empty());
    }

    #[test]
    fn related_prefers_same_category() {
        let post = find("shipping-ai-features-responsibly").unwrap();
        let related = related(post, 3);
        assert_eq!(related.len(), 3);
        assert_eq!(related[0].slug, "llm-search-for-support-teams");
        assert!(related.iter().all(|other| other.slug != post.slug));
    }

    #[test]
    fn unknown_slug() {
        assert!(find("does-not-exist").is_none());
    }
}
