use super::filter::Categorized;

#[derive(Debug, PartialEq)]
pub struct CaseStudy {
    pub client: &'static str,
    pub title: &'static str,
    pub industry: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub results: &'static [(&'static str, &'static str)],
    pub services: &'static [&'static str],
}

impl Categorized for CaseStudy {
    fn category(&self) -> &str {
        self.industry
    }
}

pub static CASE_STUDIES: [CaseStudy; 5] = [
    CaseStudy {
        client: "Northwind Health",
        title: "A patient portal people actually finish using",
        industry: "Healthcare",
        summary: "We rebuilt appointment booking as a three-step flow and moved reminders to SMS.",
        image: "/assets/cases/northwind.webp",
        results: &[("+38%", "completed bookings"), ("-52%", "support calls")],
        services: &["design", "web"],
    },
    CaseStudy {
        client: "Ledgerline",
        title: "Grounded answers for a 40-person support desk",
        industry: "Fintech",
        summary: "Retrieval search over runbooks and tickets, surfaced next to every draft reply.",
        image: "/assets/cases/ledgerline.webp",
        results: &[("-31%", "handling time"), ("4.8/5", "agent rating")],
        services: &["ai"],
    },
    CaseStudy {
        client: "Fieldstone Outdoor",
        title: "A storefront that loads before the coffee cools",
        industry: "Retail",
        summary: "A static-first rebuild of a slow storefront with a headless commerce backend.",
        image: "/assets/cases/fieldstone.webp",
        results: &[("1.1s", "median LCP"), ("+22%", "mobile conversion")],
        services: &["web", "strategy"],
    },
    CaseStudy {
        client: "Aster Labs",
        title: "Classifying 2M research abstracts a week",
        industry: "Healthcare",
        summary: "An evaluation-first classification pipeline with human review for edge cases.",
        image: "/assets/cases/aster.webp",
        results: &[("96%", "precision"), ("12x", "throughput")],
        services: &["ai", "strategy"],
    },
    CaseStudy {
        client: "Quill & Co",
        title: "One design system for four brands",
        industry: "Retail",
        summary: "Shared tokens and components that let four brand teams ship independently.",
        image: "/assets/cases/quill.webp",
        results: &[("4", "brands on one system"), ("-60%", "design QA time")],
        services: &["design"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::filter::{categories, filter_by_category};
    use crate::content::services;

    #[test]
    fn industries_filter() {
        assert_eq!(
            categories(&CASE_STUDIES),
            vec!["All", "Healthcare", "Fintech", "Retail"]
        );
        assert_eq!(filter_by_category(&CASE_STUDIES, "Retail").len(), 2);
    }

    #[test]
    fn services_reference_real_pages() {
        for study in &CASE_STUDIES {
            for id in study.services {
                assert!(services::find(id).is_some(), "{} -> {}", study.client, id);
            }
        }
    }
}
