#[derive(Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub deliverables: &'static [&'static str],
    pub stack: &'static [&'static str],
}

pub static SERVICES: [Service; 4] = [
    Service {
        id: "web",
        name: "Web Development",
        icon: "◆",
        summary: "Fast, accessible marketing sites and web apps built to be maintained.",
        description: "From a five-page launch site to a multi-region product, we build on a typed stack with performance budgets, automated testing and a deploy pipeline your team can own after handover.",
        deliverables: &[
            "Responsive, accessible front end",
            "Headless CMS integration",
            "Performance and SEO audit",
            "CI/CD and hosting setup",
        ],
        stack: &["Rust", "TypeScript", "WebAssembly", "PostgreSQL"],
    },
    Service {
        id: "ai",
        name: "AI Integration",
        icon: "✦",
        summary: "Model-backed features that are measured, grounded and safe to ship.",
        description: "We design retrieval pipelines, assistants and classification workflows around your data, with evaluation suites and tracing so you can see exactly how every feature behaves in production.",
        deliverables: &[
            "Use-case discovery and feasibility",
            "Retrieval and evaluation pipeline",
            "Guardrails and human review flows",
            "Usage and cost dashboards",
        ],
        stack: &["Python", "Rust", "Vector search", "OpenTelemetry"],
    },
    Service {
        id: "design",
        name: "Product Design",
        icon: "●",
        summary: "Interfaces and design systems grounded in research, not taste.",
        description: "Research, prototyping and visual design delivered as a living design system, so new pages and features stay consistent long after launch.",
        deliverables: &[
            "User research and journey maps",
            "Interactive prototypes",
            "Design system and tokens",
            "Usability testing",
        ],
        stack: &["Figma", "Storybook", "Design tokens"],
    },
    Service {
        id: "strategy",
        name: "Digital Strategy",
        icon: "▲",
        summary: "Roadmaps that turn a vague brief into a scoped, fundable release.",
        description: "Workshops, audits and technical due diligence that leave you with a prioritized roadmap, realistic estimates and the metrics that will prove it worked.",
        deliverables: &[
            "Discovery workshops",
            "Technical and content audits",
            "Prioritized roadmap",
            "Success metrics and analytics plan",
        ],
        stack: &["Workshops", "Analytics", "Roadmapping"],
    },
];

pub fn find(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_by_id() {
        assert_eq!(find("ai").map(|s| s.name), Some("AI Integration"));
        assert!(find("AI").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn ids_are_url_safe() {
        for service in &SERVICES {
            assert!(service
                .id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'));
            assert!(!service.deliverables.is_empty());
        }
    }
}
