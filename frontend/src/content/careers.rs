use super::filter::Categorized;

#[derive(Debug, PartialEq)]
pub struct Opening {
    pub id: &'static str,
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub summary: &'static str,
}

impl Categorized for Opening {
    fn category(&self) -> &str {
        self.department
    }
}

pub static OPENINGS: [Opening; 5] = [
    Opening {
        id: "senior-rust-engineer",
        title: "Senior Rust Engineer",
        department: "Engineering",
        location: "Remote (EU)",
        kind: "Full-time",
        summary: "Own the WebAssembly front ends and services behind our client products.",
    },
    Opening {
        id: "ml-engineer",
        title: "Machine Learning Engineer",
        department: "Engineering",
        location: "Remote (EU / US East)",
        kind: "Full-time",
        summary: "Build retrieval and evaluation pipelines for production AI features.",
    },
    Opening {
        id: "product-designer",
        title: "Product Designer",
        department: "Design",
        location: "Berlin or remote",
        kind: "Full-time",
        summary: "Lead research and interface design from first workshop to launch.",
    },
    Opening {
        id: "content-strategist",
        title: "Content Strategist",
        department: "Strategy",
        location: "Remote",
        kind: "Contract",
        summary: "Shape messaging and information architecture for client sites.",
    },
    Opening {
        id: "delivery-lead",
        title: "Delivery Lead",
        department: "Strategy",
        location: "Lisbon",
        kind: "Full-time",
        summary: "Keep multi-disciplinary projects scoped, on time and honest.",
    },
];

pub static PERKS: [(&str, &str); 4] = [
    ("Remote-first", "Work where you do your best thinking, with two team weeks a year."),
    ("Learning budget", "$2,000 a year for courses, books and conferences."),
    ("Four-day Fridays", "Every other Friday is for side projects or rest."),
    ("Hardware of choice", "Pick the laptop and setup that fit how you work."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::filter::{categories, filter_by_category, ALL};

    #[test]
    fn departments() {
        assert_eq!(
            categories(&OPENINGS),
            vec!["All", "Engineering", "Design", "Strategy"]
        );
        assert_eq!(filter_by_category(&OPENINGS, "Engineering").len(), 2);
        assert_eq!(filter_by_category(&OPENINGS, ALL).len(), OPENINGS.len());
    }
}
