pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat {
        value: 120,
        suffix: "+",
        label: "projects shipped",
    },
    Stat {
        value: 14,
        suffix: "",
        label: "countries served",
    },
    Stat {
        value: 98,
        suffix: "%",
        label: "clients who return",
    },
    Stat {
        value: 9,
        suffix: "",
        label: "years in business",
    },
];

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub outputs: &'static [&'static str],
}

pub static PROCESS: [ProcessStep; 5] = [
    ProcessStep {
        number: "01",
        title: "Discover",
        duration: "1-2 weeks",
        description: "Workshops and interviews to understand your users, constraints and goals.",
        outputs: &["Problem statement", "Success metrics", "Research plan"],
    },
    ProcessStep {
        number: "02",
        title: "Define",
        duration: "1 week",
        description: "We cut the scope to a first release everyone agrees to defend.",
        outputs: &["Release scope", "Estimates", "Roadmap"],
    },
    ProcessStep {
        number: "03",
        title: "Design",
        duration: "2-4 weeks",
        description: "Prototypes tested with real users, then a design system to build from.",
        outputs: &["Prototypes", "Design tokens", "Component specs"],
    },
    ProcessStep {
        number: "04",
        title: "Build",
        duration: "4-12 weeks",
        description: "Weekly demos, continuous deployment and automated tests from day one.",
        outputs: &["Production code", "Test suite", "Deploy pipeline"],
    },
    ProcessStep {
        number: "05",
        title: "Grow",
        duration: "Ongoing",
        description: "Measure, learn and iterate with experiments tied to your metrics.",
        outputs: &["Analytics reviews", "Experiments", "Quarterly plans"],
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
}

pub static TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Maya Chen",
        role: "Founder, AI Lead",
        photo: "/assets/team/maya.webp",
    },
    TeamMember {
        name: "Jonas Berg",
        role: "Engineering Lead",
        photo: "/assets/team/jonas.webp",
    },
    TeamMember {
        name: "Priya Nair",
        role: "Design Director",
        photo: "/assets/team/priya.webp",
    },
    TeamMember {
        name: "Leo Martins",
        role: "Strategy Lead",
        photo: "/assets/team/leo.webp",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub company: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "They cut our scope in half and we launched a month early. Nobody missed the other half.",
        author: "Dana Whitfield",
        company: "Northwind Health",
    },
    Testimonial {
        quote: "The first AI vendor who showed us an evaluation report before a demo.",
        author: "Ravi Kapoor",
        company: "Ledgerline",
    },
    Testimonial {
        quote: "Our site finally feels as fast as our product.",
        author: "Elin Sandberg",
        company: "Fieldstone Outdoor",
    },
];

pub static VALUES: [(&str, &str); 3] = [
    ("Clarity over cleverness", "We write things down, say what we mean and ship what we said."),
    ("Measure, then decide", "Opinions are welcome; numbers settle arguments."),
    ("Leave it better", "Every handover includes docs, tests and a team that can run it."),
];
