#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

impl BillingCycle {
    pub fn period_label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Annual => "/year",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Annual,
            BillingCycle::Annual => BillingCycle::Monthly,
        }
    }
}

pub const ANNUAL_MONTHS: u32 = 10;

#[derive(Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub tagline: &'static str,
    pub monthly_usd: Option<u32>,
    pub features: &'static [&'static str],
    pub highlighted: bool,
    pub cta: &'static str,
}

impl PricingTier {
    pub fn price(&self, cycle: BillingCycle) -> Option<u32> {
        self.monthly_usd.map(|monthly| match cycle {
            BillingCycle::Monthly => monthly,
            BillingCycle::Annual => monthly * ANNUAL_MONTHS,
        })
    }

    pub fn price_label(&self, cycle: BillingCycle) -> String {
        match self.price(cycle) {
            Some(amount) => format!("${}", group_thousands(amount)),
            None => "Custom".to_string(),
        }
    }
}

fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub static TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Launch",
        tagline: "A polished site for a new product or company.",
        monthly_usd: Some(2_400),
        features: &[
            "Up to 8 pages",
            "CMS for blog and case studies",
            "Performance and SEO baseline",
            "Monthly content updates",
            "Email support",
        ],
        highlighted: false,
        cta: "Start with Launch",
    },
    PricingTier {
        name: "Growth",
        tagline: "Ongoing design and engineering capacity.",
        monthly_usd: Some(6_800),
        features: &[
            "Dedicated designer and engineer",
            "Experiments and A/B testing",
            "Analytics and conversion reviews",
            "AI feature prototyping",
            "Shared Slack channel",
        ],
        highlighted: true,
        cta: "Choose Growth",
    },
    PricingTier {
        name: "Partner",
        tagline: "A cross-functional team embedded with yours.",
        monthly_usd: None,
        features: &[
            "Full product squad",
            "Architecture and security reviews",
            "Production AI integrations",
            "Quarterly roadmap planning",
            "24h response SLA",
        ],
        highlighted: false,
        cta: "Talk to us",
    },
];

pub struct PricingFaq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ: [PricingFaq; 4] = [
    PricingFaq {
        question: "Can we switch plans later?",
        answer: "Yes. Plans change at the start of the next billing period, and unused hours carry over for one month.",
    },
    PricingFaq {
        question: "How does annual billing work?",
        answer: "Annual plans are billed once a year at ten times the monthly price, so two months are on us.",
    },
    PricingFaq {
        question: "Do you take fixed-price projects?",
        answer: "For well-scoped work such as a site launch we do. Anything exploratory runs on a monthly plan.",
    },
    PricingFaq {
        question: "Who owns the code and designs?",
        answer: "You do, from the first commit. Everything lives in repositories and files under your accounts.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annual_is_ten_months() {
        assert_eq!(TIERS[0].price(BillingCycle::Monthly), Some(2_400));
        assert_eq!(TIERS[0].price(BillingCycle::Annual), Some(24_000));
        assert_eq!(TIERS[2].price(BillingCycle::Annual), None);
    }

    #[test]
    fn labels() {
        assert_eq!(TIERS[1].price_label(BillingCycle::Monthly), "$6,800");
        assert_eq!(TIERS[1].price_label(BillingCycle::Annual), "$68,000");
        assert_eq!(TIERS[2].price_label(BillingCycle::Monthly), "Custom");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(BillingCycle::Monthly.toggled(), BillingCycle::Annual);
        assert_eq!(BillingCycle::Monthly.toggled().toggled(), BillingCycle::Monthly);
    }

    #[test]
    fn exactly_one_highlighted_tier() {
        assert_eq!(TIERS.iter().filter(|tier| tier.highlighted).count(), 1);
    }
}
