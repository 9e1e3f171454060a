//! Static site copy and display data
//!
//! Everything here is fixed presentational content: the UI draws it verbatim
//! and nothing mutates it.

/// A service the agency offers
pub struct ServiceOffering {
    pub title: &'static str,
    pub desc: &'static str,
}

/// A portfolio entry
pub struct CaseStudy {
    pub title: &'static str,
    pub tag: &'static str,
}

pub const HERO_TITLE: &str = "We craft digital experiences that drive growth";

pub const HERO_TAGLINE: &str = "A full-service creative and product studio helping ambitious \
teams launch brands, build products, and scale results.";

pub const SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        title: "Brand Strategy",
        desc: "Positioning, messaging, and visual identity that set you apart.",
    },
    ServiceOffering {
        title: "Web Design",
        desc: "High-converting, responsive websites crafted for your audience.",
    },
    ServiceOffering {
        title: "Product Design",
        desc: "End-to-end UX/UI for delightful digital products and apps.",
    },
    ServiceOffering {
        title: "Growth Marketing",
        desc: "Performance campaigns, SEO, and analytics to fuel growth.",
    },
];

pub const CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        title: "SaaS Dashboard",
        tag: "Product",
    },
    CaseStudy {
        title: "Lifestyle Brand",
        tag: "Branding",
    },
    CaseStudy {
        title: "Ecommerce Store",
        tag: "Web",
    },
];

pub const CLIENT_LOGOS: [&str; 6] = ["Acme", "Vertex", "North", "Apex", "Pulse", "Nimbus"];

pub const ABOUT_TITLE: &str = "A partner from strategy to scale";

pub const ABOUT_COPY: &str = "We're a senior team of strategists, designers, and builders. \
We move fast, communicate clearly, and obsess over results.";

pub const ABOUT_POINTS: [&str; 3] = [
    "Cross-functional team with startup and enterprise experience",
    "Outcome-driven processes and transparent collaboration",
    "Flexible engagement models that fit your roadmap",
];

pub const WHY_US_POINTS: [&str; 3] = [
    "Deep expertise across brand, product, and growth",
    "Senior, hands-on team that ships quickly",
    "Clear communication and measurable outcomes",
];

/// Options for the service select field (the four offering titles)
pub const SERVICE_OPTIONS: &[&str] = &[
    "Brand Strategy",
    "Web Design",
    "Product Design",
    "Growth Marketing",
];

/// Options for the budget select field
pub const BUDGET_OPTIONS: &[&str] = &["Under $5k", "$5k – $15k", "$15k – $50k", "$50k+"];

pub const CONTACT_EMAIL: &str = "hello@flames.agency";
