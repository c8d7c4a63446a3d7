//! The site's static content.
//!
//! Article bodies live as markdown-ish text files next to this module and
//! are embedded at compile time. Placeholder articles carry a stub body and
//! no publication date, which keeps them out of the feed.

use super::types::{
    Article, CareerEntry, EducationEntry, FeaturedMedia, TimelineCompany, TimelineStint,
};

pub const COMING_SOON: &str = "Coming soon...";

pub static ABOUT_INTRO: &str = "Hello! I'm Sid. Engineer by discipline, Architect (worn many hats) at Palantir. Eternally aching to build. Opinions reflected here are all personal.";

pub static ARTICLES: &[Article] = &[
    Article {
        slug: "tell-me-about-yourself",
        title: "Tell me about yourself",
        date: "Jul 2025",
        published: Some("2025-07-01"),
        summary: "How to craft a thoughtful and brief response to the most common interview question.",
        body: include_str!("writings/tell-me-about-yourself.md"),
    },
    Article {
        slug: "receiving-feedback",
        title: "Receiving Feedback",
        date: "May 2025",
        published: Some("2025-05-15"),
        summary: "The art of filtering feedback and knowing when to push back.",
        body: include_str!("writings/receiving-feedback.md"),
    },
    Article {
        slug: "conducting-meetings",
        title: "Conducting Meetings",
        date: "May 2025",
        published: Some("2025-05-01"),
        summary: "Directive but malleable.",
        body: include_str!("writings/conducting-meetings.md"),
    },
    Article {
        slug: "running-cross-functional-teams",
        title: "Running (Serving) Cross Functional Teams",
        date: "April 2025",
        published: Some("2025-04-01"),
        summary: "Competence matters. Cultural relativity matters.",
        body: include_str!("writings/running-cross-functional-teams.md"),
    },
    Article {
        slug: "good-to-great",
        title: "Good to Great - Product",
        date: "January 2025",
        published: Some("2025-01-01"),
        summary: "Iteration over planning. Empirical over Abstract",
        body: include_str!("writings/good-to-great.md"),
    },
    Article {
        slug: "understanding-mcp",
        title: "Understanding MCP in Large Language Models",
        date: "April 15, 2025",
        published: None,
        summary: "Better to just use APIs?",
        body: COMING_SOON,
    },
    Article {
        slug: "router-llm",
        title: "RouterLLM: The Next Step in Efficient Language Models",
        date: "March 22, 2025",
        published: None,
        summary: "An analysis of how RouterLLM architecture is changing the way we think about model efficiency and routing capabilities.",
        body: COMING_SOON,
    },
    Article {
        slug: "blueprint-components",
        title: "Blueprint Components in React: A Game Changer",
        date: "February 10, 2025",
        published: None,
        summary: "How Blueprint components have transformed my React development workflow and improved UI consistency.",
        body: COMING_SOON,
    },
];

/// How many of the leading articles appear as "Featured Writings" on the
/// About page.
pub const FEATURED_WRITINGS: usize = 6;

pub static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        institution: "University Name",
        degree: "Master of Science in Computer Science",
        years: "2019 - 2021",
        description: "Focused on machine learning and artificial intelligence. Thesis on neural networks for healthcare applications.",
    },
    EducationEntry {
        institution: "Another University",
        degree: "Bachelor of Engineering in Computer Science",
        years: "2015 - 2019",
        description: "Strong foundation in algorithms, data structures, and software engineering principles.",
    },
];

pub static CAREER: &[CareerEntry] = &[
    CareerEntry {
        company: "Tech Innovation Corp",
        position: "Senior Software Engineer",
        years: "2022 - Present",
        description: "Leading development of AI-powered healthcare solutions. Implementing machine learning models for medical diagnostics.",
    },
    CareerEntry {
        company: "Digital Solutions Inc",
        position: "Software Developer",
        years: "2019 - 2022",
        description: "Developed web applications using React and Redux. Implemented BLE integrations for IoT devices.",
    },
];

pub static TIMELINE: &[TimelineCompany] = &[
    TimelineCompany {
        name: "Palantir Technologies",
        stints: &[
            TimelineStint {
                period: "2021\u{2013}2024",
                location: "Palo Alto, CA",
                notes: &[
                    "Currently responsible for two key initiatives:",
                    "Leading a team of engineers and compliance specialists to develop Palantir's GxP platform for clinical use-cases ranging from site-selection to RWE analysis.",
                    "Leading a team of extremely talented architects to build product demos that show end to end product capability for Palantir's AI Platform.",
                ],
            },
            TimelineStint {
                period: "2020\u{2013}2021",
                location: "London, UK",
                notes: &[
                    "Developed applications for the NHS at the brink of and through COVID-19 that allowed for equitable allocation of ICU and PPE equipment.",
                ],
            },
            TimelineStint {
                period: "2019\u{2013}2020",
                location: "New York, NY",
                notes: &[
                    "Developed User applications that are currently thwarting nation state cyber-security attacks.",
                    "Wrote data pipelines and models that detected fraud amongst trillion row transaction datasets.",
                ],
            },
        ],
    },
    TimelineCompany {
        name: "Digital Control Inc.",
        stints: &[TimelineStint {
            period: "2018\u{2013}2019",
            location: "Seattle, WA",
            notes: &["Programmed a custom transmitter / receiver for directional drilling."],
        }],
    },
    TimelineCompany {
        name: "Helitrak Inc.",
        stints: &[TimelineStint {
            period: "2017\u{2013}2018",
            location: "Gig Harbor, WA",
            notes: &[
                "Programmed Autopilots and Safety Trigger for the Collective for R22 and R44 Helicopters.",
            ],
        }],
    },
];

pub static FEATURED_MEDIA: &[FeaturedMedia] = &[
    FeaturedMedia {
        title: "Shipping GxP-grade software",
        source: "Engineering Leadership Podcast",
        date: "June 2025",
        url: "https://podcasts.apple.com/us/podcast/engineering-leadership/id1234567890",
        blurb: "A conversation on building compliance-heavy platforms without drowning the engineers in paperwork.",
    },
    FeaturedMedia {
        title: "Demos that close",
        source: "Palantir Developer Conference",
        date: "October 2024",
        url: "https://www.youtube.com/playlist?list=PLJ0Cp2eCD3zxLwDMuCfCZJJ4vJ8VIXisR",
        blurb: "Talk on stitching product demos that show end to end capability instead of feature laundry lists.",
    },
    FeaturedMedia {
        title: "Equitable ICU allocation during COVID-19",
        source: "NHS Digital case study",
        date: "March 2021",
        url: "https://digital.nhs.uk/services",
        blurb: "Case study on the allocation tooling built with the NHS through the pandemic.",
    },
];
