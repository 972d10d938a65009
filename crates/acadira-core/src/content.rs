//! Site Copy
//!
//! Every string the marketing pages display. Order within each array is the
//! order it is rendered in.

use crate::model::{
    Accent, Benefit, CallToAction, ComplianceBadge, DotLabel, Emphasis, FooterColumn, HeroContent,
    Icon, Logo, NavLink, SectionIntro, TrustIndicator,
};
use crate::route::Route;
use crate::BRAND;

pub static LOGO: Logo = Logo {
    src: "/assets/acadira-logo.jpg",
    alt: BRAND,
};

/// Primary navigation shown in the header
pub static NAV_LINKS: [NavLink; 6] = [
    NavLink::new("Home", Route::Home),
    NavLink::new("How It Works", Route::HowItWorks),
    NavLink::new("Features", Route::Features),
    NavLink::new("Pricing", Route::Pricing),
    NavLink::new("About", Route::About),
    NavLink::new("Contact", Route::Contact),
];

/// The two buttons at the right edge of the header
pub static HEADER_ACTIONS: [CallToAction; 2] = [
    CallToAction::new("Login", Route::Login, Emphasis::Ghost),
    CallToAction::new("Book Demo", Route::Demo, Emphasis::Primary),
];

pub static HERO: HeroContent = HeroContent {
    headline: "Acadira – The AI Tutor Built for",
    highlight: "Your Curriculum",
    subheadline: "Give your students a 24/7 syllabus-aligned AI tutor and simplify learning. \
                  Transform your curriculum into an intelligent teaching assistant.",
    actions: [
        CallToAction::new("Book a Demo", Route::Demo, Emphasis::Primary),
        CallToAction::new("Subscribe Now", Route::Pricing, Emphasis::Outline),
    ],
    indicators: [
        DotLabel::new("Secure & Private", Accent::Green),
        DotLabel::new("Curriculum-Aligned", Accent::Blue),
        DotLabel::new("24/7 Available", Accent::Purple),
    ],
    preview: "AI Tutor Preview",
};

pub static BENEFITS_INTRO: SectionIntro = SectionIntro {
    badge: "Key Benefits",
    title: "Benefits for Everyone in the Education Ecosystem",
    description: "Acadira creates value for institutions, students, and parents through \
                  curriculum-aligned AI tutoring that maintains educational integrity.",
    highlight: None,
};

pub static BENEFITS: [Benefit; 3] = [
    Benefit {
        category: "For Institutions",
        icon: Icon::School,
        color: Accent::Blue,
        features: &[
            "Complete admin control over curriculum",
            "Private AI tutor for your students",
            "Detailed usage analytics and insights",
            "Secure data with institutional privacy",
            "Curriculum-specific knowledge base",
        ],
    },
    Benefit {
        category: "For Students",
        icon: Icon::GraduationCap,
        color: Accent::Green,
        features: &[
            "Instant syllabus-based answers",
            "24/7 learning support available",
            "Personalized study assistant",
            "No distractions from external content",
            "Interactive quiz generation",
        ],
    },
    Benefit {
        category: "For Parents",
        icon: Icon::Family,
        color: Accent::Purple,
        features: &[
            "Complete transparency in learning",
            "Trusted curriculum-based tutoring",
            "Safe learning environment",
            "Progress tracking and insights",
            "Institution-verified content only",
        ],
    },
];

pub static TRUST_INTRO: SectionIntro = SectionIntro {
    badge: "Powered by Xovaxy",
    title: "Trusted by Educational Institutions",
    description: "Acadira is developed by Xovaxy, ensuring enterprise-grade reliability, \
                  security, and educational compliance.",
    highlight: Some("Xovaxy"),
};

pub static TRUST_INDICATORS: [TrustIndicator; 4] = [
    TrustIndicator {
        icon: Icon::Lock,
        title: "Data Security",
        description: "Enterprise-grade encryption and security protocols protect your \
                      institutional data.",
    },
    TrustIndicator {
        icon: Icon::CheckMark,
        title: "Compliance Ready",
        description: "Built with educational compliance standards and privacy regulations in mind.",
    },
    TrustIndicator {
        icon: Icon::Lightning,
        title: "Reliable Infrastructure",
        description: "99.9% uptime with scalable cloud infrastructure supporting thousands of \
                      students.",
    },
    TrustIndicator {
        icon: Icon::Target,
        title: "Curriculum Focused",
        description: "AI responses strictly limited to your uploaded curriculum - no external \
                      content.",
    },
];

pub static COMPLIANCE_BADGES: [ComplianceBadge; 3] = [
    DotLabel::new("SOC 2 Compliant", Accent::Green),
    DotLabel::new("GDPR Ready", Accent::Blue),
    DotLabel::new("ISO 27001", Accent::Purple),
];

pub static FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Product",
        links: &[
            NavLink::new("How It Works", Route::HowItWorks),
            NavLink::new("Features", Route::Features),
            NavLink::new("Pricing", Route::Pricing),
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            NavLink::new("About", Route::About),
            NavLink::new("Contact", Route::Contact),
        ],
    },
    FooterColumn {
        heading: "Get Started",
        links: &[
            NavLink::new("Book Demo", Route::Demo),
            NavLink::new("Login", Route::Login),
        ],
    },
];

pub const FOOTER_TAGLINE: &str = "The AI tutor built for your curriculum.";

pub const COPYRIGHT: &str = "© 2026 Acadira. Powered by Xovaxy.";

/// Every route some link on the site points at, in first-seen order
pub fn linked_routes() -> Vec<Route> {
    let targets = NAV_LINKS
        .iter()
        .map(|l| l.target)
        .chain(HEADER_ACTIONS.iter().map(|a| a.target))
        .chain(HERO.actions.iter().map(|a| a.target))
        .chain(
            FOOTER_COLUMNS
                .iter()
                .flat_map(|c| c.links.iter().map(|l| l.target)),
        );

    let mut seen = Vec::new();
    for target in targets {
        if !seen.contains(&target) {
            seen.push(target);
        }
    }
    seen
}
