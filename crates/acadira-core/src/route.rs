//! Route Table
//!
//! The eight destinations every link on the site may point at. The browser
//! router and the server's shell fallback both resolve against this table.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Result, SiteError};

/// A navigable page of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    HowItWorks,
    Features,
    Pricing,
    About,
    Contact,
    Login,
    Demo,
}

impl Route {
    /// All routes, in navigation order
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::HowItWorks,
        Self::Features,
        Self::Pricing,
        Self::About,
        Self::Contact,
        Self::Login,
        Self::Demo,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::HowItWorks => "/how-it-works",
            Self::Features => "/features",
            Self::Pricing => "/pricing",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Login => "/login",
            Self::Demo => "/demo",
        }
    }

    /// Page heading, also used for the document title
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "The AI Tutor Built for Your Curriculum",
            Self::HowItWorks => "How It Works",
            Self::Features => "Features",
            Self::Pricing => "Pricing",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Login => "Login",
            Self::Demo => "Book a Demo",
        }
    }

    /// One-line description shown on placeholder pages and in the route list
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Home => "A 24/7 syllabus-aligned AI tutor for your students.",
            Self::HowItWorks => "Upload your curriculum and Acadira turns it into a private tutor.",
            Self::Features => "Syllabus-based answers, quiz generation and usage analytics.",
            Self::Pricing => "Subscription plans for schools, colleges and training institutes.",
            Self::About => "Acadira is developed by Xovaxy.",
            Self::Contact => "Questions about Acadira? Get in touch with our team.",
            Self::Login => "Sign in to your institution's Acadira workspace.",
            Self::Demo => "See Acadira answer questions from your own curriculum.",
        }
    }

    /// Whether the page belongs in the public sitemap
    pub const fn is_indexable(self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Resolve a request path (query, fragment and trailing slash ignored)
    pub fn from_path(path: &str) -> Result<Self> {
        let bare = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = match bare.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        Self::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .ok_or_else(|| SiteError::UnknownRoute(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_path(s)
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}
