//! Content Records
//!
//! Literal configuration records rendered by the page sections. None of
//! these are mutated after construction; they live in `content` as statics.

use serde::Serialize;

use crate::route::Route;

/// A navigation link
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Route,
}

impl NavLink {
    pub const fn new(label: &'static str, target: Route) -> Self {
        Self { label, target }
    }

    pub const fn href(&self) -> &'static str {
        self.target.path()
    }
}

/// Button variant of a call-to-action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Filled gradient button
    Primary,
    /// Bordered button on a transparent background
    Outline,
    /// Text-only button
    Ghost,
}

/// A button-styled link
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: Route,
    pub emphasis: Emphasis,
}

impl CallToAction {
    pub const fn new(label: &'static str, target: Route, emphasis: Emphasis) -> Self {
        Self {
            label,
            target,
            emphasis,
        }
    }

    pub const fn href(&self) -> &'static str {
        self.target.path()
    }

    /// CSS class for the button
    pub const fn class(&self) -> &'static str {
        match self.emphasis {
            Emphasis::Primary => "btn btn-primary",
            Emphasis::Outline => "btn btn-outline",
            Emphasis::Ghost => "btn btn-ghost",
        }
    }
}

/// Emoji shown at the top of a benefit or trust card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    School,
    GraduationCap,
    Family,
    Lock,
    CheckMark,
    Lightning,
    Target,
}

impl Icon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::School => "🏫",
            Self::GraduationCap => "🎓",
            Self::Family => "👨‍👩‍👧‍👦",
            Self::Lock => "🔒",
            Self::CheckMark => "✅",
            Self::Lightning => "⚡",
            Self::Target => "🎯",
        }
    }

    /// Accessible label for screen readers
    pub const fn label(self) -> &'static str {
        match self {
            Self::School => "school",
            Self::GraduationCap => "graduation cap",
            Self::Family => "family",
            Self::Lock => "lock",
            Self::CheckMark => "check mark",
            Self::Lightning => "lightning bolt",
            Self::Target => "target",
        }
    }
}

/// Color family of a benefit card or a status dot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
}

impl Accent {
    /// Tinted background and text classes of a benefit card label
    pub const fn class(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-100 text-blue-800",
            Self::Green => "bg-green-100 text-green-800",
            Self::Purple => "bg-purple-100 text-purple-800",
        }
    }

    /// Solid fill of a status dot
    pub const fn dot_class(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-500",
            Self::Green => "bg-green-500",
            Self::Purple => "bg-purple-500",
        }
    }
}

/// A benefit card for one audience segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Benefit {
    pub category: &'static str,
    pub icon: Icon,
    pub color: Accent,
    pub features: &'static [&'static str],
}

/// A trust card asserting a compliance or reliability claim
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrustIndicator {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A short label preceded by a colored dot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DotLabel {
    pub label: &'static str,
    pub dot: Accent,
}

impl DotLabel {
    pub const fn new(label: &'static str, dot: Accent) -> Self {
        Self { label, dot }
    }
}

/// A certification shown in the badge row under the trust cards
pub type ComplianceBadge = DotLabel;

/// Badge, heading and paragraph opening a content section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SectionIntro {
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Substring of `description` rendered in the brand color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<&'static str>,
}

impl SectionIntro {
    /// Split the description around its highlight: `(before, highlight, after)`
    pub fn description_parts(&self) -> (&'static str, Option<&'static str>, &'static str) {
        let description = self.description;
        self.highlight
            .and_then(|word| {
                description
                    .find(word)
                    .map(|at| (&description[..at], Some(word), &description[at + word.len()..]))
            })
            .unwrap_or((description, None, ""))
    }
}

/// Copy for the top-of-page banner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    /// Plain lead of the headline
    pub headline: &'static str,
    /// Tail of the headline rendered with the gradient
    pub highlight: &'static str,
    pub subheadline: &'static str,
    pub actions: [CallToAction; 2],
    pub indicators: [DotLabel; 3],
    /// Caption of the product preview panel
    pub preview: &'static str,
}

impl HeroContent {
    /// Headline as one line of text
    pub fn full_headline(&self) -> String {
        format!("{} {}", self.headline, self.highlight)
    }
}

/// The header logo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub src: &'static str,
    pub alt: &'static str,
}

/// A titled group of footer links
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}
