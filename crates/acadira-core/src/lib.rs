//! # acadira-core
//!
//! Static content, routes and page layout for the Acadira marketing site.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      acadira-core                        │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │   content   │──│   layout    │──│       route         │  │
//! │  │  (literals) │  │ (sections)  │  │  (8 destinations)   │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//!            │                                   │
//!   acadira-web (Leptos)          acadira-server (axum)
//! ```
//!
//! Every record here is a `'static` literal. The browser crate maps the
//! arrays to markup; the server exposes the same arrays as JSON and uses the
//! route table for its shell fallback and sitemap.

pub mod content;
pub mod error;
pub mod layout;
pub mod model;
pub mod route;
pub mod sitemap;

pub use error::{Result, SiteError};
pub use layout::{Block, PageOutline, Section, SiteContent};
pub use model::{
    Accent, Benefit, CallToAction, ComplianceBadge, DotLabel, Emphasis, FooterColumn, HeroContent,
    Icon, Logo, NavLink, SectionIntro, TrustIndicator,
};
pub use route::Route;

/// Product name shown in the header, footer and page titles
pub const BRAND: &str = "Acadira";
