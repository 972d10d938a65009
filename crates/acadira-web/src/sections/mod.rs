//! Page Sections

mod benefits;
mod footer;
mod header;
mod hero;
mod route_stub;
mod trust;

pub use benefits::BenefitsSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::HeroSection;
pub use route_stub::RouteStub;
pub use trust::TrustSection;
