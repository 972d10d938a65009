//! Page Components

mod home;
mod not_found;
mod route;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use route::RoutePage;
