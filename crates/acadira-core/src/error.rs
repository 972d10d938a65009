//! Error Types

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site error types
#[derive(Error, Debug)]
pub enum SiteError {
    /// Path does not name one of the site's routes
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Configuration value missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SiteError {
    /// Stable machine-readable code for API responses
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownRoute(_) => "UNKNOWN_ROUTE",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownRoute(path) => format!("The page '{path}' does not exist."),
            Self::Config(_) => "The site is misconfigured.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SiteError::UnknownRoute("/x".into()).code(), "UNKNOWN_ROUTE");
        assert_eq!(SiteError::Config("bad".into()).code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_user_message_names_path() {
        let err = SiteError::UnknownRoute("/careers".into());
        assert!(err.user_message().contains("/careers"));
        assert_eq!(err.to_string(), "Unknown route: /careers");
    }
}
