//! Application State

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;

use acadira_core::sitemap::{render_robots, render_sitemap};

use crate::config::ServerConfig;

/// Served when the bundle directory has no `index.html` yet
pub const FALLBACK_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <title>Acadira</title>
</head>
<body>
    <noscript>Acadira needs JavaScript and WebAssembly enabled.</noscript>
</body>
</html>
"#;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Settings the server was started with
    pub config: Arc<ServerConfig>,

    /// `index.html` that boots the WASM bundle
    pub shell: Arc<str>,

    /// Pre-rendered sitemap.xml
    pub sitemap: Arc<str>,

    /// Pre-rendered robots.txt
    pub robots: Arc<str>,
}

impl AppState {
    pub fn new(config: ServerConfig, shell: impl Into<Arc<str>>, lastmod: NaiveDate) -> Self {
        let sitemap = render_sitemap(&config.base_url, lastmod);
        let robots = render_robots(&config.base_url);

        Self {
            config: Arc::new(config),
            shell: shell.into(),
            sitemap: sitemap.into(),
            robots: robots.into(),
        }
    }
}

/// Read the bundle's `index.html`, falling back to a bare shell
pub async fn load_shell(static_dir: &Path) -> String {
    let index = static_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => {
            tracing::info!("✓ Loaded shell from {}", index.display());
            html
        }
        Err(e) => {
            tracing::warn!("⚠ Could not read {}: {}", index.display(), e);
            tracing::warn!("  Serving a bare shell. Run `trunk build` in crates/acadira-web");
            FALLBACK_SHELL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_shell_falls_back() {
        let html = load_shell(Path::new("/nonexistent/acadira-dist")).await;
        assert_eq!(html, FALLBACK_SHELL);
    }

    #[test]
    fn test_state_prerenders_documents() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        let lastmod = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let state = AppState::new(config, "<html></html>", lastmod);
        assert!(state.sitemap.contains("http://localhost:3000/pricing"));
        assert!(state.robots.contains("http://localhost:3000/sitemap.xml"));
        assert_eq!(&*state.shell, "<html></html>");
    }
}
