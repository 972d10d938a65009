//! Acadira HTTP Server
//!
//! Axum host for the marketing site: serves the Leptos WASM bundle, answers
//! every site route with the bundle's shell, and exposes the static content
//! as JSON alongside a sitemap for crawlers.

mod config;
mod error;
mod handlers;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acadira_core::Route;

use crate::config::ServerConfig;
use crate::state::{load_shell, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!("Serving bundle from {}", config.static_dir.display());
    tracing::info!("Public base URL {}", config.base_url);

    let shell = load_shell(&config.static_dir).await;
    let lastmod = chrono::Utc::now().date_naive();
    let addr = config.bind_addr;

    let app = routes::app(AppState::new(config, shell, lastmod));

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 Acadira site running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Pages:");
    for route in Route::ALL {
        tracing::info!("  GET  {:<14} - {}", route.path(), route.title());
    }
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  GET  /api/content  - Static site content");
    tracing::info!("  GET  /api/routes   - Route table");
    tracing::info!("  GET  /api/outline  - Render outline of a page");
    tracing::info!("  GET  /sitemap.xml  - Sitemap");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
