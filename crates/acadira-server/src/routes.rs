//! Router Assembly

use axum::{handler::Handler, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    health_check, list_routes, page_outline, robots, site_content, sitemap, spa_fallback,
};
use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Bundle files first, then the route shell / 404
    let bundle = ServeDir::new(&state.config.static_dir)
        .fallback(spa_fallback.with_state(state.clone()));

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Content API
        .route("/api/content", get(site_content))
        .route("/api/routes", get(list_routes))
        .route("/api/outline", get(page_outline))
        // Crawlers
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        // Static files (WASM frontend) and page routes
        .fallback_service(bundle)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
