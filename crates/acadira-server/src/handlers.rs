//! HTTP Handlers

use axum::{
    extract::{Query, State},
    http::{header, Method, Uri},
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};

use acadira_core::{PageOutline, Route, SiteContent};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub routes: usize,
}

#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub path: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub indexable: bool,
}

impl From<Route> for RouteInfo {
    fn from(route: Route) -> Self {
        Self {
            path: route.path(),
            title: route.title(),
            summary: route.summary(),
            indexable: route.is_indexable(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutlineQuery {
    #[serde(default)]
    pub path: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        routes: Route::ALL.len(),
    })
}

/// Every static record the pages render
pub async fn site_content() -> Json<SiteContent> {
    Json(SiteContent::current())
}

pub async fn list_routes() -> Json<Vec<RouteInfo>> {
    Json(Route::ALL.into_iter().map(RouteInfo::from).collect())
}

/// Flattened render outline of one page (`?path=/pricing`, default `/`)
pub async fn page_outline(
    Query(query): Query<OutlineQuery>,
) -> Result<Json<PageOutline>, ApiError> {
    let path = query.path.as_deref().unwrap_or("/");
    let route = Route::from_path(path)?;
    Ok(Json(PageOutline::for_route(route)))
}

pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        state.sitemap.to_string(),
    )
}

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.robots.to_string(),
    )
}

/// Called when no bundle file matches: known routes get the WASM shell,
/// everything else is a 404
pub async fn spa_fallback(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    let path = uri.path();
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::NotFound(path.to_string()));
    }

    match Route::from_path(path) {
        Ok(route) => {
            tracing::debug!("Serving shell for {}", route);
            Ok(Html(state.shell.to_string()))
        }
        Err(_) => Err(ApiError::NotFound(path.to_string())),
    }
}
