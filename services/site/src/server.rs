//! HTTP routes for the site host

use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

/// Build the axum router serving the compiled bundle.
///
/// Paths that do not match a file fall back to the index page so the
/// client-side router can resolve them.
pub fn build_router(site: &SiteConfig) -> Router {
    let index = site.index_path();
    tracing::debug!("Serving {:?} with fallback {:?}", site.root, index);

    let bundle = ServeDir::new(&site.root)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health_handler))
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
