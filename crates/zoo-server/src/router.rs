use std::path::Path;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use zoo_store::Catalog;

use crate::handler;
use crate::pages::page_routes;

/// JSON API routes, relative to `/api`.
pub fn api_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route(
            "/animals",
            get(handler::list_animals).post(handler::create_animal),
        )
        .route("/animals/:id", get(handler::get_animal))
        .with_state(catalog)
}

/// Build the full router: API under `/api`, pages and assets elsewhere.
pub fn build_router(catalog: Arc<Catalog>, public_dir: &Path) -> Router {
    Router::new()
        .nest("/api", api_routes(catalog))
        .merge(page_routes(public_dir))
        .layer(TraceLayer::new_for_http())
}
