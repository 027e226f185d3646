//! HTML pages and front-end assets.
//!
//! `/`, `/animals` and `/zookeepers` map to fixed pages. Any other path is
//! looked up under the public directory, and anything not found there gets
//! the home page.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

pub const INDEX_PAGE: &str = "index.html";
pub const ANIMALS_PAGE: &str = "animals.html";
pub const ZOOKEEPERS_PAGE: &str = "zookeepers.html";

pub fn page_routes(public_dir: &Path) -> Router {
    let index = public_dir.join(INDEX_PAGE);
    Router::new()
        .route_service("/", ServeFile::new(&index))
        .route_service("/animals", ServeFile::new(public_dir.join(ANIMALS_PAGE)))
        .route_service("/zookeepers", ServeFile::new(public_dir.join(ZOOKEEPERS_PAGE)))
        .fallback_service(ServeDir::new(public_dir).fallback(ServeFile::new(index)))
}
