//! HTTP server for the zoo catalog.
//!
//! Serves the JSON API under `/api`, the three HTML pages, and the static
//! front-end assets from the configured public directory.

pub mod config;
pub mod error;
pub mod handler;
pub mod pages;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::ZooServer;
