//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: shared state (catalog handle, browse-session store)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use dealcart_catalog::ProductRepository;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The catalog is constructed once by the caller and shared read-only with
/// every handler.
pub fn build_app(catalog: Arc<ProductRepository>) -> Router {
    let services = Arc::new(services::AppServices::new(catalog));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(services)))
        .layer(ServiceBuilder::new())
}
