use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use dealcart_catalog::{CategoryFilter, FilterState, ResultSummary, visible_products};
use dealcart_core::{DomainError, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Stateless filter pass: collaborators may call the engine directly with
/// both inputs instead of going through a session.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<ListParams>,
) -> axum::response::Response {
    let state = FilterState {
        category: CategoryFilter::from_label(
            params
                .category
                .unwrap_or_else(|| CategoryFilter::ALL_LABEL.to_string()),
        ),
        // The query boundary trims; the engine takes the text literally.
        query: params.q.map(|q| q.trim().to_string()).unwrap_or_default(),
    };

    let view = visible_products(services.catalog(), &state);
    let summary = ResultSummary::new(&state, view.len());
    let body = dto::ViewResponse::new(state.category.label(), view, summary);

    (StatusCode::OK, Json(body)).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog().get(product_id) {
        Some(product) => {
            (StatusCode::OK, Json(dto::ProductDetail::from_product(product))).into_response()
        }
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}
