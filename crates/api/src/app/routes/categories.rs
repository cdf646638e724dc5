use std::sync::Arc;

use axum::{
    Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::get,
};

use dealcart_catalog::CategoryFilter;

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_categories))
}

/// The category input boundary's fixed choice set: the `All` sentinel plus
/// the catalog's distinct labels in catalog order.
pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let mut categories = vec![CategoryFilter::ALL_LABEL.to_string()];
    categories.extend(
        services
            .catalog()
            .category_labels()
            .into_iter()
            .map(str::to_string),
    );

    (
        StatusCode::OK,
        Json(dto::CategoriesResponse { categories }),
    )
        .into_response()
}
