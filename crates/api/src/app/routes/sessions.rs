use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;

use dealcart_browse::{BrowseSession, CopyOutcome};
use dealcart_catalog::CategoryFilter;
use dealcart_core::{DomainError, ProductId, SessionId};

use crate::app::services::{AppServices, SessionEntry};
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_view))
        .route("/:id/category", put(set_category))
        .route("/:id/query", put(set_query))
        .route(
            "/:id/selection",
            post(select).get(get_selection).delete(close_selection),
        )
        .route("/:id/selection/copy", post(copy_link))
        .route("/:id/selection/copy/result", post(copy_result))
        .route("/:id/events", get(drain_events))
}

/// Resolve a session id and run `f` under that session's lock.
///
/// Sessions are single logical threads of control; the lock serializes
/// concurrent callers and is released before the response leaves.
fn with_session<F>(services: &AppServices, id: &str, f: F) -> axum::response::Response
where
    F: FnOnce(&mut SessionEntry) -> axum::response::Response,
{
    let session_id: SessionId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let Some(entry) = services.session(session_id) else {
        return errors::domain_error_to_response(DomainError::not_found());
    };

    match entry.lock() {
        Ok(mut guard) => f(&mut guard),
        Err(_) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "session_unavailable",
            "session state is unavailable",
        ),
    }
}

fn view_response(session: &BrowseSession) -> axum::response::Response {
    let view = session.current_view();
    let summary = session.summary();
    let label = session.filters().state().category.label();
    let body = dto::ViewResponse::new(label, view, summary);
    (StatusCode::OK, Json(body)).into_response()
}

fn selection_response(entry: &mut SessionEntry) -> axum::response::Response {
    let copy_feedback = entry.session.copy_feedback(Instant::now());
    let product = entry
        .session
        .selection()
        .open_product()
        .map(dto::ProductDetail::from_product);
    let body = dto::SelectionResponse {
        open: product.is_some(),
        product,
        copy_feedback,
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn create_session(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let id = services.create_session();
    (
        StatusCode::CREATED,
        Json(dto::SessionCreatedResponse {
            session_id: id.to_string(),
        }),
    )
        .into_response()
}

pub async fn get_view(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    with_session(&services, &id, |entry| view_response(&entry.session))
}

pub async fn set_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::SetCategoryRequest>,
) -> axum::response::Response {
    with_session(&services, &id, |entry| {
        entry
            .session
            .set_category(CategoryFilter::from_label(body.category), Utc::now());
        view_response(&entry.session)
    })
}

pub async fn set_query(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::SetQueryRequest>,
) -> axum::response::Response {
    with_session(&services, &id, |entry| {
        entry.session.set_search_query(&body.query, Utc::now());
        view_response(&entry.session)
    })
}

pub async fn select(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::SelectRequest>,
) -> axum::response::Response {
    with_session(&services, &id, |entry| {
        match entry
            .session
            .select(ProductId::new(body.product_id), Utc::now())
        {
            Ok(()) => selection_response(entry),
            Err(e) => errors::domain_error_to_response(e),
        }
    })
}

pub async fn get_selection(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    with_session(&services, &id, selection_response)
}

pub async fn close_selection(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    with_session(&services, &id, |entry| {
        entry.session.close_selection(Utc::now());
        selection_response(entry)
    })
}

pub async fn copy_link(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    with_session(&services, &id, |entry| match entry.session.copy_ticket() {
        Ok(ticket) => (
            StatusCode::OK,
            Json(dto::CopyTicketResponse {
                generation: ticket.generation,
                link: ticket.link,
            }),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    })
}

pub async fn copy_result(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::CopyResultRequest>,
) -> axum::response::Response {
    with_session(&services, &id, |entry| {
        let outcome = if body.copied {
            CopyOutcome::Copied
        } else {
            CopyOutcome::Failed
        };
        let applied =
            entry
                .session
                .resolve_copy(body.generation, outcome, Instant::now(), Utc::now());
        (StatusCode::OK, Json(dto::CopyResultResponse { applied })).into_response()
    })
}

/// Drain the session's change-notification feed (polling subscriber surface).
pub async fn drain_events(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    with_session(&services, &id, |entry| {
        (StatusCode::OK, Json(entry.feed.drain())).into_response()
    })
}
