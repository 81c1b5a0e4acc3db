//! Category HTTP Routes
//!
//! - `GET /categories`
//! - `GET /categories/{id}/questions?page=N`

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::api::{
    page_of, paginate, path_id, ApiError, ApiResult, CategoriesPayload, Envelope, PageQuery,
    QuestionListPayload,
};
use crate::store::{categories as category_store, questions as question_store};

use super::state::SharedState;

/// Create category routes
pub fn category_routes(state: SharedState) -> Router {
    Router::new()
        .route("/categories", get(list_categories_handler))
        .route("/categories/:id/questions", get(category_questions_handler))
        .with_state(state)
}

async fn list_categories_handler(
    State(state): State<SharedState>,
) -> ApiResult<Json<Envelope<CategoriesPayload>>> {
    let categories = state.store.session(category_store::label_map).await?;

    Ok(Json(Envelope::ok(CategoriesPayload {
        categories,
        current_category: None,
    })))
}

async fn category_questions_handler(
    State(state): State<SharedState>,
    id: Result<Path<i32>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Json<Envelope<QuestionListPayload>>> {
    let id = path_id(id)?;
    let page = page_of(query);

    let selection = state
        .store
        .session(move |conn| question_store::by_category(conn, id))
        .await?;

    let current = paginate(&selection, page);
    if current.is_empty() {
        debug!(category = id, page, total = selection.len(), "empty category page");
        return Err(ApiError::NotFound);
    }

    Ok(Json(Envelope::ok(QuestionListPayload {
        questions: current.to_vec(),
        total_questions: selection.len(),
        current_category: Some(id),
    })))
}
