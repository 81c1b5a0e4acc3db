//! Question HTTP Routes
//!
//! - `GET /questions?page=N` - paginated listing
//! - `POST /questions` - create
//! - `POST /questions/search?page=N` - text search
//! - `DELETE /questions/{id}` - delete

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{debug, info, warn};

use crate::api::{
    json_body, page_of, paginate, path_id, ApiError, ApiResult, CreatedPayload, DeletedPayload,
    Envelope, PageQuery, QuestionListPayload, QuestionPagePayload, SearchRequest,
};
use crate::store::{categories as category_store, questions as question_store, NewQuestion};

use super::state::SharedState;

/// Create question routes
pub fn question_routes(state: SharedState) -> Router {
    Router::new()
        .route(
            "/questions",
            get(list_questions_handler).post(create_question_handler),
        )
        .route("/questions/search", post(search_questions_handler))
        .route("/questions/:id", delete(delete_question_handler))
        .with_state(state)
}

async fn list_questions_handler(
    State(state): State<SharedState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Json<Envelope<QuestionPagePayload>>> {
    let page = page_of(query);

    let (selection, categories) = state
        .store
        .session(|conn| Ok((question_store::all(conn)?, category_store::label_map(conn)?)))
        .await?;

    let current = paginate(&selection, page);
    if current.is_empty() {
        debug!(page, total = selection.len(), "empty question page");
        return Err(ApiError::NotFound);
    }

    Ok(Json(Envelope::ok(QuestionPagePayload {
        questions: current.to_vec(),
        total_questions: selection.len(),
        categories,
        current_category: None,
    })))
}

async fn create_question_handler(
    State(state): State<SharedState>,
    body: Result<Json<NewQuestion>, JsonRejection>,
) -> ApiResult<Json<Envelope<CreatedPayload>>> {
    let new = json_body(body)?;
    let category = new.category;

    state
        .store
        .session(move |conn| question_store::insert(conn, &new))
        .await
        .map_err(|e| {
            warn!(
                error = %e,
                category,
                constraint = e.is_constraint_violation(),
                "question insert failed"
            );
            ApiError::Rejected(e)
        })?;

    info!(category, "question created");
    Ok(Json(Envelope::ok(CreatedPayload {})))
}

// Empty matches are a successful, empty page here, unlike the listings.
async fn search_questions_handler(
    State(state): State<SharedState>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<Envelope<QuestionListPayload>>> {
    let page = page_of(query);
    let SearchRequest { search_term } = json_body(body)?;

    let matches = state
        .store
        .session(move |conn| question_store::search(conn, &search_term))
        .await?;

    Ok(Json(Envelope::ok(QuestionListPayload {
        questions: paginate(&matches, page).to_vec(),
        total_questions: matches.len(),
        current_category: None,
    })))
}

async fn delete_question_handler(
    State(state): State<SharedState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Envelope<DeletedPayload>>> {
    let id = path_id(id)?;

    let deleted = state
        .store
        .session(move |conn| question_store::delete(conn, id))
        .await?;

    // Deleting an absent id still reports success.
    if deleted == 0 {
        debug!(id, "delete matched no question");
    } else {
        info!(id, "question deleted");
    }

    Ok(Json(Envelope::ok(DeletedPayload { id })))
}
