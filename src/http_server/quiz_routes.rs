//! Quiz HTTP Route
//!
//! `POST /quizzes` returns one random question the player has not seen.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::debug;

use crate::api::{json_body, ApiError, ApiResult, Envelope, QuizPayload};
use crate::quiz::{self, QuizRequest};
use crate::store::questions as question_store;

use super::state::SharedState;

/// Create quiz routes
pub fn quiz_routes(state: SharedState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz_handler))
        .with_state(state)
}

async fn play_quiz_handler(
    State(state): State<SharedState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<Json<Envelope<QuizPayload>>> {
    let QuizRequest {
        previous_questions,
        quiz_category,
    } = json_body(body)?;
    let category = quiz_category.filter();

    let pool = state
        .store
        .session(move |conn| question_store::pool(conn, category, &previous_questions))
        .await
        .map_err(ApiError::Rejected)?;

    let candidates = pool.len();
    let question = quiz::select(pool, &mut rand::thread_rng());
    debug!(
        ?category,
        candidates,
        chosen = ?question.as_ref().map(|q| q.id),
        "quiz question selected"
    );

    Ok(Json(Envelope::ok(QuizPayload { question })))
}
