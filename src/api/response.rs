//! # Response Envelopes
//!
//! Successful routes answer `{"success": true, ...payload}`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::store::Question;

/// Category id -> label, ordered by id
pub type CategoryMap = BTreeMap<i32, String>;

/// Success envelope with the payload's fields inlined
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

/// `GET /categories`
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesPayload {
    pub categories: CategoryMap,
    pub current_category: Option<i32>,
}

/// `GET /questions`
#[derive(Debug, Clone, Serialize)]
pub struct QuestionPagePayload {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<i32>,
}

/// `POST /questions/search` and `GET /categories/{id}/questions`
#[derive(Debug, Clone, Serialize)]
pub struct QuestionListPayload {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i32>,
}

/// `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct DeletedPayload {
    pub id: i32,
}

/// `POST /questions`
#[derive(Debug, Clone, Serialize)]
pub struct CreatedPayload {}

/// `POST /quizzes`
#[derive(Debug, Clone, Serialize)]
pub struct QuizPayload {
    pub question: Option<Question>,
}
