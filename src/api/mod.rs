//! # Trivia API Module
//!
//! Envelopes, error mapping, request parsing and pagination shared by
//! every route.

pub mod errors;
pub mod pagination;
pub mod request;
pub mod response;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use pagination::{page_window, paginate, QUESTIONS_PER_PAGE};
pub use request::{json_body, page_of, path_id, PageQuery, SearchRequest};
pub use response::{
    CategoriesPayload, CategoryMap, CreatedPayload, DeletedPayload, Envelope,
    QuestionListPayload, QuestionPagePayload, QuizPayload,
};
