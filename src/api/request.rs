//! # Request Parsing
//!
//! Query strings and JSON bodies are parsed here so handlers only see
//! typed values or an [`ApiError`].

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Json, Path, Query};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::errors::{ApiError, ApiResult};

/// `?page=N`. Anything that is not an integer falls back to page 1.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Page number from the query string; an unparseable query means page 1.
pub fn page_of(query: Result<Query<PageQuery>, QueryRejection>) -> i64 {
    query.map(|Query(q)| q).unwrap_or_default().page()
}

/// Body of `POST /questions/search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Unwrap a JSON body, turning any rejection into an unprocessable entity.
pub fn json_body<T: DeserializeOwned>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))
}

/// Unwrap an integer path id. Ids that do not parse do not match the route.
pub fn path_id(id: Result<Path<i32>, PathRejection>) -> ApiResult<i32> {
    id.map(|Path(id)| id).map_err(|_| ApiError::NotFound)
}
