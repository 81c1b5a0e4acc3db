//! Row types for the trivia store.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::schema::{categories, questions};

/// A category row. `kind` maps to the `type` column.
#[derive(Queryable, Selectable, Insertable, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A question row, serialized as `{id, question, answer, category, difficulty}`.
#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Payload for a new question. Exactly these four fields are accepted.
#[derive(Insertable, Deserialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = questions)]
#[serde(deny_unknown_fields)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
