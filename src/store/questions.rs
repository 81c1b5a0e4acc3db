//! Question accessor
//!
//! Filters supported: substring match on the question text, exact
//! category match, and exclusion of an id set.

use diesel::prelude::*;
use diesel::SqliteConnection;

use super::errors::StoreResult;
use super::model::{NewQuestion, Question};
use super::schema::questions;

/// All questions ordered by id
pub fn all(conn: &mut SqliteConnection) -> StoreResult<Vec<Question>> {
    let rows = questions::table
        .order(questions::id.asc())
        .select(Question::as_select())
        .load(conn)?;
    Ok(rows)
}

/// Questions whose text contains `term`, ignoring case.
///
/// Case folding is Unicode-aware, so `élégie` finds `Élégie`. The term
/// is matched literally; `%` and `_` carry no pattern meaning.
pub fn search(conn: &mut SqliteConnection, term: &str) -> StoreResult<Vec<Question>> {
    let needle = term.to_lowercase();
    let rows = all(conn)?
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect();
    Ok(rows)
}

/// Questions in the given category, ordered by id
pub fn by_category(conn: &mut SqliteConnection, category: i32) -> StoreResult<Vec<Question>> {
    let rows = questions::table
        .filter(questions::category.eq(category))
        .order(questions::id.asc())
        .select(Question::as_select())
        .load(conn)?;
    Ok(rows)
}

/// Quiz candidates: optionally restricted to one category, never
/// containing an id from `excluded`.
pub fn pool(
    conn: &mut SqliteConnection,
    category: Option<i32>,
    excluded: &[i32],
) -> StoreResult<Vec<Question>> {
    let mut query = questions::table
        .filter(questions::id.ne_all(excluded.to_vec()))
        .order(questions::id.asc())
        .select(Question::as_select())
        .into_boxed();

    if let Some(category) = category {
        query = query.filter(questions::category.eq(category));
    }

    Ok(query.load(conn)?)
}

/// Insert a new question row
pub fn insert(conn: &mut SqliteConnection, new: &NewQuestion) -> StoreResult<usize> {
    let inserted = diesel::insert_into(questions::table)
        .values(new)
        .execute(conn)?;
    Ok(inserted)
}

/// Delete by id, returning the number of rows removed
pub fn delete(conn: &mut SqliteConnection, id: i32) -> StoreResult<usize> {
    let deleted = diesel::delete(questions::table.find(id)).execute(conn)?;
    Ok(deleted)
}

/// Total number of questions
pub fn count(conn: &mut SqliteConnection) -> StoreResult<i64> {
    Ok(questions::table.count().get_result(conn)?)
}
