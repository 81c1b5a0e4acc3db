//! Category accessor

use std::collections::BTreeMap;

use diesel::prelude::*;
use diesel::SqliteConnection;

use super::errors::StoreResult;
use super::model::Category;
use super::schema::categories;

/// All categories ordered by id
pub fn all(conn: &mut SqliteConnection) -> StoreResult<Vec<Category>> {
    let rows = categories::table
        .order(categories::id.asc())
        .select(Category::as_select())
        .load(conn)?;
    Ok(rows)
}

/// Categories as an id -> label mapping, ordered by id
pub fn label_map(conn: &mut SqliteConnection) -> StoreResult<BTreeMap<i32, String>> {
    Ok(all(conn)?.into_iter().map(|c| (c.id, c.kind)).collect())
}
