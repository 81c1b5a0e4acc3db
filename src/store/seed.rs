//! Out-of-band seeding of categories and questions.
//!
//! Categories only ever enter the store through here.

use std::fs;
use std::path::Path;

use diesel::prelude::*;
use diesel::SqliteConnection;
use serde::Deserialize;
use tracing::info;

use super::errors::{StoreError, StoreResult};
use super::model::{Category, NewQuestion};
use super::questions;
use super::schema::categories;

const BUILTIN: &str = include_str!("../../data/seed.json");

/// Seed document: `{"categories": [...], "questions": [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<NewQuestion>,
}

impl SeedData {
    /// The data set bundled with the crate
    pub fn builtin() -> StoreResult<Self> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(content: &str) -> StoreResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| StoreError::Seed(format!("Invalid seed JSON: {}", e)))
    }

    /// Load a seed document from disk
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::Seed(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }
}

/// Rows inserted by one seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub questions: usize,
}

/// Insert seed rows.
///
/// Categories whose id already exists are left untouched. Questions are
/// only inserted into an empty question table so reseeding never
/// duplicates them.
pub fn seed(conn: &mut SqliteConnection, data: &SeedData) -> StoreResult<SeedReport> {
    let mut report = SeedReport::default();

    for category in &data.categories {
        report.categories += diesel::insert_or_ignore_into(categories::table)
            .values(category)
            .execute(conn)?;
    }

    if questions::count(conn)? == 0 {
        for question in &data.questions {
            report.questions += questions::insert(conn, question)?;
        }
    }

    info!(
        categories = report.categories,
        questions = report.questions,
        "seed applied"
    );
    Ok(report)
}
