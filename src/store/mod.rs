//! # Trivia Store
//!
//! SQLite persistence for categories and questions through Diesel.
//! The store owns all persisted state; the service keeps nothing between
//! requests beyond the connection pool.

pub mod categories;
pub mod connection;
pub mod errors;
pub mod model;
pub mod questions;
pub mod schema;
pub mod seed;

pub use connection::{create_pool, ensure_schema, DbPool, Store};
pub use errors::{StoreError, StoreResult};
pub use model::{Category, NewQuestion, Question};
pub use seed::{seed, SeedData, SeedReport};
