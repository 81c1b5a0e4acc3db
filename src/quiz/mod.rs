//! # Quiz Play
//!
//! Builds the candidate pool for one quiz round and picks the next
//! question from it.

mod selector;

pub use selector::{select, QuizCategory, QuizRequest, ANY_CATEGORY};
