//! Shared handler state

use std::sync::Arc;

use crate::store::Store;

/// State shared across every trivia route
#[derive(Debug, Clone)]
pub struct TriviaState {
    pub store: Store,
}

impl TriviaState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

/// Shared state type
pub type SharedState = Arc<TriviaState>;
