//! # Trivia HTTP Server Module
//!
//! Combines the category, question and quiz routers into one Axum server.
//!
//! # Endpoints
//!
//! - `GET /categories`
//! - `GET /categories/{id}/questions`
//! - `GET /questions`, `POST /questions`
//! - `POST /questions/search`
//! - `DELETE /questions/{id}`
//! - `POST /quizzes`
//! - `GET /health`

pub mod category_routes;
pub mod config;
pub mod observability_routes;
pub mod question_routes;
pub mod quiz_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use server::{build_router, HttpServer};
pub use state::{SharedState, TriviaState};
