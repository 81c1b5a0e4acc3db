//! trivia - a trivia question and quiz API
//!
//! Serves categories and questions from SQLite over HTTP with
//! pagination, search, deletion, creation and a quiz mode.

pub mod api;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod quiz;
pub mod store;
