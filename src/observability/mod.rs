//! Observability for the trivia service
//!
//! Structured logging through `tracing`; request spans come from the
//! HTTP server's trace layer.

mod logger;

pub use logger::{init_logging, LogFormat, LoggingConfig};
