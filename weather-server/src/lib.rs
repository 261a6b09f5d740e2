//! HTTP layer for the global weather API.
//!
//! This crate focuses on:
//! - Routing and query extraction
//! - Translating core errors into `{"detail": ...}` responses
//! - CORS and optional static front-end serving

pub mod routes;

pub use routes::router;
