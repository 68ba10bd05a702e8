//! # locbox-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the location API: `POST /locations` stores a JSON document,
//!   `GET /locations` returns every stored document as one JSON array
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//! - Emit one access-log event per request through `tracing`
//!
//! ## Dependency rule
//! Depends on `locbox-app` (for port traits and services) and `locbox-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod access_log;
pub mod api;
pub mod error;
pub mod router;
pub mod state;
