//! # locbox-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters implement
//!   (driven/outbound port): `LocationRepository`, insert & full scan
//! - Define the **use-case** driven by the HTTP adapter (inbound port):
//!   `LocationService`, record a location under a fresh key, list all
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `locbox-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
