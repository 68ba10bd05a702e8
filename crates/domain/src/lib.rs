//! # locbox-domain
//!
//! Pure domain model for the locbox location store.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`LocationId`](id::LocationId) key and the
//!   error conventions shared by every layer
//! - Define **Locations**: opaque JSON documents kept exactly as the client
//!   sent them
//! - Own the single piece of input checking the system does: a location must
//!   be syntactically valid JSON
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod location;
