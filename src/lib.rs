//! Menu Catalog Service Library
//!
//! This library crate defines the core modules of the read-only menu API.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of four small subsystems:
//!
//! - **`catalog`**: The data layer. Loads the menu document (products,
//!   categories, restaurant metadata) from JSON once at startup and holds it
//!   immutable for the lifetime of the process. Loading is fail-open: a
//!   missing or corrupt document yields an empty catalog, never a crash.
//! - **`query`**: The read path. Pure filtering, lookup, and aggregation
//!   over the loaded catalog, plus the HTTP handlers that expose them.
//! - **`config`**: Environment-driven runtime settings (bind port, document
//!   path).
//! - **`error`**: The API error type and its mapping onto HTTP status codes
//!   and the uniform error body.

pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
