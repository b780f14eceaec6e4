//! Catalog Module
//!
//! Owns the immutable dataset behind every query: the product collection,
//! the explicit category list, and the opaque restaurant record.
//!
//! ## Lifecycle
//! The loader runs exactly once at process start. Its result (full, partial
//! from a sparse document, or the empty fail-open catalog) is wrapped in an
//! `Arc` and handed to the HTTP layer. Nothing is ever written to it again,
//! which is why the query layer needs no locking.
//!
//! ## Submodules
//! - **`loader`**: one-shot JSON document reading with the fail-open policy.
//! - **`types`**: the `Product` record and the `Catalog` aggregate.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;
