//! Query Service Module
//!
//! The read side of the API: every operation is a pure function over the
//! loaded catalog, computed per request against the same immutable snapshot.
//! Nothing here suspends, blocks, or mutates shared state, so concurrent
//! requests need no coordination.
//!
//! ## Responsibilities
//! - **Filtering**: composable multi-predicate narrowing of the product list
//!   (category, price bounds, availability, spiciness, substring search).
//! - **Lookup**: retrieval by product id and by category name.
//! - **Aggregation**: per-category counts and catalog-wide statistics.
//! - **Ranking**: the capped, rating-ordered featured view.
//! - **API**: axum handlers mapping routes onto the operations above.
//!
//! ## Submodules
//! - **`engine`**: the pure query operations.
//! - **`filter`**: query-string validation and predicate matching.
//! - **`handlers`**: HTTP request handlers for the axum router.
//! - **`types`**: response envelopes (DTOs) for API communication.

pub mod engine;
pub mod filter;
pub mod handlers;
pub mod types;
