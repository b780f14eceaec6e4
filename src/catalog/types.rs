//! Catalog Data Types
//!
//! The records deserialized from the catalog document at startup. These are
//! the inputs to every query operation; nothing in the crate mutates them
//! after load.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single item on the menu.
///
/// Field names mirror the camelCase JSON source document (`spicyLevel`,
/// `reviewCount`), so the same shape appears on the wire in responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier across the whole collection.
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Expected to match one of the catalog's category names; the loader does
    /// not enforce this (data-quality assumption of the source document).
    pub category: String,
    pub price: f64,
    pub available: bool,
    pub spicy_level: u32,
    pub rating: f64,
    pub review_count: u32,
    /// Ordered as listed in the source document.
    pub ingredients: Vec<String>,
}

/// The complete dataset served by the API.
///
/// Built exactly once by the loader (or [`Catalog::empty`] when loading
/// fails), then shared behind an `Arc` with every request handler for the
/// lifetime of the process. Categories are an explicit list rather than
/// being derived from products, so a category can legitimately have zero
/// products.
///
/// Each top-level key is independently optional in the document: a sparse
/// document loads partially instead of failing the whole catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    /// Opaque restaurant metadata (name, hours, contact, ...) passed through
    /// to clients unmodified.
    pub restaurant_info: Value,
}

impl Catalog {
    /// The fail-open catalog: no products, no categories, `{}` for the
    /// restaurant record.
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            restaurant_info: Value::Object(Map::new()),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}
