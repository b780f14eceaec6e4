//! Query API Types
//!
//! Response envelopes for the HTTP layer. Every success body carries
//! `success: true` plus the derived view; listing bodies also report the
//! match count so clients need not measure `data` themselves. Error bodies
//! live in [`crate::error`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::types::Product;

/// Envelope for product listings (ad-hoc filters and featured).
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Product>,
}

/// Envelope for the single-product route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub success: bool,
    pub data: Product,
}

/// Envelope for the category route; echoes the requested category name
/// verbatim, casing and all.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryProductsResponse {
    pub success: bool,
    pub category: String,
    pub count: usize,
    pub data: Vec<Product>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub data: Vec<CategoryCount>,
}

/// A category name with the number of products currently filed under it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Envelope for the opaque restaurant record, passed through unmodified.
#[derive(Debug, Serialize, Deserialize)]
pub struct RestaurantInfoResponse {
    pub success: bool,
    pub data: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    pub data: CatalogStats,
}

/// Derived figures over the whole catalog.
///
/// The averages are pre-rounded decimal strings (two places for price, one
/// for rating) so clients render them as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,
    pub total_categories: usize,
    pub average_price: String,
    pub average_rating: String,
    pub total_reviews: u64,
    pub available_products: usize,
    pub vegetarian_options: usize,
    pub spicy_options: usize,
}
