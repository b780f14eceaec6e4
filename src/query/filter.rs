//! Product Filtering
//!
//! Turns the raw query string of the listing route into a validated filter
//! set and applies it. All supplied predicates must hold for a product to
//! pass (logical AND); unsupplied ones are no-ops.

use std::str::FromStr;

use serde::Deserialize;

use crate::catalog::types::Product;
use crate::error::ApiError;

/// Raw query-string input for the product listing route.
///
/// Every field arrives as an optional string so validation (and its error
/// messages) stays in this crate's hands instead of the framework's. Unknown
/// parameters are ignored by serde.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub available: Option<String>,
    pub spicy_level: Option<String>,
    pub search: Option<String>,
}

/// A validated, typed filter set.
#[derive(Debug, Default, Clone)]
pub struct ProductFilters {
    /// Case-insensitive exact match on `Product.category`.
    pub category: Option<String>,
    /// Inclusive lower bound on price.
    pub min_price: Option<f64>,
    /// Inclusive upper bound on price.
    pub max_price: Option<f64>,
    /// Equality on availability.
    pub available: Option<bool>,
    /// Keeps products whose spiciness is at most this level.
    pub spicy_level: Option<u32>,
    /// Case-insensitive substring over name, description, and ingredients.
    pub search: Option<String>,
}

impl ProductFilters {
    /// Validates raw query parameters. Malformed values are rejected with
    /// [`ApiError::InvalidParameter`] rather than degraded into silent
    /// match-nothing filters.
    pub fn parse(raw: ProductQuery) -> Result<Self, ApiError> {
        Ok(Self {
            category: raw.category,
            min_price: parse_bound("minPrice", raw.min_price)?,
            max_price: parse_bound("maxPrice", raw.max_price)?,
            available: parse_param("available", raw.available)?,
            spicy_level: parse_param("spicyLevel", raw.spicy_level)?,
            search: raw.search,
        })
    }

    /// True when `product` passes every supplied predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && !eq_ignore_case(&product.category, category)
        {
            return false;
        }
        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }
        if let Some(available) = self.available
            && product.available != available
        {
            return false;
        }
        if let Some(cap) = self.spicy_level
            && product.spicy_level > cap
        {
            return false;
        }
        if let Some(term) = &self.search
            && !matches_search(product, term)
        {
            return false;
        }

        true
    }
}

/// Case-insensitive string equality, Unicode-aware.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn matches_search(product: &Product, term: &str) -> bool {
    let needle = term.to_lowercase();

    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
        || product
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(&needle))
}

fn parse_param<T: FromStr>(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ApiError> {
    let Some(raw) = value else {
        return Ok(None);
    };

    raw.parse()
        .map(Some)
        .map_err(|_| ApiError::InvalidParameter { name, value: raw })
}

fn parse_bound(name: &'static str, value: Option<String>) -> Result<Option<f64>, ApiError> {
    let Some(raw) = value else {
        return Ok(None);
    };

    // "NaN" and "inf" parse as f64 but compare to nothing; they are rejected
    // like any other malformed bound.
    match raw.parse::<f64>() {
        Ok(bound) if bound.is_finite() => Ok(Some(bound)),
        _ => Err(ApiError::InvalidParameter { name, value: raw }),
    }
}
