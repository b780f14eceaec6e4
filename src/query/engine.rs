use crate::catalog::types::{Catalog, Product};

use super::filter::{ProductFilters, eq_ignore_case};
use super::types::{CatalogStats, CategoryCount};

/// Rating a product must reach to be surfaced as featured.
pub const FEATURED_MIN_RATING: f64 = 4.5;
/// Cap on the number of featured products returned.
pub const FEATURED_LIMIT: usize = 6;
/// Category name counted as a vegetarian option, exactly as it appears in
/// the source document.
pub const VEGETARIAN_CATEGORY: &str = "Vegetarian";

/// Applies the supplied filters as a logical AND, preserving catalog order.
pub fn filter_products<'a>(
    products: &'a [Product],
    filters: &ProductFilters,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| filters.matches(product))
        .collect()
}

/// Exact integer lookup; identifiers are assumed unique, first match wins.
pub fn product_by_id(products: &[Product], id: u32) -> Option<&Product> {
    products.iter().find(|product| product.id == id)
}

/// All products whose category equals `name`, compared case-insensitively.
pub fn products_in_category<'a>(products: &'a [Product], name: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| eq_ignore_case(&product.category, name))
        .collect()
}

/// Product count per known category name, in the order the category list
/// was loaded.
///
/// Counting compares case-sensitively against the explicit category list,
/// unlike the ad-hoc `category` filter and the category route. The dataset's
/// canonical casing is the contract here.
pub fn category_counts(catalog: &Catalog) -> Vec<CategoryCount> {
    catalog
        .categories
        .iter()
        .map(|name| CategoryCount {
            name: name.clone(),
            count: catalog
                .products
                .iter()
                .filter(|product| product.category == *name)
                .count(),
        })
        .collect()
}

/// Products rated at least [`FEATURED_MIN_RATING`], best first, at most
/// [`FEATURED_LIMIT`] of them.
pub fn featured_products(products: &[Product]) -> Vec<&Product> {
    let mut featured: Vec<&Product> = products
        .iter()
        .filter(|product| product.rating >= FEATURED_MIN_RATING)
        .collect();

    // Stable sort: equal ratings keep their catalog order.
    featured.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    featured.truncate(FEATURED_LIMIT);

    featured
}

/// Aggregates over the whole catalog in one pass per figure.
///
/// An empty catalog yields the zero strings `"0.00"` / `"0.0"` for the
/// averages rather than `NaN`.
pub fn catalog_stats(catalog: &Catalog) -> CatalogStats {
    let products = &catalog.products;

    let average_price = mean(products.iter().map(|product| product.price));
    let average_rating = mean(products.iter().map(|product| product.rating));

    CatalogStats {
        total_products: products.len(),
        total_categories: catalog.categories.len(),
        average_price: format!("{:.2}", average_price),
        average_rating: format!("{:.1}", average_rating),
        total_reviews: products
            .iter()
            .map(|product| u64::from(product.review_count))
            .sum(),
        available_products: products.iter().filter(|product| product.available).count(),
        vegetarian_options: products
            .iter()
            .filter(|product| product.category == VEGETARIAN_CATEGORY)
            .count(),
        spicy_options: products
            .iter()
            .filter(|product| product.spicy_level > 0)
            .count(),
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len = values.len();
    if len == 0 {
        return 0.0;
    }

    values.sum::<f64>() / len as f64
}
