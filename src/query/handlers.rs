use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde_json::{Value, json};

use crate::catalog::types::Catalog;
use crate::error::ApiError;

use super::engine;
use super::filter::{ProductFilters, ProductQuery};
use super::types::{
    CategoryListResponse, CategoryProductsResponse, ProductListResponse, ProductResponse,
    RestaurantInfoResponse, StatsResponse,
};

/// Root discovery document: the operations this service answers and where.
pub async fn handle_index() -> Json<Value> {
    Json(json!({
        "success": true,
        "service": "menu-catalog",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "products": "/api/products?category=&minPrice=&maxPrice=&available=&spicyLevel=&search=",
            "productById": "/api/products/:id",
            "productsByCategory": "/api/products/category/:category",
            "featured": "/api/products/featured",
            "categories": "/api/categories",
            "restaurant": "/api/restaurant",
            "stats": "/api/stats"
        }
    }))
}

pub async fn handle_list_products(
    Extension(catalog): Extension<Arc<Catalog>>,
    Query(raw): Query<ProductQuery>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let filters = ProductFilters::parse(raw)?;
    let matches = engine::filter_products(&catalog.products, &filters);

    tracing::debug!(
        "Product listing matched {} of {} products",
        matches.len(),
        catalog.products.len()
    );

    Ok(Json(ProductListResponse {
        success: true,
        count: matches.len(),
        data: matches.into_iter().cloned().collect(),
    }))
}

pub async fn handle_get_product(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id: u32 = raw_id.parse().map_err(|_| ApiError::InvalidParameter {
        name: "id",
        value: raw_id,
    })?;

    let product = engine::product_by_id(&catalog.products, id)
        .ok_or_else(|| ApiError::not_found(format!("Product {}", id)))?;

    Ok(Json(ProductResponse {
        success: true,
        data: product.clone(),
    }))
}

pub async fn handle_products_by_category(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(category): Path<String>,
) -> Result<Json<CategoryProductsResponse>, ApiError> {
    let matches = engine::products_in_category(&catalog.products, &category);

    // An unknown (or empty) category is a NotFound, unlike an ad-hoc filter
    // that happens to match nothing.
    if matches.is_empty() {
        return Err(ApiError::not_found(format!("Category '{}'", category)));
    }

    Ok(Json(CategoryProductsResponse {
        success: true,
        category,
        count: matches.len(),
        data: matches.into_iter().cloned().collect(),
    }))
}

pub async fn handle_list_categories(
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        success: true,
        data: engine::category_counts(&catalog),
    })
}

pub async fn handle_featured_products(
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Json<ProductListResponse> {
    let featured = engine::featured_products(&catalog.products);

    Json(ProductListResponse {
        success: true,
        count: featured.len(),
        data: featured.into_iter().cloned().collect(),
    })
}

pub async fn handle_restaurant_info(
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Json<RestaurantInfoResponse> {
    Json(RestaurantInfoResponse {
        success: true,
        data: catalog.restaurant_info.clone(),
    })
}

pub async fn handle_stats(Extension(catalog): Extension<Arc<Catalog>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        success: true,
        data: engine::catalog_stats(&catalog),
    })
}
