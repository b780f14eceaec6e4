//! Catalog Module Tests
//!
//! Validates document loading, the fail-open policy, and the serde shape of
//! the catalog records.
//!
//! ## Test Scopes
//! - **Loader**: well-formed, sparse, corrupt, and missing documents.
//! - **Types**: camelCase wire mapping of `Product` and defaults of `Catalog`.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::catalog::loader;
    use crate::catalog::types::{Catalog, Product};

    fn document_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write document");
        file
    }

    // ============================================================
    // LOADER TESTS - well-formed documents
    // ============================================================

    #[test]
    fn test_load_full_document() {
        let file = document_file(
            r#"{
                "products": [
                    {
                        "id": 1,
                        "name": "Paneer Tikka",
                        "description": "Char-grilled paneer skewers",
                        "category": "Vegetarian",
                        "price": 11.5,
                        "available": true,
                        "spicyLevel": 2,
                        "rating": 4.6,
                        "reviewCount": 88,
                        "ingredients": ["paneer", "yogurt", "spices"]
                    }
                ],
                "categories": ["Vegetarian", "Meat"],
                "restaurantInfo": {"name": "Casa Aroma", "phone": "555-0102"}
            }"#,
        );

        let catalog = loader::load(file.path());

        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.categories, vec!["Vegetarian", "Meat"]);

        let product = &catalog.products[0];
        assert_eq!(product.id, 1);
        assert_eq!(product.spicy_level, 2);
        assert_eq!(product.review_count, 88);
        assert_eq!(product.ingredients.len(), 3);

        assert_eq!(catalog.restaurant_info["name"], "Casa Aroma");
    }

    #[test]
    fn test_load_sparse_document_fills_defaults() {
        // Only products supplied; the other collections default to empty.
        let file = document_file(
            r#"{
                "products": []
            }"#,
        );

        let catalog = loader::load(file.path());

        assert!(catalog.products.is_empty());
        assert!(catalog.categories.is_empty());
        assert!(
            catalog.restaurant_info.as_object().unwrap().is_empty(),
            "Missing restaurantInfo should default to an empty object"
        );
    }

    #[test]
    fn test_load_ignores_unknown_top_level_keys() {
        let file = document_file(
            r#"{
                "categories": ["Drinks"],
                "schemaVersion": 3,
                "exportedAt": "2026-01-11"
            }"#,
        );

        let catalog = loader::load(file.path());

        assert_eq!(catalog.categories, vec!["Drinks"]);
    }

    // ============================================================
    // LOADER TESTS - fail-open policy
    // ============================================================

    #[test]
    fn test_load_missing_file_yields_empty_catalog() {
        let catalog = loader::load("/nonexistent/path/menu.json");

        assert!(catalog.products.is_empty());
        assert!(catalog.categories.is_empty());
        assert_eq!(
            catalog.restaurant_info,
            serde_json::json!({}),
            "Fail-open catalog should carry an empty object, not null"
        );
    }

    #[test]
    fn test_load_corrupt_document_yields_empty_catalog() {
        let file = document_file(r#"{"products": [{"id": "#);

        let catalog = loader::load(file.path());

        assert!(catalog.products.is_empty());
        assert!(catalog.categories.is_empty());
    }

    #[test]
    fn test_load_type_mismatch_yields_empty_catalog() {
        // A document whose entries do not fit the schema is treated the same
        // as any other parse failure: absorbed, never raised.
        let file = document_file(r#"{"products": [{"id": "one"}]}"#);

        let catalog = loader::load(file.path());

        assert!(catalog.products.is_empty());
    }

    // ============================================================
    // TYPES TESTS - wire shape
    // ============================================================

    #[test]
    fn test_product_uses_camel_case_on_the_wire() {
        let product = Product {
            id: 7,
            name: "Mango Lassi".to_string(),
            description: "Chilled yogurt drink".to_string(),
            category: "Drinks".to_string(),
            price: 4.25,
            available: true,
            spicy_level: 0,
            rating: 4.9,
            review_count: 41,
            ingredients: vec!["mango".to_string(), "yogurt".to_string()],
        };

        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["spicyLevel"], 0);
        assert_eq!(json["reviewCount"], 41);
        assert!(json.get("spicy_level").is_none());

        let restored: Product = serde_json::from_value(json).unwrap();
        assert_eq!(restored, product);
    }

    #[test]
    fn test_empty_catalog_shape() {
        let catalog = Catalog::empty();

        assert!(catalog.products.is_empty());
        assert!(catalog.categories.is_empty());
        assert!(catalog.restaurant_info.is_object());
    }
}
