//! Catalog Document Loading
//!
//! One-shot read of the JSON catalog document. The loader never errors out to
//! the caller: an unreadable or malformed document degrades to the empty
//! catalog and the service starts anyway, answering every query with empty
//! results instead of refusing to boot.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::Catalog;

/// Reads the catalog document at `path`, failing open to [`Catalog::empty`].
///
/// Entries are taken as-is; no validation beyond JSON deserialization is
/// applied, so any data-quality issues in the source document propagate into
/// the collections.
pub fn load(path: impl AsRef<Path>) -> Catalog {
    let path = path.as_ref();

    match read_document(path) {
        Ok(catalog) => {
            tracing::info!(
                "Loaded catalog from {}: {} products, {} categories",
                path.display(),
                catalog.products.len(),
                catalog.categories.len()
            );
            catalog
        }
        Err(e) => {
            tracing::error!("Failed to load catalog from {}: {:#}", path.display(), e);
            Catalog::empty()
        }
    }
}

fn read_document(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;

    Ok(catalog)
}
