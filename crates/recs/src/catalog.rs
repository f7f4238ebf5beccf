//! Product catalog and purchase history
//!
//! The catalog is loaded once and then only read. Product ids are validated
//! and must be unique.

use crate::types::{Product, PurchaseHistory};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use storefront_core::error::Result;
use storefront_core::{validate_product_id, StorefrontError};
use tracing::info;

/// Products plus purchase history
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
    purchase_history: PurchaseHistory,
}

/// On-disk catalog format
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    purchase_history: PurchaseHistory,
}

impl Catalog {
    /// Build a catalog, rejecting empty, malformed, or duplicate product ids
    pub fn new(products: Vec<Product>, purchase_history: PurchaseHistory) -> Result<Self> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            validate_product_id(&product.id)?;
            if index.insert(product.id.clone(), position).is_some() {
                return Err(StorefrontError::validation_field(
                    format!("Duplicate product id: {}", product.id),
                    "product_id",
                ));
            }
        }

        Ok(Self {
            products,
            index,
            purchase_history,
        })
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.products, file.purchase_history)
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;

        info!(
            path = %path.display(),
            products = catalog.products.len(),
            users = catalog.purchase_history.user_count(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&position| &self.products[position])
    }

    pub fn purchase_history(&self) -> &PurchaseHistory {
        &self.purchase_history
    }
}
