// Upstream catalog service with the new product interface

use serde::Deserialize;

/// A catalog entry as the upstream ships it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub name: String,
}

/// Errors raised while loading the upstream catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed catalog payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// The replacement service
///
/// Speaks Product, not the plain name strings the legacy client was
/// written against.
#[derive(Debug)]
pub struct CatalogService {
    products: Vec<Product>,
}

impl CatalogService {
    /// Decode a catalog from the JSON payload the upstream ships
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        let products = serde_json::from_str(payload)?;
        Ok(Self { products })
    }

    pub fn fetch_products(&self) -> &[Product] {
        &self.products
    }
}
