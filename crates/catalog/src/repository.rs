use std::collections::HashSet;

use thiserror::Error;

use dealcart_core::ProductId;

use crate::product::Product;

/// Errors raised while loading the catalog. These are startup-time failures;
/// once a repository exists it cannot fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
}

/// The immutable product catalog.
///
/// Holds the fixed ordered sequence of products, loaded once by an external
/// loader before the controllers come alive. Never mutated for the life of
/// the process; every filter pass re-reads it in source order.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    products: Vec<Product>,
}

impl ProductRepository {
    /// Build a repository from an already-ordered product list.
    ///
    /// The only validation performed is identity uniqueness; malformed
    /// numeric fields are tolerated and absorbed downstream by the discount
    /// clamp.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from its JSON source (an ordered array of products).
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::from_products(products)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Distinct category labels in catalog order.
    ///
    /// This is the category input boundary's fixed choice set; the `All`
    /// sentinel is prepended by the boundary, not stored on products.
    pub fn category_labels(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|product| product.category.as_str())
            .filter(|label| seen.insert(*label))
            .collect()
    }
}
