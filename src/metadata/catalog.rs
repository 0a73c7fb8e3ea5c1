use serde::{Deserialize, Serialize};
use super::Product;

/// Upper bound on catalog entries, checked only when adding.
pub const MAX_PRODUCTS: usize = 50;

/// Ordered, in-memory product list. Insertion order is kept and duplicate
/// names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.products.len() >= MAX_PRODUCTS
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Appends without checking the limit; callers enforce it.
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Position of the first product whose name matches case-insensitively.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.matches_name(name))
    }

    pub fn remove(&mut self, index: usize) -> Option<Product> {
        if index < self.products.len() {
            Some(self.products.remove(index))
        } else {
            None
        }
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}
