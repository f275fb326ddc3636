//! Catalog
//!
//! In-memory holder for the product list fetched from the backend at page
//! load. No behavior beyond holding data, lookup, and filtering; a failed
//! refresh simply never calls [`Catalog::replace`], leaving the previous
//! state intact.

use rustc_hash::FxHashMap;

use crate::products::{Category, Product, ProductId};

/// The loaded product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole catalog with a freshly fetched product list.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id, position))
            .collect();
        self.products = products;
    }

    /// Looks up a product by identity.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|position| self.products.get(*position))
    }

    /// All products in backend order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products in the given category.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.category == category)
    }

    /// Products that can currently be ordered.
    pub fn in_stock(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.in_stock)
    }

    /// Number of products loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
