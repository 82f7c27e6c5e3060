//! # Inventory Store
//!
//! Single source of truth for registered products. Append-only: products
//! keep registration order and are never updated or removed.
//!
//! The total value is recomputed from the product list on every call.

use log::debug;

use crate::core::product::Product;

#[derive(Debug, Default)]
pub struct InventoryStore {
    products: Vec<Product>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated product.
    pub fn add(&mut self, product: Product) {
        debug!(
            "Store add: {} ({}), {} x {}",
            product.name, product.category, product.quantity, product.unit_price
        );
        self.products.push(product);
    }

    /// All products in registration order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Σ unit_price × quantity over every product. `0.0` when empty.
    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::line_value).sum()
    }
}
