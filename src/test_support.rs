//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::Intent;
use crate::core::inventory::InventoryStore;
use crate::core::product::Product;
use crate::core::state::Navigator;
use crate::core::validation::ProductForm;

/// Builds a product directly, skipping validation.
pub fn product(name: &str, category: &str, unit_price: f64, quantity: u32) -> Product {
    Product::new(name.to_string(), category.to_string(), unit_price, quantity)
}

pub fn form(name: &str, category: &str, price: &str, quantity: &str) -> ProductForm {
    ProductForm::new(name, category, price, quantity)
}

/// A navigator on the list screen over a store holding
/// Hammer (9.99 x 3) and Saw (15.0 x 2), registered in that order.
pub fn stocked() -> (Navigator, InventoryStore) {
    let mut nav = Navigator::new();
    let mut store = InventoryStore::new();
    nav.dispatch(&mut store, Intent::Submit(form("Hammer", "Tools", "9.99", "3")));
    nav.dispatch(&mut store, Intent::Back);
    nav.dispatch(&mut store, Intent::Submit(form("Saw", "Tools", "15", "2")));
    (nav, store)
}
