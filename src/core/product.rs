//! # Product
//!
//! A registered inventory item. Products are only built by
//! [`validate`](crate::core::validation::validate), so every `Product` in the
//! store has a non-blank name and category, a positive finite price, and a
//! positive quantity.

/// A registered inventory item.
///
/// Fields are read through accessors; a `Product` can't be assembled from
/// outside the crate:
///
/// ```compile_fail
/// use stockpile::core::Product;
///
/// let product = Product {
///     name: String::new(),
///     category: "   ".to_string(),
///     unit_price: -5.0,
///     quantity: 0,
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) unit_price: f64,
    pub(crate) quantity: u32,
}

impl Product {
    pub(crate) fn new(name: String, category: String, unit_price: f64, quantity: u32) -> Self {
        Self {
            name,
            category,
            unit_price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Value of this line of stock: `unit_price × quantity`.
    pub fn line_value(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
