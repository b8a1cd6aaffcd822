use serde::{Deserialize, Serialize};

/// A single stocked item.
///
/// The record carries no invariants of its own: presence and range checks
/// happen in [`crate::intake`] before a `Product` is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    /// Stock value held for this line (`price * quantity`)
    pub fn line_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
