use serde::{Deserialize, Serialize};
use crate::product::Product;

/// Aggregate snapshot of the inventory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub product_count: usize,
    pub total_quantity: u64,
    pub total_value: f64,
}

/// In-memory, append-only product store.
///
/// Entries keep their insertion order and are never removed or mutated.
/// The store is owned by whoever needs it; there is no shared global list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Append a product
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of `price * quantity` over every entry; 0 when empty
    pub fn total_value(&self) -> f64 {
        // `sum` over an empty f64 iterator yields -0.0
        self.products.iter().map(Product::line_value).fold(0.0, |acc, v| acc + v)
    }

    /// Sum of units over every entry; 0 when empty
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity)).sum()
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            product_count: self.len(),
            total_quantity: self.total_quantity(),
            total_value: self.total_value(),
        }
    }
}

impl Extend<Product> for Inventory {
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        self.products.extend(iter);
    }
}

impl FromIterator<Product> for Inventory {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}
