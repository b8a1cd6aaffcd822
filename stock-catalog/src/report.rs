use serde::Serialize;
use crate::inventory::InventorySummary;
use crate::product::Product;

/// One row of the product list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub quantity: u32,
}

impl ListEntry {
    pub fn label(&self) -> String {
        format!("{} ({} units)", self.name, self.quantity)
    }
}

impl From<&Product> for ListEntry {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            quantity: product.quantity,
        }
    }
}

/// Everything the details screen shows for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetails {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl ProductDetails {
    pub fn lines(&self, currency: &str) -> Vec<String> {
        vec![
            format!("Name: {}", self.name),
            format!("Category: {}", self.category),
            format!("Price: {}", format_money(currency, self.price)),
            format!("Quantity in stock: {} units", self.quantity),
        ]
    }
}

impl From<&Product> for ProductDetails {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            quantity: product.quantity,
        }
    }
}

/// Inventory statistics screen data
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub total_value: f64,
    pub total_quantity: u64,
}

impl StatisticsReport {
    pub fn formatted_total_value(&self, currency: &str) -> String {
        format_money(currency, self.total_value)
    }

    pub fn formatted_total_quantity(&self) -> String {
        format!("{} units", self.total_quantity)
    }

    pub fn lines(&self, currency: &str) -> Vec<String> {
        vec![
            format!("Total stock value: {}", self.formatted_total_value(currency)),
            format!("Total quantity of products: {}", self.formatted_total_quantity()),
        ]
    }
}

impl From<&InventorySummary> for StatisticsReport {
    fn from(summary: &InventorySummary) -> Self {
        Self {
            total_value: summary.total_value,
            total_quantity: summary.total_quantity,
        }
    }
}

fn format_money(currency: &str, amount: f64) -> String {
    format!("{} {:.2}", currency, amount)
}
