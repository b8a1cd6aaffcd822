pub mod product;
pub mod inventory;
pub mod intake;
pub mod payload;
pub mod report;

pub use product::Product;
pub use inventory::{Inventory, InventorySummary};
pub use intake::{FormField, IntakeError, ProductForm};
pub use payload::PayloadError;
pub use report::{ListEntry, ProductDetails, StatisticsReport};
