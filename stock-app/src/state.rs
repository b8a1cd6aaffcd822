use stock_catalog::Inventory;
use crate::app_config::DisplayConfig;

/// Application state: owns the inventory for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub inventory: Inventory,
    pub display: DisplayConfig,
}

impl AppState {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            inventory: Inventory::new(),
            display,
        }
    }
}
