use stock_catalog::{ListEntry, ProductDetails, ProductForm, StatisticsReport};
use tracing::{debug, info, instrument, warn};

use crate::error::AppError;
use crate::routes::{Route, RouteError};
use crate::state::AppState;

/// Validate a submitted form and append the product. On success the caller
/// moves on to the list.
#[instrument(skip(state))]
pub fn register(state: &mut AppState, form: &ProductForm) -> Result<Route, AppError> {
    let product = form.parse().map_err(|e| {
        warn!(error = %e, "Rejected product registration");
        AppError::from(e)
    })?;

    info!(
        name = %product.name,
        category = %product.category,
        price = product.price,
        quantity = product.quantity,
        "Product registered"
    );
    state.inventory.add(product);

    Ok(Route::List)
}

/// Register startup products; entries that fail intake are logged and
/// skipped. Returns how many were added.
pub fn seed(state: &mut AppState, forms: &[ProductForm]) -> usize {
    let mut added = 0;
    for form in forms {
        match register(state, form) {
            Ok(_) => added += 1,
            Err(e) => warn!(name = %form.name, error = %e, "Skipping seed product"),
        }
    }
    info!(added, skipped = forms.len() - added, "Seeded inventory");
    added
}

pub fn list(state: &AppState) -> Vec<ListEntry> {
    debug!(count = state.inventory.len(), "Building product list");
    state.inventory.iter().map(ListEntry::from).collect()
}

/// Route to the details screen for the product at `index`
#[instrument(skip(state))]
pub fn open_details(state: &AppState, index: usize) -> Result<Route, AppError> {
    let product = state
        .inventory
        .get(index)
        .ok_or(AppError::ProductNotFound(index))?;

    Ok(Route::Details(product.clone()))
}

/// Decode a details route path into the view data it carries
#[instrument]
pub fn details(path: &str) -> Result<ProductDetails, AppError> {
    match Route::parse(path)? {
        Route::Details(product) => Ok(ProductDetails::from(&product)),
        other => {
            warn!(route = ?other, "Not a details route");
            Err(RouteError::Unknown(path.to_string()).into())
        }
    }
}

pub fn statistics(state: &AppState) -> StatisticsReport {
    let summary = state.inventory.summary();
    debug!(
        products = summary.product_count,
        total_quantity = summary.total_quantity,
        total_value = summary.total_value,
        "Computed inventory statistics"
    );
    StatisticsReport::from(&summary)
}
