//! Field-keyed text encoding used to hand a [`Product`] from one screen to
//! another.

use crate::product::Product;

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Price {0} cannot be carried in a product payload")]
    NonFinitePrice(f64),

    #[error("Failed to encode product payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Malformed product payload: {0}")]
    Decode(#[source] serde_json::Error),
}

/// JSON has no representation for NaN or infinity, so such prices are
/// refused rather than silently written as `null`.
pub fn encode(product: &Product) -> Result<String, PayloadError> {
    if !product.price.is_finite() {
        return Err(PayloadError::NonFinitePrice(product.price));
    }
    serde_json::to_string(product).map_err(PayloadError::Encode)
}

pub fn decode(payload: &str) -> Result<Product, PayloadError> {
    serde_json::from_str(payload).map_err(PayloadError::Decode)
}
