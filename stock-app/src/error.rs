use stock_catalog::IntakeError;
use crate::routes::RouteError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("No product at position {0}")]
    ProductNotFound(usize),
}
