pub mod app_config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app_config::Config;
pub use error::AppError;
pub use routes::Route;
pub use state::AppState;
