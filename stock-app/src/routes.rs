//! Screen addresses. The details route carries its product as an encoded
//! payload so the receiving screen needs no access to the inventory.

use stock_catalog::{payload, PayloadError, Product};

const REGISTER: &str = "register";
const LIST: &str = "list";
const DETAILS: &str = "details";
const STATISTICS: &str = "statistics";

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Register,
    List,
    Details(Product),
    Statistics,
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    Unknown(String),

    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl Route {
    pub fn path(&self) -> Result<String, RouteError> {
        let path = match self {
            Route::Register => REGISTER.to_string(),
            Route::List => LIST.to_string(),
            Route::Details(product) => format!("{}/{}", DETAILS, payload::encode(product)?),
            Route::Statistics => STATISTICS.to_string(),
        };
        Ok(path)
    }

    /// Inverse of [`Route::path`]. Everything after the first `/` of a
    /// details path is payload, so slashes inside product fields survive.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        match path.split_once('/') {
            Some((DETAILS, encoded)) => Ok(Route::Details(payload::decode(encoded)?)),
            Some(_) => Err(RouteError::Unknown(path.to_string())),
            None => match path {
                REGISTER => Ok(Route::Register),
                LIST => Ok(Route::List),
                STATISTICS => Ok(Route::Statistics),
                _ => Err(RouteError::Unknown(path.to_string())),
            },
        }
    }
}
