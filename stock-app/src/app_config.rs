use serde::Deserialize;
use std::env;
use stock_catalog::ProductForm;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    /// Products registered at startup, as raw form input
    #[serde(default)]
    pub seed: Vec<ProductForm>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

const DEFAULT_CURRENCY: &str = "R$";
const DEFAULT_FILTER: &str = "stock_app=info,stock_catalog=info";

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from("config", &run_mode)
    }

    /// Layer, in order: built-in defaults, `{dir}/default`, `{dir}/{run_mode}`,
    /// `{dir}/local`, then `STOCK__*` environment variables.
    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("display.currency_symbol", DEFAULT_CURRENCY)?
            .set_default("logging.filter", DEFAULT_FILTER)?
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg. `STOCK__DISPLAY__CURRENCY_SYMBOL=€`
            .add_source(config::Environment::with_prefix("STOCK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
