use stock_app::{handlers, AppState, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    stock_app::telemetry::init(&config.logging.filter);

    tracing::info!(seed = config.seed.len(), "Starting stock tracker");

    let mut state = AppState::new(config.display.clone());
    handlers::seed(&mut state, &config.seed);

    for entry in handlers::list(&state) {
        tracing::info!("{}", entry.label());
    }

    let report = handlers::statistics(&state);
    for line in report.lines(&state.display.currency_symbol) {
        tracing::info!("{}", line);
    }

    Ok(())
}
