use dioxus::prelude::*;
use tracing::{info, warn, Level};
use trendwatch_wasm::app::App;
use trendwatch_wasm::config::Config;

fn main() {
    let config = Config::from_env();

    // Fall back to info so a bad build-time override never blanks the console.
    let (level, level_err) = match config.logging.level() {
        Ok(level) => (level, None),
        Err(e) => (Level::INFO, Some(e)),
    };
    dioxus_logger::init(level).expect("failed to init logger");
    if let Some(e) = level_err {
        warn!(error = %e, "using default log level");
    }

    info!(
        endpoint = %config.scraper.endpoint,
        "trendwatch v{} starting",
        env!("CARGO_PKG_VERSION")
    );
    launch(App);
}
