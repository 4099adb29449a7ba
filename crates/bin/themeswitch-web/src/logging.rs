//! Tracing subscriber writing to the browser console.

use tracing_subscriber::EnvFilter;
use tracing_web::MakeWebConsoleWriter;

use crate::config::LoggingConfig;

const FALLBACK_FILTER: &str = "themeswitch=info";

/// Install the global subscriber. Later calls keep the first subscriber.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));
    // Timestamps need a clock the wasm32 target doesn't expose; the console adds its own.
    let _ = tracing_subscriber::fmt()
        .with_writer(MakeWebConsoleWriter::new())
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .try_init();
}
