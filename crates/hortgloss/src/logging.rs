use std::env;
use std::io;

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const VERBOSE_ENV: &str = "HORTGLOSS_VERBOSE";

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
    if verbose {
        debug!("verbose logging enabled");
    }
}

pub fn env_flag() -> bool {
    env::var(VERBOSE_ENV)
        .map(|value| parse_bool(value.trim()))
        .unwrap_or(false)
}

pub(crate) fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
