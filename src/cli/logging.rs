use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable overriding the log filter, e.g. `ANNOPIN_LOG=debug`.
pub const LOG_ENV_VAR: &str = "ANNOPIN_LOG";

/// Install the global `tracing` subscriber writing to stderr.
///
/// Parse diagnostics are logged at `info`, so they only show up with
/// `--verbose` or an explicit filter.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "info" } else { "warn" }));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| eprintln!("Error initializing the global logger: {err}"))
        .ok();
}
