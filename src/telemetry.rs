//! Logging setup for the `portal` binary.

use tracing_subscriber::EnvFilter;

const DEBUG_LOG: &str = "/tmp/portal-debug.log";

/// Install the global subscriber. Logs go to stderr filtered by `RUST_LOG`
/// (default `info`); with `debug` they go to [`DEBUG_LOG`] at debug level.
pub fn init(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("portal debug log started: tail -f {DEBUG_LOG}");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }
    Ok(())
}
