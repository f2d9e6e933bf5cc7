use tracing_subscriber::EnvFilter;

/// Install the console subscriber. Progress and diagnostics go to stderr so
/// that stdout carries only the answer blocks.
///
/// The level defaults to `info` and follows `RUST_LOG` when set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
