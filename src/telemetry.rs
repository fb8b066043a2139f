use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr log subscriber. Safe to call more than once.
///
/// Diagnostics go to stderr so the demo transcript on stdout stays intact;
/// `RUST_LOG=pattern_demos=debug` shows cache hits, fallbacks and so on.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
