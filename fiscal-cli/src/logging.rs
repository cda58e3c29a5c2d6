use tracing_subscriber::EnvFilter;

/// Initializes logging: INFO by default, RUST_LOG overrides, output on
/// stderr so piped command output stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
