use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `lebcodec=debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lebcodec=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
