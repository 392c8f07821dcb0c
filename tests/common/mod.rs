use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by rri and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To enable debug level logging:
///   RUST_LOG=DEBUG
///
/// Or to log only the wire parser:
///   RUST_LOG=rri::base::field=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
