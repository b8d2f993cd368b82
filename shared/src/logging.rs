use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Filter used when `RUST_LOG` is unset: parser step failures from the
/// workspace crates, nothing from elsewhere.
pub const DEFAULT_TEST_DIRECTIVES: &str = "warn,abnf=debug,uri=debug,http11=debug";

/// Installs a test-writer subscriber for the current test binary.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_DIRECTIVES));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::NONE)
        .with_test_writer()
        .try_init();
}
