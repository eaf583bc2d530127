//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Honors `RUST_LOG`; falls back to `default_level` when it is unset.
/// Safe to call more than once (later calls are ignored).
pub fn init(default_level: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .try_init();
}

/// Initialize logging for tests (captured by the test harness)
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
