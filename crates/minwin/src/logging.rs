//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Backed by `env_logger`; verbosity is controlled through the `RUST_LOG`
/// environment variable. Call once at program start.
pub fn init() {
    env_logger::init();
}
