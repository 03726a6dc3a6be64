//! Logger bootstrap for the `loomcss` binary.
//!
//! Filtering is controlled through the `LOOMCSS_LOG` environment variable,
//! defaulting to warnings so validation notes stay visible without flooding
//! normal runs.

use std::sync::Once;

use env_logger::Env;

static INIT: Once = Once::new();

/// Initialize the process-wide logger. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(Env::new().filter_or("LOOMCSS_LOG", "warn"))
            .format_timestamp(None)
            .init();
    });
}
