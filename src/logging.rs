//! Logging setup for the binary

use crate::config::LOG_ENV;
use env_logger::{Builder, Env};

/// Initialize logging with a filter taken from the `WORDLE_LOG` environment
/// variable. Defaults to `warn` if the variable is not set.
///
/// Calling this more than once is harmless.
pub fn init_logging() {
    let _ = Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
