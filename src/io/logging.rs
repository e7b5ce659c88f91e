//! Log backend setup

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level used when `RUST_LOG` is not set
pub const fn default_level(quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install `env_logger`, letting `RUST_LOG` override the default level
///
/// Calling it more than once keeps the first logger.
pub fn init_logging(quiet: bool) {
    let mut builder = Builder::new();
    builder
        .filter_level(default_level(quiet))
        .parse_env(Env::default())
        .format_timestamp(None)
        .format_target(false);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
