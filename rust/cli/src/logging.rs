//! Tracing setup for the `cardroom` binary.
//!
//! Engine logs go to stderr so stdout stays clean for command output.
//! `CARDROOM_LOG` takes an `EnvFilter` directive and wins over the
//! configured `log_level`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "CARDROOM_LOG";

/// Installs the global subscriber. Returns `false` when one is already set,
/// which happens when `run` is called more than once in a process.
pub fn init_logging(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact(),
    );

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
