//! Tracing setup for the command-line front end.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `TALLY_LOG=tally_core=debug`.
pub const LOG_ENV: &str = "TALLY_LOG";

const DEFAULT_FILTER: &str = "tally=info,tally_core=info";

/// Installs a stderr `fmt` subscriber filtered by [`LOG_ENV`].
///
/// Falls back to `info` for this crate if the variable is unset or invalid.
/// Safe to call more than once, and a no-op if another global subscriber is
/// already installed.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
