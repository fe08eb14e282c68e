//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "SCORECARD_CHECK_LOG";

/// Initialize the tracing subscriber on stderr.
///
/// Reads `SCORECARD_CHECK_LOG` for the filter, e.g.
/// `SCORECARD_CHECK_LOG=scorecard_check::application=debug`.
/// Falls back to `scorecard_check=warn`, or `scorecard_check=debug` when
/// `verbose` is set. Calling it more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "scorecard_check=debug"
        } else {
            "scorecard_check=warn"
        };
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(verbose),
            )
            .with(filter)
            .init();
    });
}
