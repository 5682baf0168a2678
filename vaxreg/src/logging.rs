//! Diagnostics for the registry binary.
//!
//! stdout belongs to the command session: each command's reply lines, in the
//! chosen language, and nothing else, so scripted input gives reproducible
//! output. Everything the registry logs goes to stderr instead. Session start
//! and end are logged at `info`. Per-command detail such as rejected commands
//! and ignored lines is at `debug`. The out-of-memory stop is at `warn`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or unparsable: only the fatal stop shows.
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. `RUST_LOG=vaxreg=debug` traces each command.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
