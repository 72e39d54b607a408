use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Output goes to stderr
/// so stdout only carries the flight times.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
