//! Logging setup for the bomcfg binary
//!
//! Diagnostics go to stderr through `tracing-subscriber` so stdout stays
//! reserved for generated documents and JSON output. `RUST_LOG` overrides the
//! level picked from the CLI flags or configuration.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Verbosity;

/// Level for a configured verbosity, raised by each `-v` flag
pub fn level_for(verbosity: Verbosity, verbose_flags: u8) -> LevelFilter {
    let base: u8 = match verbosity {
        Verbosity::Quiet => 0,
        Verbosity::Normal => 1,
        Verbosity::Verbose => 2,
        Verbosity::Debug => 3,
    };

    match base.saturating_add(verbose_flags) {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(level: LevelFilter, json: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!json);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
