//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with shell output. The level comes
//! from `--log-level`; `FOLIO_LOG` can refine it with `EnvFilter` directives
//! (e.g. `FOLIO_LOG=folio_repl::session=trace`).

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Environment variable holding extra filter directives.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Install the global subscriber. `Silent` installs nothing.
pub fn init(level: LogLevel) {
    let Some(level) = level.to_tracing_level() else {
        return;
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    // A subscriber may already be installed (e.g. by an embedding host).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .try_init();
}
