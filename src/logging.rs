//! Console logging setup for the binary

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter (`RUST_LOG` syntax)
pub const LOG_ENV_VAR: &str = "CHANGELOG_LOG";

/// Install a stderr logger, `info` unless [`LOG_ENV_VAR`] says otherwise
pub fn setup_logger() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let fmt = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt)
        .with(env_filter)
        .init();
}
