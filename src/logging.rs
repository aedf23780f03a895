//! Tracing subscriber setup for the binary.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `level`. Calling this twice is harmless;
/// the second installation is ignored.
pub fn init_logging(level: &str, json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = if json {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        Registry::default().with(env_filter).with(json_layer).try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false);
        Registry::default().with(env_filter).with(fmt_layer).try_init()
    };

    if result.is_ok() {
        tracing::debug!(level, json, "logging initialized");
    }
}
