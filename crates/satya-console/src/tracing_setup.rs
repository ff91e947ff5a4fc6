//! Tracing initialization for the console.

use std::sync::Once;

use satya_core::config::defaults;
use satya_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber. Idempotent.
///
/// `log_level` accepts any `EnvFilter` directive, e.g.
/// `satya_session=debug,satya_transport=trace`. It has already been
/// layered from `SATYA_LOG` and `--log-level` by config loading; an
/// unparseable directive falls back to the default level.
///
/// Logs go to stderr so they never interleave with rendered panels.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(&config.log_level)
            .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_LEVEL));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json_logs {
            registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
