//! Logging Setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` wins when set;
//! otherwise the configured level applies to this crate's targets and to
//! `tower_http`. Output goes to stderr so rendered pages stay clean on stdout.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::LoggingConfig;

/// Targets the configured level applies to
const TARGETS: [&str; 3] = ["octofit", "octofit_api", "tower_http"];

/// Filter directives for a configured level, e.g. `octofit=info,...`
pub fn filter_directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directives(&config.level)))
        .unwrap_or_else(|_| EnvFilter::new(filter_directives("info")))
}

/// Install the subscriber; `format = "json"` selects JSON lines
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TryInitError> {
    let json = config.format.eq_ignore_ascii_case("json");

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .try_init()
}
