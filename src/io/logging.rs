//! Logger initialization for the command-line front end

use std::sync::Once;

/// Logger configuration
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "mondrian=debug"). When absent, `RUST_LOG` is consulted before falling
/// back to `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter directive, overrides `RUST_LOG`
    pub env_filter: Option<String>,
    /// Level used when neither an explicit filter nor `RUST_LOG` is set
    pub default_level: log::LevelFilter,
    /// Controls ANSI coloring of log lines
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolve the filter directive this configuration would install
    pub fn resolved_filter(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| self.default_level.to_string().to_lowercase())
    }
}

static INIT: Once = Once::new();

/// Install the global logger once
///
/// Subsequent calls are ignored, so tests and the binary may both call it.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&config.resolved_filter());
        builder.write_style(config.write_style);
        // Another logger may already be installed by an embedding application
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
