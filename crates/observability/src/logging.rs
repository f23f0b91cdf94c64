//! Tracing subscriber initialization.
//!
//! Filtering comes from `RUST_LOG` (default `info`). Output is JSON lines with
//! timestamps unless `STOCKROOM_LOG_FORMAT=pretty` asks for human-readable text.

use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FORMAT: &str = "STOCKROOM_LOG_FORMAT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Unknown values fall back to JSON.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }

    pub fn from_env() -> Self {
        std::env::var(ENV_LOG_FORMAT)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Initialize logging for the process using the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(LogFormat::from_env(), "info");
}

/// Initialize with an explicit format and a fallback filter used when
/// `RUST_LOG` is unset or invalid.
pub fn init_with(format: LogFormat, default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
}
