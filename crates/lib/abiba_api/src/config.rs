//! API server configuration.

use std::path::PathBuf;

use abiba_core::logs::LogSource;

/// Default append-only log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "abiba.log";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Reads a flag-style variable: unset, empty, `0`, `n`, `no`, `f`, `false`
/// and `off` (any case) are false, anything else is true.
fn flag_value(value: Option<String>) -> bool {
    match value {
        None => false,
        Some(v) => !matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "n" | "no" | "f" | "false" | "off"
        ),
    }
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// Directory holding the static pages and scripts.
    pub static_dir: PathBuf,
    /// Backing for `/api/logs`.
    pub log_source: LogSource,
    /// Include upstream error text in failed chat responses.
    pub expose_error_details: bool,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable               | Default          |
    /// |------------------------|------------------|
    /// | `BIND_ADDR`            | `127.0.0.1:5000` |
    /// | `STATIC_DIR`           | `static`         |
    /// | `EXPOSE_ERROR_DETAILS` | `true`           |
    /// | `VERCEL`               | unset (file logs)|
    /// | `ABIBA_LOG_FILE`       | `abiba.log`      |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let expose_error_details = match lookup("EXPOSE_ERROR_DETAILS") {
            None => true,
            set => flag_value(set),
        };
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            log_source: Self::log_source_for(
                flag_value(lookup("VERCEL")),
                lookup("ABIBA_LOG_FILE").map(PathBuf::from),
            ),
            expose_error_details,
        }
    }

    /// Picks the log source for a deployment.
    ///
    /// Constrained hosts get fabricated lines; everywhere else the file the
    /// server appends to is tailed.
    pub fn log_source_for(constrained: bool, log_file: Option<PathBuf>) -> LogSource {
        if constrained {
            LogSource::Constrained
        } else {
            LogSource::File {
                path: log_file.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            }
        }
    }

    /// Path of the log file to append to, if file logging is active.
    pub fn log_file(&self) -> Option<&std::path::Path> {
        match &self.log_source {
            LogSource::File { path } => Some(path),
            LogSource::Constrained => None,
        }
    }
}
