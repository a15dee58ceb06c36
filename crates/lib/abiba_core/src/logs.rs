//! Log views served by `/api/logs`.
//!
//! Two sources exist and exactly one is chosen per deployment:
//!
//! - [`LogSource::File`] tails the append-only log file the server writes.
//! - [`LogSource::Constrained`] fabricates a short status trail for hosts
//!   without a writable filesystem. It never reads real log state.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeDelta};
use thiserror::Error;

/// Timestamp layout shared by the file writer and fabricated lines.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Maximum number of lines returned from the log file.
pub const TAIL_LINES: usize = 50;

/// Returned instead of lines when the log file does not exist.
pub const NOT_FOUND_SENTINEL: &str = "Log file not found.";

/// Messages of the fabricated trail, oldest first.
const FABRICATED_MESSAGES: &[&str] = &[
    "System active on serverless node.",
    "Neuro-Core v3.2.0 online.",
    "AI Brain: cognitive relay connected.",
    "Status: Optimized for Serverless Execution",
];

/// Number of lines in the fabricated trail.
pub const FABRICATED_LINES: usize = FABRICATED_MESSAGES.len();

#[derive(Debug, Error)]
pub enum LogReadError {
    #[error("Failed to read log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where `/api/logs` gets its lines from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    File { path: PathBuf },
    Constrained,
}

impl LogSource {
    pub async fn read(&self) -> Result<Vec<String>, LogReadError> {
        match self {
            LogSource::File { path } => tail_file(path).await,
            LogSource::Constrained => Ok(fabricated_lines(Local::now())),
        }
    }
}

/// Formats one line the way the server's file writer does.
pub fn format_line(at: DateTime<Local>, level: &str, message: &str) -> String {
    format!("{} [{level}] {message}", at.format(LOG_TIMESTAMP_FORMAT))
}

/// Last [`TAIL_LINES`] lines of `path`, oldest first, each trimmed.
async fn tail_file(path: &Path) -> Result<Vec<String>, LogReadError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(vec![NOT_FOUND_SENTINEL.to_string()]);
        }
        Err(source) => {
            return Err(LogReadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    Ok(tail_lines(&contents, TAIL_LINES))
}

fn tail_lines(contents: &str, limit: usize) -> Vec<String> {
    let lines: Vec<&str> = contents.lines().collect();
    let start = lines.len().saturating_sub(limit);
    lines[start..]
        .iter()
        .map(|line| line.trim().to_string())
        .collect()
}

/// Fabricated trail ending at `now`, one second apart.
pub fn fabricated_lines(now: DateTime<Local>) -> Vec<String> {
    FABRICATED_MESSAGES
        .iter()
        .enumerate()
        .map(|(i, message)| {
            let seconds_ago = (FABRICATED_LINES - 1 - i) as i64;
            format_line(now - TimeDelta::seconds(seconds_ago), "INFO", message)
        })
        .collect()
}
