//! Static service status payload.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Layout of the `uptime` field.
pub const UPTIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub const NEURO_CORE_VERSION: &str = "v3.2.0";

/// Body of `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub status: String,
    pub neuro_core: String,
    pub finacle_sync: String,
    /// Wall-clock time the payload was produced.
    pub uptime: String,
}

impl StatusPayload {
    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            status: "online".to_string(),
            neuro_core: NEURO_CORE_VERSION.to_string(),
            finacle_sync: "active".to_string(),
            uptime: now.format(UPTIME_FORMAT).to_string(),
        }
    }

    pub fn now() -> Self {
        Self::at(Local::now())
    }
}
