//! Route path constants.

/// POST /api/chat — relay a user message to the model or the simulator.
pub const POST_API_CHAT: &str = "/api/chat";

/// GET /api/logs — recent log lines.
pub const GET_API_LOGS: &str = "/api/logs";

/// GET /api/status — static service status.
pub const GET_API_STATUS: &str = "/api/status";
