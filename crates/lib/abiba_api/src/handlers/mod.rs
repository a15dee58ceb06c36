//! Request handlers.

pub mod chat;
pub mod logs;
pub mod status;
