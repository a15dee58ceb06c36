//! # abiba_core
//!
//! Core domain logic for Abiba.

pub mod completion;
pub mod logs;
pub mod simulation;
pub mod status;

/// Version reported in the server's startup banner.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
