//! Shared types for the Member QA daemon and CLI.

pub mod answer;
pub mod api;
pub mod message;

/// Crate version, embedded in health responses and CLI output.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where CLI clients look for the daemon when nothing else is configured.
pub const DEFAULT_DAEMON_URL: &str = "http://127.0.0.1:8080";
