//! Slash command webhook server library.
//!
//! Answers chat-platform slash commands posted as forms, reports liveness,
//! and writes one access log line per request.

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod slash;

pub use config::ServerConfig;
pub use http::SlashServer;
pub use lifecycle::Shutdown;
