//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware/request_log.rs (start timer)
//!     → route dispatch: /status, /slash
//!     → middleware/request_log.rs (one access log line via request.rs)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use request::{X_FORWARDED_FOR, X_REQUEST_ID};
pub use server::{AppState, ServerError, SlashServer};
