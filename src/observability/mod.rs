//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Process startup:
//!     → logging.rs (tracing subscriber, env filter)
//!
//! Every finished request (see http::middleware::request_log):
//!     → record.rs (AccessRecord, ordered name=value fields)
//!     → sink.rs (LogSink: tracing in production, memory in tests)
//! ```

pub mod logging;
pub mod record;
pub mod sink;

pub use record::AccessRecord;
pub use sink::{LogSink, MemorySink, TracingSink, ACCESS_TARGET};
