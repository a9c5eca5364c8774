//! Slash command subsystem.
//!
//! # Data Flow
//! ```text
//! POST /slash (form-encoded)
//!     → command.rs (SlashCommand, all fields optional)
//!     → verify.rs (TokenVerifier, presence only)
//!     → payload.rs (fixed SlashResponse)
//!     → JSON reply
//! ```
//!
//! Follow-up messages through `response_url` are not sent; every command is
//! answered inline.

pub mod command;
pub mod handlers;
pub mod payload;
pub mod verify;

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub use command::SlashCommand;
pub use payload::{Attachment, AttachmentField, SlashResponse};
pub use verify::{PresenceCheck, TokenVerifier};

/// Reasons a slash command is refused.
#[derive(Debug, thiserror::Error)]
pub enum SlashError {
    #[error("missing token")]
    MissingToken,

    #[error(transparent)]
    Form(#[from] FormRejection),
}

impl IntoResponse for SlashError {
    fn into_response(self) -> Response {
        match self {
            SlashError::MissingToken => StatusCode::BAD_REQUEST.into_response(),
            SlashError::Form(rejection) => rejection.into_response(),
        }
    }
}
