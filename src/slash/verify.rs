//! Token verification.
//!
//! Only the presence of a token is checked. Comparing it against a shared
//! secret or a signing scheme is left to other [`TokenVerifier`]
//! implementations.

use crate::slash::SlashError;

/// Decides whether a request's token is acceptable.
pub trait TokenVerifier: Send + Sync + 'static {
    fn verify(&self, token: Option<&str>) -> Result<(), SlashError>;
}

/// Accepts any non-empty token.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceCheck;

impl TokenVerifier for PresenceCheck {
    fn verify(&self, token: Option<&str>) -> Result<(), SlashError> {
        match token {
            Some(token) if !token.is_empty() => Ok(()),
            _ => Err(SlashError::MissingToken),
        }
    }
}
