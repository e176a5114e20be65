//! Error types for the Vasari generation client.
//!
//! Each consumer crate gets its own error module: `gemini` for the provider
//! client and `session` for the session controller. The [`RetryableError`]
//! trait marks which provider failures the client may retry.

mod gemini;
mod session;

pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use session::{SessionError, SessionErrorKind};

/// Result type for provider client operations.
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Umbrella error for the public API surface.
///
/// Aggregates provider and session failures so callers hold a single error
/// type across the generate, resolve, and summarize seams.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum VasariError {
    /// Provider client failure (transport, status, extraction, exhaustion).
    #[display("{_0}")]
    Gemini(GeminiError),
    /// Session-local failure (structured parse, nothing to summarize).
    #[display("{_0}")]
    Session(SessionError),
}

/// Result type for the public API surface.
pub type VasariResult<T> = Result<T, VasariError>;
