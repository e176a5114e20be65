//! Error types for session operations.

/// Error kinds for session operations.
///
/// These are never retried; they surface immediately to the caller, which
/// must leave the UI in a visible non-loading error state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// Structured response did not parse as the expected shape.
    #[display("Structured response did not match the expected shape: {_0}")]
    StructuredParse(String),
    /// Summarize was invoked with no current response to summarize.
    #[display("No response available to summarize")]
    NothingToSummarize,
}

/// Session error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    kind: SessionErrorKind,
    line: u32,
    file: &'static str,
}

impl SessionError {
    /// Create a new session error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SessionErrorKind {
        &self.kind
    }
}

impl<T> From<T> for SessionError
where
    T: Into<SessionErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
