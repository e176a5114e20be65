//! Gemini-specific error types and retry classification.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    MissingApiKey,
    /// Failed to create the HTTP client
    ClientCreation(String),
    /// Transport-level failure (connect, timeout, interrupted body)
    Network(String),
    /// HTTP error with status code and provider message
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message extracted from the provider error body
        message: String,
    },
    /// Response carried no candidates
    NoCandidate,
    /// First candidate carried no usable text content
    EmptyContent,
    /// Every attempt failed; wraps the last underlying cause
    RetriesExhausted {
        /// Number of attempts made before giving up
        attempts: usize,
        /// The failure observed on the final attempt
        last: Box<GeminiErrorKind>,
    },
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::MissingApiKey => {
                write!(f, "GEMINI_API_KEY environment variable not set")
            }
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Gemini client: {}", msg)
            }
            GeminiErrorKind::Network(msg) => write!(f, "Gemini request failed: {}", msg),
            GeminiErrorKind::HttpStatus {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GeminiErrorKind::NoCandidate => {
                write!(f, "Gemini response carried no candidates")
            }
            GeminiErrorKind::EmptyContent => {
                write!(f, "Gemini candidate carried no text content")
            }
            GeminiErrorKind::RetriesExhausted { attempts, last } => {
                write!(f, "Gave up after {} attempts, last error: {}", attempts, last)
            }
        }
    }
}

impl GeminiErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Every per-attempt failure category is retried identically, including
    /// ones that will deterministically fail again (4xx, malformed payloads).
    /// Only setup failures and the terminal exhaustion wrapper are exempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiErrorKind::Network(_) => true,
            GeminiErrorKind::HttpStatus { .. } => true,
            GeminiErrorKind::NoCandidate => true,
            GeminiErrorKind::EmptyContent => true,
            _ => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use vasari_error::{GeminiError, GeminiErrorKind, RetryableError};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpStatus {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// The generation client retries every per-attempt failure category
    /// without distinguishing transient from permanent causes; the backoff
    /// schedule itself is owned by the client.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GeminiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
