//! Driver trait definitions for generation backends.

use async_trait::async_trait;
use vasari_core::{GenerationRequest, GenerationResult};
use vasari_error::VasariError;

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, VasariError>;

/// Trait for backends that turn a [`GenerationRequest`] into a
/// [`GenerationResult`].
///
/// The session layer is generic over this trait so the HTTP client can be
/// swapped for mocks in tests.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Performs one generation call sequence, including any retries the
    /// backend applies internally.
    async fn generate(&self, request: &GenerationRequest) -> DriverResult<GenerationResult>;
}
