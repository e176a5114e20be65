//! HTTP client for the Gemini `generateContent` API.

use crate::gemini::config::GeminiConfig;
use crate::gemini::conversions;
use crate::gemini::dto::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_retry2::strategy::ExponentialBackoff;
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, error, instrument, warn};
use vasari_core::{GenerationRequest, GenerationResult};
use vasari_error::{GeminiError, GeminiErrorKind, GeminiResult, RetryableError, VasariError};
use vasari_interface::{DriverResult, GenerationDriver};

/// Total attempts for one generation call (1 initial + 4 retries).
pub const MAX_ATTEMPTS: usize = 5;

/// Gemini HTTP client with exponential-backoff retry.
///
/// One [`generate`](GeminiClient::generate) call performs exactly one
/// network call sequence: up to [`MAX_ATTEMPTS`] attempts with delays from
/// [`backoff_schedule`](GeminiClient::backoff_schedule) between them, then a
/// terminal [`GeminiErrorKind::RetriesExhausted`] wrapping the last cause.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: GeminiConfig) -> GeminiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(
            endpoint = %config.endpoint(),
            model = %config.model(),
            "Created Gemini client"
        );

        Ok(Self { client, config })
    }

    /// Delays applied before retry attempts 2 through 5: 2s, 4s, 8s, 16s.
    pub fn backoff_schedule() -> impl Iterator<Item = Duration> {
        ExponentialBackoff::from_millis(2)
            .factor(1000)
            .take(MAX_ATTEMPTS - 1)
    }

    /// Sends a generation request, retrying every failure category up to
    /// the attempt limit.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::RetriesExhausted`] wrapping the last
    /// underlying cause once all attempts fail. Per-attempt causes are
    /// transport errors, non-2xx statuses, and candidate extraction
    /// failures; none are treated as fatal short of exhaustion.
    #[instrument(skip(self, request), fields(model = %self.config.model()))]
    pub async fn generate(&self, request: &GenerationRequest) -> GeminiResult<GenerationResult> {
        let request = request.clone().normalized();
        let wire = conversions::to_wire_request(&request);
        let grounding_requested = request.grounding_enabled();

        let attempts = AtomicUsize::new(0);
        let outcome = Retry::spawn(Self::backoff_schedule(), || {
            let attempt = attempts.fetch_add(1, Ordering::Relaxed) + 1;
            let wire = &wire;
            async move {
                debug!(attempt, max_attempts = MAX_ATTEMPTS, "Sending generateContent request");
                self.attempt(wire, grounding_requested).await.map_err(|e| {
                    warn!(attempt, error = %e, retryable = e.is_retryable(), "Attempt failed");
                    if e.is_retryable() {
                        RetryError::transient(e)
                    } else {
                        RetryError::permanent(e)
                    }
                })
            }
        })
        .await;

        outcome.map_err(|last| {
            let attempts = attempts.load(Ordering::Relaxed);
            error!(attempts, error = %last, "Generation failed permanently");
            GeminiError::new(GeminiErrorKind::RetriesExhausted {
                attempts,
                last: Box::new(last.kind),
            })
        })
    }

    async fn attempt(
        &self,
        wire: &GenerateContentRequest,
        grounding_requested: bool,
    ) -> GeminiResult<GenerationResult> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.endpoint(),
            self.config.model(),
            self.config.api_key()
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(wire)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Network(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|envelope| envelope.error().message().clone())
                .unwrap_or(body);

            return Err(GeminiError::new(GeminiErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Network(e.to_string())))?;
        let wire_response: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| {
                warn!(error = %e, "Response body was not a generateContent payload");
                GeminiError::new(GeminiErrorKind::NoCandidate)
            })?;

        conversions::from_wire_response(&wire_response, grounding_requested)
    }

    /// Returns the configured model name.
    pub fn model_name(&self) -> &str {
        self.config.model()
    }
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> DriverResult<GenerationResult> {
        GeminiClient::generate(self, request)
            .await
            .map_err(VasariError::from)
    }
}
