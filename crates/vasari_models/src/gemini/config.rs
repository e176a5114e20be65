//! Configuration for the Gemini client.

use derive_getters::Getters;
use vasari_error::{GeminiError, GeminiErrorKind, GeminiResult};

/// Default public endpoint for the generative language API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini API configuration.
///
/// The API key is a static opaque credential; endpoint and model are
/// overridable for tests and self-hosted proxies.
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    api_key: String,
    #[builder(default = "DEFAULT_ENDPOINT.to_string()")]
    endpoint: String,
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
}

impl GeminiConfig {
    /// Creates a builder for GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Reads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when `GEMINI_API_KEY` is
    /// not set.
    pub fn from_env() -> GeminiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Ok(Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }
}
