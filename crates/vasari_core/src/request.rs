//! Request types for generation calls.

use serde::{Deserialize, Serialize};

/// A single generation request.
///
/// Created fresh per user action and never mutated after construction.
/// Grounding and structured output are mutually exclusive; callers should
/// pass requests through [`GenerationRequest::normalized`] before handing
/// them to a client.
///
/// # Examples
///
/// ```
/// use vasari_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .user_query("What is 2+2?")
///     .system_prompt("You are a terse arithmetic assistant.")
///     .build()
///     .expect("Valid request");
///
/// assert!(!request.grounding_enabled());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// The user-authored prompt text
    user_query: String,
    /// System instruction sent alongside the query (may be empty)
    #[builder(default)]
    system_prompt: String,
    /// Whether to attach the web-search grounding tool
    #[builder(default)]
    #[getter(skip)]
    grounding_enabled: bool,
    /// Whether to force a schema-constrained JSON response
    #[builder(default)]
    #[getter(skip)]
    structured_output_enabled: bool,
}

impl GenerationRequest {
    /// Creates a new request with the given query and mode flags.
    pub fn new(
        user_query: impl Into<String>,
        system_prompt: impl Into<String>,
        grounding_enabled: bool,
        structured_output_enabled: bool,
    ) -> Self {
        Self {
            user_query: user_query.into(),
            system_prompt: system_prompt.into(),
            grounding_enabled,
            structured_output_enabled,
        }
    }

    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Whether the web-search grounding tool is requested.
    pub fn grounding_enabled(&self) -> bool {
        self.grounding_enabled
    }

    /// Whether a schema-constrained JSON response is requested.
    pub fn structured_output_enabled(&self) -> bool {
        self.structured_output_enabled
    }

    /// True when the user query is non-empty after trimming.
    ///
    /// Validation is the caller's responsibility; clients send the query
    /// verbatim.
    pub fn has_user_query(&self) -> bool {
        !self.user_query.trim().is_empty()
    }

    /// Applies the mutual-exclusion rule between grounding and structured
    /// output: structured mode silently wins when both flags are set.
    pub fn normalized(mut self) -> Self {
        if self.structured_output_enabled && self.grounding_enabled {
            self.grounding_enabled = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_clears_grounding_when_structured_wins() {
        let request = GenerationRequest::new("q", "", true, true).normalized();
        assert!(!request.grounding_enabled());
        assert!(request.structured_output_enabled());
    }

    #[test]
    fn normalized_preserves_single_flag() {
        let grounded = GenerationRequest::new("q", "", true, false).normalized();
        assert!(grounded.grounding_enabled());

        let structured = GenerationRequest::new("q", "", false, true).normalized();
        assert!(structured.structured_output_enabled());
    }

    #[test]
    fn has_user_query_rejects_whitespace() {
        assert!(!GenerationRequest::new("   ", "", false, false).has_user_query());
        assert!(GenerationRequest::new("hi", "", false, false).has_user_query());
    }
}
