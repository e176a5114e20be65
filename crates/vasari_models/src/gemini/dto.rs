//! Wire types for the Gemini `generateContent` API.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single text part within a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Part {
    text: String,
}

impl Part {
    /// Creates a new text part.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A content block carrying ordered parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Content {
    parts: Vec<Part>,
}

impl Content {
    /// Creates a content block from a single text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::new(text)],
        }
    }
}

/// A tool capability attached to a request.
///
/// The only capability this client attaches is the web-search marker, which
/// lets the provider ground its answer in live search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    google_search: serde_json::Map<String, serde_json::Value>,
}

impl Tool {
    /// Creates the web-search tool marker (`{"google_search": {}}`).
    pub fn google_search() -> Self {
        Self {
            google_search: serde_json::Map::new(),
        }
    }
}

/// Generation tuning directives.
///
/// Only attached in structured mode, where the response MIME type is forced
/// to JSON and the fixed output schema is embedded as the required shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

impl GenerationConfig {
    /// Creates a structured-JSON directive embedding the given schema.
    pub fn structured_json(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        }
    }
}

/// Request body for `generateContent`.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    contents: Vec<Content>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Creates a new request body from its sections.
    pub fn new(
        contents: Vec<Content>,
        system_instruction: Option<Content>,
        tools: Option<Vec<Tool>>,
        generation_config: Option<GenerationConfig>,
    ) -> Self {
        Self {
            contents,
            system_instruction,
            tools,
            generation_config,
        }
    }

    /// Creates a builder for GenerateContentRequest.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// A single text part within a response content block.
///
/// `text` is absent for non-text parts (tool invocations, inline media),
/// which this client does not consume.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Content block of a response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

/// A web citation source inside a grounding attribution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct WebSource {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

/// One provider citation record for a grounded statement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GroundingAttribution {
    #[serde(default)]
    web: Option<WebSource>,
}

/// Attribution metadata attached to grounded candidates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    grounding_attributions: Vec<GroundingAttribution>,
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

/// Response body from `generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// Inner message of the provider error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Error envelope returned alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ErrorResponse {
    error: ErrorBody,
}
