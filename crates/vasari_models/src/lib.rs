//! Provider integrations for the Vasari generation client.
//!
//! Currently one backend: the Gemini `generateContent` REST API, with
//! web-search grounding and schema-constrained output support.

mod gemini;

pub use gemini::{
    Candidate, Content, DEFAULT_ENDPOINT, DEFAULT_MODEL, ErrorBody, ErrorResponse, GeminiClient,
    GeminiConfig, GeminiConfigBuilder, GenerateContentRequest, GenerateContentRequestBuilder,
    GenerateContentResponse, GenerationConfig, GroundingAttribution, GroundingMetadata,
    MAX_ATTEMPTS, Part, ResponseContent, ResponsePart, Tool, WebSource, conversions,
};
