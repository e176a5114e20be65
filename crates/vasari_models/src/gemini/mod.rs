//! Gemini `generateContent` API integration.

mod client;
mod config;
pub mod conversions;
mod dto;

pub use client::{GeminiClient, MAX_ATTEMPTS};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_MODEL, GeminiConfig, GeminiConfigBuilder};
pub use dto::{
    Candidate, Content, ErrorBody, ErrorResponse, GenerateContentRequest,
    GenerateContentRequestBuilder, GenerateContentResponse, GenerationConfig,
    GroundingAttribution, GroundingMetadata, Part, ResponseContent, ResponsePart, Tool,
    WebSource,
};
