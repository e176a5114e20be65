//! Core data types for the Vasari generation client.
//!
//! Defines the request and result model shared by the provider client and
//! the session layer, the fixed structured-output schema, and tracing
//! initialization.

mod observability;
mod request;
mod result;
mod schema;

pub use observability::init_observability;
pub use request::{GenerationRequest, GenerationRequestBuilder};
pub use result::{GenerationResult, ResolvedOutput, SourceAttribution};
pub use schema::{ReasonedReport, output_schema};
