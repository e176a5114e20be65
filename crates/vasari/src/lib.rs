//! Vasari: a grounded text-generation client.
//!
//! Submits a user-authored prompt to the Gemini `generateContent` endpoint,
//! optionally augmented with web-search grounding or a constrained output
//! schema, retries failures with exponential backoff, resolves the response
//! shape, and offers a summarize-the-last-result action over explicit
//! session state.
//!
//! # Examples
//!
//! ```no_run
//! use vasari::{GeminiClient, GeminiConfig, GenerationRequest, Session};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(GeminiConfig::from_env()?)?;
//! let mut session = Session::new();
//!
//! let request = GenerationRequest::builder()
//!     .user_query("What is the tallest building completed this year?")
//!     .grounding_enabled(true)
//!     .build()?;
//!
//! let output = session.generate(&client, request).await?;
//! println!("{}", output.text());
//! for (i, source) in output.sources().iter().enumerate() {
//!     println!("{}. {} <{}>", i + 1, source.title(), source.uri());
//! }
//!
//! let summary = session.summarize(&client).await?;
//! println!("{}", summary.text());
//! # Ok(())
//! # }
//! ```

mod session;

pub use session::{SUMMARIZE_SYSTEM_PROMPT, Session};
pub use vasari_core::{
    GenerationRequest, GenerationRequestBuilder, GenerationResult, ReasonedReport,
    ResolvedOutput, SourceAttribution, init_observability, output_schema,
};
pub use vasari_error::{
    GeminiError, GeminiErrorKind, SessionError, SessionErrorKind, VasariError, VasariResult,
};
pub use vasari_interface::{DriverResult, GenerationDriver};
pub use vasari_models::{GeminiClient, GeminiConfig, MAX_ATTEMPTS};
