//! Session state, response resolution, and the summarize action.

use tracing::{debug, instrument};
use vasari_core::{GenerationRequest, GenerationResult, ReasonedReport, ResolvedOutput};
use vasari_error::{SessionError, SessionErrorKind, VasariResult};
use vasari_interface::GenerationDriver;

/// Fixed system prompt for the summarize action.
pub const SUMMARIZE_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that creates concise, clear summaries.";

/// Instruction template wrapping the current response for summarization.
fn summarize_query(text: &str) -> String {
    format!(
        "Please provide a concise 2-3 sentence summary of the following text:\n\n{text}"
    )
}

/// Session controller owning the current-response state shared by the
/// primary and summarize actions.
///
/// Both actions take `&mut self`, so the write in [`resolve`](Session::resolve)
/// and the read in [`summarize`](Session::summarize) cannot interleave; the
/// hazard of a summarize racing an in-flight generation is closed by
/// ownership rather than by UI discipline.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current_response: Option<String>,
    current_system_prompt: String,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text the summarize action would operate on, if any.
    ///
    /// Set by [`resolve`](Session::resolve) on every successful resolution:
    /// the full response text in plain mode, the `final_summary` field in
    /// structured mode.
    pub fn current_response(&self) -> Option<&str> {
        self.current_response.as_deref()
    }

    /// The system prompt of the most recent action.
    pub fn current_system_prompt(&self) -> &str {
        &self.current_system_prompt
    }

    /// Clears the held response so a subsequent summarize fails fast.
    pub fn clear(&mut self) {
        self.current_response = None;
    }

    /// Runs the primary generation action: normalize the request, call the
    /// driver, resolve the result for the requested output mode.
    #[instrument(skip(self, driver, request))]
    pub async fn generate<D: GenerationDriver>(
        &mut self,
        driver: &D,
        request: GenerationRequest,
    ) -> VasariResult<ResolvedOutput> {
        let request = request.normalized();
        self.current_system_prompt = request.system_prompt().clone();

        let result = driver.generate(&request).await?;
        self.resolve(&result, request.structured_output_enabled())
    }

    /// Interprets a generation result according to the requested output
    /// mode and updates the current-response state.
    ///
    /// Plain mode passes the text through verbatim. Structured mode parses
    /// the text as a [`ReasonedReport`] and surfaces its `final_summary`,
    /// so a subsequent summarize acts on the human-readable conclusion
    /// rather than the structural wrapper. Sources pass through unchanged
    /// in both modes.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::StructuredParse`] when structured mode is
    /// requested and the text is not a conforming JSON document; the
    /// current-response state is left untouched on that path, and the
    /// caller should fall back to displaying the raw text alongside an
    /// error indicator.
    pub fn resolve(
        &mut self,
        result: &GenerationResult,
        structured_output_enabled: bool,
    ) -> VasariResult<ResolvedOutput> {
        if !structured_output_enabled {
            self.current_response = Some(result.text().clone());
            return Ok(ResolvedOutput::new(
                result.text().clone(),
                result.sources().clone(),
            ));
        }

        let report: ReasonedReport = serde_json::from_str(result.text()).map_err(|e| {
            SessionError::new(SessionErrorKind::StructuredParse(e.to_string()))
        })?;

        debug!(
            steps = report.reasoning_steps().len(),
            confidence = *report.confidence_score(),
            "Resolved structured report"
        );

        self.current_response = Some(report.final_summary().clone());
        Ok(ResolvedOutput::new(
            report.final_summary().clone(),
            result.sources().clone(),
        ))
    }

    /// Summarizes the current response through the same generation path.
    ///
    /// Issues a fresh plain-mode request (grounding and structured output
    /// both disabled) with the fixed summarization system prompt, then
    /// resolves it through the plain path, replacing the current response
    /// with the summary.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::NothingToSummarize`] when no response is held;
    /// no network call is made in that case.
    #[instrument(skip(self, driver))]
    pub async fn summarize<D: GenerationDriver>(
        &mut self,
        driver: &D,
    ) -> VasariResult<ResolvedOutput> {
        let current = match self.current_response.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                return Err(
                    SessionError::new(SessionErrorKind::NothingToSummarize).into(),
                );
            }
        };

        let request = GenerationRequest::new(
            summarize_query(current),
            SUMMARIZE_SYSTEM_PROMPT,
            false,
            false,
        );
        self.current_system_prompt = SUMMARIZE_SYSTEM_PROMPT.to_string();

        let result = driver.generate(&request).await?;
        self.resolve(&result, false)
    }
}
