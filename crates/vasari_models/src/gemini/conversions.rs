//! Conversions between core types and Gemini wire types.

use crate::gemini::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Tool,
};
use vasari_core::{GenerationRequest, GenerationResult, SourceAttribution, output_schema};
use vasari_error::{GeminiError, GeminiErrorKind};

/// Builds the wire request for a generation request.
///
/// Pure function of the request fields:
/// - the user query and system instruction form the base payload (an empty
///   system prompt is omitted rather than sent as an empty block),
/// - grounding attaches the web-search tool,
/// - structured output attaches the JSON response directive with the fixed
///   schema, and wins over grounding if both flags are somehow still set.
pub fn to_wire_request(request: &GenerationRequest) -> GenerateContentRequest {
    let system_instruction = if request.system_prompt().is_empty() {
        None
    } else {
        Some(Content::from_text(request.system_prompt().clone()))
    };

    let (tools, generation_config) = if request.structured_output_enabled() {
        (None, Some(GenerationConfig::structured_json(output_schema())))
    } else if request.grounding_enabled() {
        (Some(vec![Tool::google_search()]), None)
    } else {
        (None, None)
    };

    GenerateContentRequest::new(
        vec![Content::from_text(request.user_query().clone())],
        system_instruction,
        tools,
        generation_config,
    )
}

/// Normalizes a wire response into a [`GenerationResult`].
///
/// Takes the first candidate and its first text part; maps grounding
/// attributions to sources when grounding was requested, keeping only
/// entries that carry both `uri` and `title`, in provider order.
///
/// # Errors
///
/// [`GeminiErrorKind::NoCandidate`] when the candidate list is empty,
/// [`GeminiErrorKind::EmptyContent`] when the first candidate has no
/// non-empty text part.
pub fn from_wire_response(
    response: &GenerateContentResponse,
    grounding_requested: bool,
) -> Result<GenerationResult, GeminiError> {
    let candidate = response
        .candidates()
        .first()
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::NoCandidate))?;

    let text = candidate
        .content()
        .as_ref()
        .and_then(|content| content.parts().first())
        .and_then(|part| part.text().as_deref())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyContent))?;

    let sources = if grounding_requested {
        candidate
            .grounding_metadata()
            .as_ref()
            .map(|metadata| {
                metadata
                    .grounding_attributions()
                    .iter()
                    .filter_map(|attribution| {
                        let web = attribution.web().as_ref()?;
                        match (web.uri().as_ref(), web.title().as_ref()) {
                            (Some(uri), Some(title)) => {
                                Some(SourceAttribution::new(uri.clone(), title.clone()))
                            }
                            _ => None,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    Ok(GenerationResult::new(text, sources))
}
