//! Result types from generation calls.

use serde::{Deserialize, Serialize};

/// A provider-supplied citation record for a grounded statement.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct SourceAttribution {
    /// Source URI the citation links to
    #[new(into)]
    uri: String,
    /// Human-readable title used as link text
    #[new(into)]
    title: String,
}

/// The normalized result of one successful generation call.
///
/// `sources` is empty unless grounding was requested and the provider
/// returned attribution metadata; attributions missing either field are
/// dropped before this type is constructed.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct GenerationResult {
    /// Response text exactly as the provider returned it
    #[new(into)]
    text: String,
    /// Web attributions in provider order
    sources: Vec<SourceAttribution>,
}

/// A presentation-ready value produced by the response resolver.
///
/// `text` is the display text for the requested output mode; `sources` pass
/// through from the generation result unchanged. Callers render one citation
/// entry per source, 1-indexed, with `title` as link text and `uri` as
/// target.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct ResolvedOutput {
    /// Display text for the requested output mode
    #[new(into)]
    text: String,
    /// Web attributions in provider order
    sources: Vec<SourceAttribution>,
}
