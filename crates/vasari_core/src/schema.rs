//! The fixed structured-output shape for schema-constrained generation.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The structured report shape the provider is asked to produce.
///
/// Parsed loosely from the response text: field presence is enforced by
/// deserialization, but `confidence_score` is descriptive only and is not
/// range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ReasonedReport {
    /// Step-by-step reasoning toward the conclusion
    reasoning_steps: Vec<String>,
    /// Human-readable conclusion
    final_summary: String,
    /// Self-reported confidence, 0-100
    confidence_score: f64,
}

/// Returns the response schema attached to structured-output requests.
///
/// This is a constant shape, not user-configurable: an object with ordered
/// fields `reasoning_steps`, `final_summary`, and `confidence_score`.
pub fn output_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "reasoning_steps": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Step-by-step reasoning toward the conclusion"
            },
            "final_summary": {
                "type": "STRING",
                "description": "Human-readable conclusion"
            },
            "confidence_score": {
                "type": "NUMBER",
                "description": "Confidence in the answer from 0 to 100"
            }
        },
        "required": ["reasoning_steps", "final_summary", "confidence_score"],
        "propertyOrdering": ["reasoning_steps", "final_summary", "confidence_score"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_parses_from_conforming_json() {
        let text = r#"{"reasoning_steps":["a","b"],"final_summary":"Answer: 4","confidence_score":95}"#;
        let report: ReasonedReport = serde_json::from_str(text).expect("conforming report");
        assert_eq!(report.final_summary(), "Answer: 4");
        assert_eq!(report.reasoning_steps().len(), 2);
    }

    #[test]
    fn report_rejects_missing_summary() {
        let text = r#"{"reasoning_steps":[],"confidence_score":10}"#;
        assert!(serde_json::from_str::<ReasonedReport>(text).is_err());
    }

    #[test]
    fn schema_orders_fields() {
        let schema = output_schema();
        let ordering = schema["propertyOrdering"]
            .as_array()
            .expect("ordering present");
        assert_eq!(ordering.len(), 3);
        assert_eq!(ordering[1], "final_summary");
    }
}
