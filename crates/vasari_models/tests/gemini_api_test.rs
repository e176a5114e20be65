//! Live API tests. Run with: cargo test --package vasari_models --features api

use vasari_core::GenerationRequest;
use vasari_models::{GeminiClient, GeminiConfig};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_simple_generation() {
    dotenvy::dotenv().ok();
    let config = GeminiConfig::from_env().expect("GEMINI_API_KEY must be set for API tests");
    let client = GeminiClient::new(config).expect("client builds");

    let request = GenerationRequest::new("Say 'test' and nothing else.", "", false, false);

    let result = client.generate(&request).await.expect("API call succeeded");

    assert!(!result.text().is_empty());
    println!("Response: {:?}", result.text());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_structured_generation() {
    dotenvy::dotenv().ok();
    let config = GeminiConfig::from_env().expect("GEMINI_API_KEY must be set for API tests");
    let client = GeminiClient::new(config).expect("client builds");

    let request = GenerationRequest::new("What is 2+2?", "", false, true);

    let result = client.generate(&request).await.expect("API call succeeded");

    let report: serde_json::Value =
        serde_json::from_str(result.text()).expect("structured mode returns JSON");
    assert!(report.get("final_summary").is_some());
    println!("Report: {report}");
}
