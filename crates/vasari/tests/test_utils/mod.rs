//! Test utilities for Vasari session tests.
//!
//! Provides a scripted mock driver so session behavior can be exercised
//! without network access.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use vasari::{
    DriverResult, GenerationDriver, GenerationRequest, GenerationResult, VasariError,
};

/// Scripted driver: pops queued results in order and records every request
/// it receives.
pub struct MockDriver {
    responses: Mutex<VecDeque<DriverResult<GenerationResult>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockDriver {
    /// A driver that answers every call with the given plain text.
    pub fn with_text(text: &str) -> Self {
        Self::with_results(vec![Ok(GenerationResult::new(text, Vec::new()))])
    }

    /// A driver scripted with an explicit result sequence.
    pub fn with_results(results: Vec<DriverResult<GenerationResult>>) -> Self {
        Self {
            responses: Mutex::new(results.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of generate calls received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    /// The most recent request received, if any.
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().expect("requests lock").last().cloned()
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, request: &GenerationRequest) -> DriverResult<GenerationResult> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| {
                Ok(GenerationResult::new("unscripted response", Vec::new()))
            })
    }
}

/// Convenience constructor for scripted errors.
pub fn scripted_error(err: VasariError) -> DriverResult<GenerationResult> {
    Err(err)
}
