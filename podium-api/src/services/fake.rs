//! In-memory fake of the analysis service
//!
//! `FakeAnalyzeService` answers with a canned payload, records every
//! forwarded text, and can be switched into a failure mode to exercise
//! the proxy's error path.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

use super::analyze::{AnalyzeError, AnalyzeService};

pub struct FakeAnalyzeService {
    response: Value,
    fail_with: Mutex<Option<String>>,
    requests: Mutex<Vec<String>>,
}

impl FakeAnalyzeService {
    pub fn new() -> Self {
        Self::with_response(json!({
            "sentiment": "neutral",
            "summary": "",
            "topics": [],
        }))
    }

    /// Fake answering every call with `response`
    pub fn with_response(response: Value) -> Self {
        Self {
            response,
            fail_with: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Make every subsequent analyze call fail with `message`
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    /// Texts forwarded so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for FakeAnalyzeService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyzeService for FakeAnalyzeService {
    async fn analyze(&self, text: &str) -> Result<Value, AnalyzeError> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(AnalyzeError::Network(message));
        }

        self.requests.lock().unwrap().push(text.to_string());
        Ok(self.response.clone())
    }
}
