//! Blocking client for OpenAI-compatible `/chat/completions` endpoints.
//!
//! Local model servers and hosted APIs speak the same request shape, so one
//! client covers both. No retries: a failed request surfaces to the caller.

use std::time::Duration;

use serde_json::{json, Value};

use needle_core::{ChatMessage, CompletionService, NeedleError, NeedleResult};

use crate::config::InferenceConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

pub struct ChatClient {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    top_p: f32,
    max_tokens: Option<u32>,
}

impl ChatClient {
    pub fn new(cfg: &InferenceConfig, base_url: &str, model: &str) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: cfg.resolve_api_key(),
            model: cfg.resolve_model(model).to_string(),
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            max_tokens: cfg.max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, messages: &[ChatMessage]) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "top_p": self.top_p,
        });
        if let Some(max) = self.max_tokens {
            body["max_tokens"] = json!(max);
        }
        body
    }
}

impl CompletionService for ChatClient {
    fn complete(&self, messages: &[ChatMessage]) -> NeedleResult<String> {
        let response: Value = self
            .agent
            .post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(self.request_body(messages))
            .map_err(|e| NeedleError::Completion(format!("{}: {e}", self.endpoint)))?
            .into_json()
            .map_err(|e| NeedleError::Completion(format!("invalid response body: {e}")))?;
        message_content(&response)
    }
}

/// `choices[0].message.content` of a chat completion response.
fn message_content(response: &Value) -> NeedleResult<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            NeedleError::Completion(format!("response has no message content: {response}"))
        })
}
