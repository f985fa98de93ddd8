//! Text model trait: the one seam between the agent and a generative API.
//!
//! One prompt in, one text out. No streaming and no conversation state;
//! the agent carries everything it needs in the prompt itself.

use crate::error::Result;
use std::future::Future;

pub trait TextModel {
    /// Send `prompt` and return the model's full text response.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Provider metadata for startup logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub env_key: &'static str,
    pub model: String,
}

impl ProviderInfo {
    pub fn gemini(model: &str) -> Self {
        Self {
            id: "gemini",
            env_key: "GEMINI_API_KEY",
            model: model.to_string(),
        }
    }
}
