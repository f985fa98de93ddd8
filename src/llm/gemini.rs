//! Gemini client: non-streaming `generateContent` via Google AI API.
//!
//! Differences from the Vision and Places clients:
//! - API key goes in the `x-goog-api-key` header
//! - Text lives in `candidates[0].content.parts[*].text`, possibly split
//!   across several parts
//! - Token usage in `usageMetadata`

use super::provider::{ProviderInfo, TextModel};
use crate::config::Config;
use crate::error::{Error, Result};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const GEMINI_MAX_TOKENS: u32 = 8192;

/// Gemini 2.5 Flash pricing, per 1M tokens.
const INPUT_COST_PER_MILLION: f64 = 0.30;
const OUTPUT_COST_PER_MILLION: f64 = 2.50;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            api_key: config.gemini_api_key.clone(),
            model: config.model.clone(),
        }
    }

    pub fn info(&self) -> ProviderInfo {
        ProviderInfo::gemini(&self.model)
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.model)
    }
}

fn request_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [
            {
                "role": "user",
                "parts": [
                    {
                        "text": prompt
                    }
                ]
            }
        ],
        "generationConfig": {
            "maxOutputTokens": GEMINI_MAX_TOKENS,
            "temperature": 0.7
        }
    })
}

/// Concatenate every text part of the first candidate.
fn extract_gemini_text(json: &serde_json::Value) -> Option<String> {
    let parts = json
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();
    Some(text)
}

fn parse_response(json: &serde_json::Value) -> Result<String> {
    if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
        return Err(Error::upstream("Gemini", format!("prompt blocked: {}", reason)));
    }
    match extract_gemini_text(json) {
        Some(text) => Ok(text),
        None => {
            let finish = json["candidates"][0]["finishReason"]
                .as_str()
                .unwrap_or("no candidates");
            Err(Error::upstream("Gemini", format!("empty response ({})", finish)))
        }
    }
}

impl TextModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(Error::MissingApiKey("GEMINI_API_KEY"))?;

        log::info!("[LLM] Model: {} ({} prompt chars)", self.model, prompt.len());
        let start = std::time::Instant::now();

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("[LLM] Gemini API returned {}: {}", status, body);
            return Err(Error::upstream("Gemini", format!("HTTP {}", status)));
        }

        let json: serde_json::Value = response.json().await?;
        log::info!("[LLM] Response: {}ms", start.elapsed().as_millis());

        if let Some(usage) = json.get("usageMetadata") {
            let input_tokens = usage["promptTokenCount"].as_u64().unwrap_or(0);
            let output_tokens = usage["candidatesTokenCount"].as_u64().unwrap_or(0);
            let cost = (input_tokens as f64 * INPUT_COST_PER_MILLION
                + output_tokens as f64 * OUTPUT_COST_PER_MILLION)
                / 1_000_000.0;
            log::info!(
                "[LLM] Tokens in/out: {}/{}, estimated cost: ${:.6}",
                input_tokens,
                output_tokens,
                cost
            );
        }

        parse_response(&json)
    }
}
