//! Caller-facing operations.
//!
//! `Curio` owns the configuration and the three service clients and
//! exposes the four per-domain operations a web layer or the CLI calls.
//! Each one returns an `Envelope`; errors never escape past here.

use crate::agent::Agent;
use crate::config::Config;
use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::llm::{GeminiClient, TextModel};
use crate::pipeline::{self, AnalysisPayload};
use crate::places::{GooglePlacesClient, PlacesLookup};
use crate::vision::{GoogleVisionClient, VisionService};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Shown as the subject when an upload could not be analysed at all.
pub const ANALYSIS_FAILED: &str = "Analysis Failed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub subject_name: String,
    pub result_payload: Value,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn ok(subject_name: impl Into<String>, result_payload: Value) -> Self {
        Self {
            subject_name: subject_name.into(),
            result_payload,
            success: true,
            error: None,
        }
    }

    pub fn failure(subject_name: impl Into<String>, result_payload: Value, error: &Error) -> Self {
        Self {
            subject_name: subject_name.into(),
            result_payload,
            success: false,
            error: Some(error.to_string()),
        }
    }
}

pub struct Curio<M = GeminiClient, V = GoogleVisionClient, P = GooglePlacesClient> {
    config: Config,
    model: M,
    vision: V,
    places: P,
}

impl Curio {
    /// Build the Google-backed service from configuration. All clients
    /// share one HTTP connection pool and the configured timeout.
    pub fn from_config(config: Config) -> Result<Self> {
        let http = config.http_client()?;
        let model = GeminiClient::new(&config, http.clone());
        let vision = GoogleVisionClient::new(&config, http.clone());
        let places = GooglePlacesClient::new(&config, http);
        log::info!("[STARTUP] Text model: {:?}", model.info());
        Ok(Self::with_clients(config, model, vision, places))
    }
}

impl<M: TextModel, V: VisionService, P: PlacesLookup> Curio<M, V, P> {
    pub fn with_clients(config: Config, model: M, vision: V, places: P) -> Self {
        Self {
            config,
            model,
            vision,
            places,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Upload bytes → identified subject.
    pub async fn analyze_upload(&self, domain: Domain, bytes: &[u8]) -> Envelope {
        match pipeline::analyze_upload(&self.vision, domain, bytes).await {
            Ok(resolution) => {
                let payload = AnalysisPayload::new(domain, resolution);
                let subject = payload.subject_name.clone();
                match serde_json::to_value(&payload) {
                    Ok(value) => Envelope::ok(subject, value),
                    Err(e) => Envelope::failure(subject, Value::Null, &e.into()),
                }
            }
            Err(e) => {
                log::error!("[PIPELINE] {} upload failed: {}", domain, e);
                Envelope::failure(ANALYSIS_FAILED, Value::Null, &e)
            }
        }
    }

    pub async fn themes(&self, domain: Domain, name: &str) -> Envelope {
        let result = match subject(name) {
            Ok(name) => {
                Agent::new(domain, name, &self.config.default_location, &self.model, &self.places)
                    .themes()
                    .await
            }
            Err(e) => Err(e),
        };
        match result {
            Ok(themes) => Envelope::ok(name.trim(), json!({ "themes": themes })),
            Err(e) => {
                log::error!("[AGENT] Themes for '{}' failed: {}", name.trim(), e);
                Envelope::failure(name.trim(), json!({ "themes": "" }), &e)
            }
        }
    }

    pub async fn details(&self, domain: Domain, name: &str) -> Envelope {
        let result = match subject(name) {
            Ok(name) => {
                Agent::new(domain, name, &self.config.default_location, &self.model, &self.places)
                    .details()
                    .await
            }
            Err(e) => Err(e),
        };
        match result {
            Ok(details) => Envelope::ok(name.trim(), json!({ "details": details })),
            Err(e) => {
                log::error!("[AGENT] Details for '{}' failed: {}", name.trim(), e);
                Envelope::failure(name.trim(), json!({ "details": "" }), &e)
            }
        }
    }

    /// The full chain: themes, then suggestions built on those themes.
    /// `location` falls back to the configured default.
    pub async fn suggestions(&self, domain: Domain, name: &str, location: Option<&str>) -> Envelope {
        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(&self.config.default_location);

        let result = match subject(name) {
            Ok(name) => {
                pipeline::suggestion_chain(&self.model, &self.places, domain, name, location).await
            }
            Err(e) => Err(e),
        };
        match result.and_then(|payload| Ok(serde_json::to_value(&payload)?)) {
            Ok(value) => Envelope::ok(name.trim(), value),
            Err(e) => {
                log::error!("[AGENT] Suggestions for '{}' failed: {}", name.trim(), e);
                let mut payload = json!({ "suggestions": [] });
                if domain.uses_location() {
                    payload["location"] = json!(location);
                }
                Envelope::failure(name.trim(), payload, &e)
            }
        }
    }
}

fn subject(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        Err(Error::EmptySubject)
    } else {
        Ok(name)
    }
}
