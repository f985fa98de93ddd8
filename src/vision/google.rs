//! Google Cloud Vision client: one `images:annotate` call per upload.
//!
//! Requests LABEL_DETECTION and WEB_DETECTION together. The image goes
//! up as base64 content; nothing touches disk.

use super::{EntityObservation, LabelObservation, VisionObservations, VisionService};
use crate::config::Config;
use crate::error::{Error, Result};
use base64::Engine;
use serde::Deserialize;

const ANNOTATE_URL: &str = "https://vision.googleapis.com/v1/images:annotate";
const MAX_RESULTS: u32 = 20;

pub struct GoogleVisionClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl GoogleVisionClient {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            api_key: config.vision_api_key.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<ImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageResponse {
    #[serde(default)]
    label_annotations: Vec<Annotation>,
    web_detection: Option<WebDetection>,
    error: Option<Status>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebDetection {
    #[serde(default)]
    web_entities: Vec<Annotation>,
}

#[derive(Debug, Deserialize)]
struct Annotation {
    #[serde(default)]
    description: String,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(default)]
    message: String,
}

impl ImageResponse {
    fn into_observations(self) -> VisionObservations {
        let labels = self
            .label_annotations
            .into_iter()
            .map(|a| LabelObservation::new(a.description, a.score))
            .collect();
        // Web entities without a description carry nothing to match on.
        let entities = self
            .web_detection
            .map(|w| w.web_entities)
            .unwrap_or_default()
            .into_iter()
            .filter(|a| !a.description.trim().is_empty())
            .map(|a| EntityObservation::new(a.description, a.score))
            .collect();
        VisionObservations { labels, entities }
    }
}

fn annotate_body(image: &[u8]) -> serde_json::Value {
    let content = base64::engine::general_purpose::STANDARD.encode(image);
    serde_json::json!({
        "requests": [
            {
                "image": { "content": content },
                "features": [
                    { "type": "LABEL_DETECTION", "maxResults": MAX_RESULTS },
                    { "type": "WEB_DETECTION", "maxResults": MAX_RESULTS }
                ]
            }
        ]
    })
}

fn parse_annotate(body: &str) -> Result<VisionObservations> {
    let parsed: AnnotateResponse = serde_json::from_str(body)?;
    let response = parsed.responses.into_iter().next().unwrap_or_default();
    if let Some(status) = &response.error {
        return Err(Error::upstream("Vision", status.message.clone()));
    }
    Ok(response.into_observations())
}

impl VisionService for GoogleVisionClient {
    async fn annotate(&self, image: &[u8]) -> Result<VisionObservations> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(Error::MissingApiKey("GOOGLE_VISION_API_KEY"))?;

        let start = std::time::Instant::now();
        let response = self
            .http
            .post(ANNOTATE_URL)
            .query(&[("key", api_key)])
            .json(&annotate_body(image))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            log::error!("[VISION] API returned {}: {}", status, body);
            return Err(Error::upstream("Vision", format!("HTTP {}", status)));
        }

        let observations = parse_annotate(&body)?;
        log::info!(
            "[VISION] {} labels, {} web entities in {}ms",
            observations.labels.len(),
            observations.entities.len(),
            start.elapsed().as_millis()
        );
        Ok(observations)
    }
}
