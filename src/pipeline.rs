//! Multi-step orchestration.
//!
//! - analyze_upload: sniff → vision annotate → resolve
//! - suggestion_chain: bind → themes → suggestions (+ places)
//!
//! Every step is awaited in order. Nothing runs in the background and
//! nothing is shared between requests.

use crate::agent::Agent;
use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::llm::{SuggestionRecord, TextModel};
use crate::places::PlacesLookup;
use crate::vision::{self, EntityObservation, LabelObservation, ResolutionResult, VisionService};
use image::ImageFormat;
use serde::Serialize;

const ACCEPTED_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// What the browser gets back from an upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisPayload {
    pub domain: Domain,
    pub subject_name: String,
    pub creator_name: String,
    pub resolved: bool,
    pub confidence: f64,
    pub supporting_labels: Vec<LabelObservation>,
    pub supporting_entities: Vec<EntityObservation>,
}

impl AnalysisPayload {
    pub fn new(domain: Domain, resolution: ResolutionResult) -> Self {
        Self {
            domain,
            subject_name: resolution.subject_display(domain).to_string(),
            creator_name: resolution.creator_display(domain).to_string(),
            resolved: resolution.is_resolved(),
            confidence: resolution.confidence,
            supporting_labels: resolution.supporting_labels,
            supporting_entities: resolution.supporting_entities,
        }
    }
}

/// Result of the full three-step chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionsPayload {
    pub themes: String,
    pub suggestions: Vec<SuggestionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Check the upload is an image format the vision service accepts.
pub fn sniff_image(bytes: &[u8]) -> Result<ImageFormat> {
    if bytes.is_empty() {
        return Err(Error::UnsupportedImage("empty upload".into()));
    }
    match image::guess_format(bytes) {
        Ok(format) if ACCEPTED_FORMATS.contains(&format) => Ok(format),
        Ok(format) => Err(Error::UnsupportedImage(format!("{:?} images are not accepted", format))),
        Err(_) => Err(Error::UnsupportedImage("not a recognised image".into())),
    }
}

/// Upload bytes → resolved subject.
///
/// An image nobody can name is a successful, unresolved result.
pub async fn analyze_upload<V: VisionService>(
    vision: &V,
    domain: Domain,
    bytes: &[u8],
) -> Result<ResolutionResult> {
    let pipeline_start = std::time::Instant::now();

    let format = sniff_image(bytes)?;
    log::info!("[PIPELINE] {} upload: {:?}, {} bytes", domain, format, bytes.len());

    let vision_start = std::time::Instant::now();
    let observations = vision.annotate(bytes).await?;
    log::info!(
        "[PIPELINE] Vision: {}ms",
        vision_start.elapsed().as_millis()
    );

    let resolution = vision::resolve_for(domain, &observations.labels, &observations.entities);
    log::info!(
        "[PIPELINE] Resolved '{}' ({:.2}) in {}ms total",
        resolution.subject_display(domain),
        resolution.confidence,
        pipeline_start.elapsed().as_millis()
    );
    Ok(resolution)
}

/// Themes first, then suggestions with those themes appended.
pub async fn suggestion_chain<M: TextModel, P: PlacesLookup>(
    model: &M,
    places: &P,
    domain: Domain,
    subject: &str,
    location: &str,
) -> Result<SuggestionsPayload> {
    let pipeline_start = std::time::Instant::now();
    let agent = Agent::new(domain, subject, location, model, places);

    let themes = agent.themes().await?;
    let suggestions = agent.suggestions(&themes).await?;

    log::info!(
        "[PIPELINE] Suggestion chain for '{}': {} records in {}ms",
        subject.trim(),
        suggestions.len(),
        pipeline_start.elapsed().as_millis()
    );
    Ok(SuggestionsPayload {
        themes,
        suggestions,
        location: domain.uses_location().then(|| location.trim().to_string()),
    })
}
