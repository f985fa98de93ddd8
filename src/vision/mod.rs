//! Vision domain: image annotation in, best-guess subject name out.
//!
//!   - google.rs: Cloud Vision `images:annotate` client
//!   - resolver.rs: labels + web entities → `ResolutionResult`
//!   - terms.rs: static term tables the resolver matches against

mod google;
pub mod resolver;
pub mod terms;

pub use google::GoogleVisionClient;
pub use resolver::{resolve, resolve_food, resolve_for, ResolutionResult};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A visual concept detected in the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelObservation {
    pub description: String,
    #[serde(alias = "score")]
    pub confidence: f64,
}

/// A web match for the image. Usually carries the proper noun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityObservation {
    pub description: String,
    #[serde(alias = "score")]
    pub confidence: f64,
}

impl LabelObservation {
    pub fn new(description: impl Into<String>, confidence: f64) -> Self {
        Self {
            description: description.into(),
            confidence,
        }
    }
}

impl EntityObservation {
    pub fn new(description: impl Into<String>, confidence: f64) -> Self {
        Self {
            description: description.into(),
            confidence,
        }
    }
}

/// Everything one annotate call returns, in service order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisionObservations {
    #[serde(default)]
    pub labels: Vec<LabelObservation>,
    #[serde(default, alias = "web_entities")]
    pub entities: Vec<EntityObservation>,
}

/// Image-understanding service boundary.
pub trait VisionService {
    fn annotate(&self, image: &[u8]) -> impl Future<Output = Result<VisionObservations>> + Send;
}
