//! Places domain: find-place-from-text lookups and suggestion enrichment.

mod enrich;
mod google;

pub use enrich::{apply_match, enrich, enrich_all, places_query};
pub use google::GooglePlacesClient;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::future::Future;

const MAP_LINK_BASE: &str = "https://www.google.com/maps/place/?q=place_id:";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesMatch {
    pub place_id: String,
    pub formatted_address: String,
    pub rating: Option<f64>,
    pub map_link: String,
}

impl PlacesMatch {
    pub fn new(place_id: impl Into<String>, formatted_address: impl Into<String>, rating: Option<f64>) -> Self {
        let place_id = place_id.into();
        Self {
            map_link: map_link(&place_id),
            place_id,
            formatted_address: formatted_address.into(),
            rating,
        }
    }
}

/// Google Maps link for a place id.
pub fn map_link(place_id: &str) -> String {
    format!("{}{}", MAP_LINK_BASE, place_id)
}

/// Places service boundary. `Ok(None)` means no candidate, which is not
/// an error.
pub trait PlacesLookup {
    fn lookup(&self, query: &str) -> impl Future<Output = Result<Option<PlacesMatch>>> + Send;
}
