//! Google Places client: `findplacefromtext` with `inputtype=textquery`.
//!
//! Only the first candidate is used. `ZERO_RESULTS` is a normal empty
//! answer; any other non-OK status is an upstream failure.

use super::{PlacesLookup, PlacesMatch};
use crate::config::Config;
use crate::error::{Error, Result};
use serde::Deserialize;

const FIND_PLACE_URL: &str = "https://maps.googleapis.com/maps/api/place/findplacefromtext/json";
const FIELDS: &str = "place_id,formatted_address,rating";

pub struct GooglePlacesClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl GooglePlacesClient {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            api_key: config.maps_api_key.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FindPlaceResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    status: String,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    place_id: Option<String>,
    #[serde(default)]
    formatted_address: String,
    rating: Option<f64>,
}

fn parse_find_place(body: &str) -> Result<Option<PlacesMatch>> {
    let parsed: FindPlaceResponse = serde_json::from_str(body)?;
    match parsed.status.as_str() {
        "OK" | "ZERO_RESULTS" => {}
        status => {
            let detail = parsed.error_message.unwrap_or_default();
            return Err(Error::upstream("Places", format!("{} {}", status, detail).trim().to_string()));
        }
    }
    Ok(parsed.candidates.into_iter().next().and_then(|c| {
        let place_id = c.place_id.filter(|id| !id.is_empty())?;
        Some(PlacesMatch::new(place_id, c.formatted_address, c.rating))
    }))
}

impl PlacesLookup for GooglePlacesClient {
    async fn lookup(&self, query: &str) -> Result<Option<PlacesMatch>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(Error::MissingApiKey("GOOGLE_MAPS_API_KEY"))?;

        let start = std::time::Instant::now();
        let response = self
            .http
            .get(FIND_PLACE_URL)
            .query(&[
                ("input", query),
                ("inputtype", "textquery"),
                ("fields", FIELDS),
                ("key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            log::error!("[PLACES] API returned {}: {}", status, body);
            return Err(Error::upstream("Places", format!("HTTP {}", status)));
        }

        let found = parse_find_place(&body)?;
        log::info!(
            "[PLACES] '{}' → {} in {}ms",
            query,
            if found.is_some() { "match" } else { "no match" },
            start.elapsed().as_millis()
        );
        Ok(found)
    }
}
