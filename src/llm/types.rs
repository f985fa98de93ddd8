//! Suggestion records: one typed row per "similar item" the model lists.
//!
//! Field names are the JSON keys the browser reads, so they are renamed
//! verbatim and serialized in declaration order.

use super::literal::Literal;
use crate::domain::Domain;
use serde::Serialize;

/// Number of positional fields every suggestion row must carry.
pub const ROW_WIDTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkSuggestion {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Current Location")]
    pub current_location: String,
    #[serde(rename = "Wikipedia")]
    pub wikipedia: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodSuggestion {
    #[serde(rename = "Restaurant Name")]
    pub restaurant_name: String,
    #[serde(rename = "Cuisine")]
    pub cuisine: String,
    #[serde(rename = "Average Cost")]
    pub average_cost: String,
    #[serde(rename = "Yelp Stars")]
    pub yelp_stars: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Map Link", skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchitectureSuggestion {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Era")]
    pub era: String,
    #[serde(rename = "Wikipedia")]
    pub wikipedia: String,
    #[serde(rename = "Map Link", skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
}

/// Serialized untagged: each variant is a flat object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SuggestionRecord {
    Artwork(ArtworkSuggestion),
    Food(FoodSuggestion),
    Architecture(ArchitectureSuggestion),
}

impl SuggestionRecord {
    /// Map one parsed inner list onto the domain's fields.
    ///
    /// Returns `None` unless the row has at least five items and the first
    /// five are scalars. Extra items are ignored.
    pub fn from_row(domain: Domain, row: &[Literal]) -> Option<Self> {
        if row.len() < ROW_WIDTH {
            return None;
        }
        let mut fields = Vec::with_capacity(ROW_WIDTH);
        for item in &row[..ROW_WIDTH] {
            fields.push(item.as_text()?.trim().to_string());
        }
        let [a, b, c, d, e]: [String; ROW_WIDTH] = fields.try_into().ok()?;

        Some(match domain {
            Domain::Artwork => SuggestionRecord::Artwork(ArtworkSuggestion {
                name: a,
                artist: b,
                year: c,
                current_location: d,
                wikipedia: e,
            }),
            Domain::Food => SuggestionRecord::Food(FoodSuggestion {
                restaurant_name: a,
                cuisine: b,
                average_cost: c,
                yelp_stars: d,
                address: e,
                map_link: None,
            }),
            Domain::Architecture => SuggestionRecord::Architecture(ArchitectureSuggestion {
                name: a,
                location: b,
                kind: c,
                era: d,
                wikipedia: e,
                map_link: None,
            }),
        })
    }

    /// Build records from the outer list items, skipping malformed rows.
    pub fn from_items(domain: Domain, items: &[Literal]) -> Vec<Self> {
        items
            .iter()
            .filter_map(|item| match item {
                Literal::List(row) => Self::from_row(domain, row),
                _ => None,
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        match self {
            SuggestionRecord::Artwork(r) => &r.name,
            SuggestionRecord::Food(r) => &r.restaurant_name,
            SuggestionRecord::Architecture(r) => &r.name,
        }
    }

    pub fn map_link(&self) -> Option<&str> {
        match self {
            SuggestionRecord::Artwork(_) => None,
            SuggestionRecord::Food(r) => r.map_link.as_deref(),
            SuggestionRecord::Architecture(r) => r.map_link.as_deref(),
        }
    }
}
