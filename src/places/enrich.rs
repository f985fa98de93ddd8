//! Attach places data to suggestion records.
//!
//! Enrichment never fails a request: a lookup error is logged and the
//! record is left exactly as the model wrote it.

use super::{PlacesLookup, PlacesMatch};
use crate::llm::types::SuggestionRecord;

/// Free-text query for a record, or `None` for domains without places.
///
/// Food is searched near the request location, buildings near their own
/// Location field.
pub fn places_query(record: &SuggestionRecord, location: &str) -> Option<String> {
    let (name, near) = match record {
        SuggestionRecord::Artwork(_) => return None,
        SuggestionRecord::Food(r) => (r.restaurant_name.as_str(), location),
        SuggestionRecord::Architecture(r) => (r.name.as_str(), r.location.as_str()),
    };
    let near = near.trim();
    if near.is_empty() || near.eq_ignore_ascii_case("unknown") {
        Some(name.to_string())
    } else {
        Some(format!("{} in {}", name, near))
    }
}

/// Write a match into a record.
pub fn apply_match(record: &mut SuggestionRecord, found: &PlacesMatch) {
    match record {
        SuggestionRecord::Artwork(_) => {}
        SuggestionRecord::Food(r) => {
            r.map_link = Some(found.map_link.clone());
            if let Some(rating) = found.rating {
                if r.yelp_stars.trim().eq_ignore_ascii_case("unknown") {
                    r.yelp_stars = format!("{:.1}", rating);
                }
            }
        }
        SuggestionRecord::Architecture(r) => {
            r.map_link = Some(found.map_link.clone());
        }
    }
}

/// Look one record up and apply the first candidate, if any.
pub async fn enrich<P: PlacesLookup>(places: &P, record: &mut SuggestionRecord, location: &str) {
    let Some(query) = places_query(record, location) else {
        return;
    };
    match places.lookup(&query).await {
        Ok(Some(found)) => apply_match(record, &found),
        Ok(None) => log::debug!("[PLACES] No candidate for '{}'", query),
        Err(e) => log::warn!("[PLACES] Lookup for '{}' failed: {}", query, e),
    }
}

/// Enrich every record in order, one lookup at a time.
pub async fn enrich_all<P: PlacesLookup>(
    places: &P,
    records: &mut [SuggestionRecord],
    location: &str,
) {
    let start = std::time::Instant::now();
    for record in records.iter_mut() {
        enrich(places, record, location).await;
    }
    let linked = records.iter().filter(|r| r.map_link().is_some()).count();
    log::info!(
        "[PLACES] Enriched {}/{} records in {}ms",
        linked,
        records.len(),
        start.elapsed().as_millis()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::llm::types::{ArchitectureSuggestion, ArtworkSuggestion, FoodSuggestion};
    use std::sync::Mutex;

    enum Answer {
        Found(PlacesMatch),
        Empty,
        Fail,
    }

    struct FakePlaces {
        answer: Answer,
        queries: Mutex<Vec<String>>,
    }

    impl FakePlaces {
        fn new(answer: Answer) -> Self {
            Self {
                answer,
                queries: Mutex::new(Vec::new()),
            }
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl PlacesLookup for FakePlaces {
        async fn lookup(&self, query: &str) -> Result<Option<PlacesMatch>> {
            self.queries.lock().unwrap().push(query.to_string());
            match &self.answer {
                Answer::Found(m) => Ok(Some(m.clone())),
                Answer::Empty => Ok(None),
                Answer::Fail => Err(Error::upstream("Places", "OVER_QUERY_LIMIT")),
            }
        }
    }

    fn food(stars: &str) -> SuggestionRecord {
        SuggestionRecord::Food(FoodSuggestion {
            restaurant_name: "Ippudo".into(),
            cuisine: "Japanese".into(),
            average_cost: "$$".into(),
            yelp_stars: stars.into(),
            address: "65 4th Ave".into(),
            map_link: None,
        })
    }

    fn building(location: &str) -> SuggestionRecord {
        SuggestionRecord::Architecture(ArchitectureSuggestion {
            name: "Casa Milà".into(),
            location: location.into(),
            kind: "Modernisme".into(),
            era: "1912".into(),
            wikipedia: "Unknown".into(),
            map_link: None,
        })
    }

    fn stars(record: &SuggestionRecord) -> &str {
        match record {
            SuggestionRecord::Food(r) => &r.yelp_stars,
            _ => panic!("not a food record"),
        }
    }

    #[tokio::test]
    async fn unknown_rating_is_replaced() {
        let places = FakePlaces::new(Answer::Found(PlacesMatch::new("p1", "65 4th Ave", Some(4.4))));
        let mut record = food(" unknown ");
        enrich(&places, &mut record, "New York").await;
        assert_eq!(stars(&record), "4.4");
        assert_eq!(record.map_link(), Some("https://www.google.com/maps/place/?q=place_id:p1"));
        assert_eq!(places.queries(), ["Ippudo in New York"]);
    }

    #[tokio::test]
    async fn whole_ratings_keep_one_decimal() {
        let places = FakePlaces::new(Answer::Found(PlacesMatch::new("p1", "a", Some(4.0))));
        let mut record = food("Unknown");
        enrich(&places, &mut record, "New York").await;
        assert_eq!(stars(&record), "4.0");
    }

    #[tokio::test]
    async fn known_rating_is_kept() {
        let places = FakePlaces::new(Answer::Found(PlacesMatch::new("p1", "a", Some(3.9))));
        let mut record = food("4.5");
        enrich(&places, &mut record, "New York").await;
        assert_eq!(stars(&record), "4.5");
        assert!(record.map_link().is_some());
    }

    #[tokio::test]
    async fn match_without_rating_keeps_unknown() {
        let places = FakePlaces::new(Answer::Found(PlacesMatch::new("p1", "a", None)));
        let mut record = food("Unknown");
        enrich(&places, &mut record, "New York").await;
        assert_eq!(stars(&record), "Unknown");
        assert!(record.map_link().is_some());
    }

    #[tokio::test]
    async fn no_candidate_leaves_record_unchanged() {
        let places = FakePlaces::new(Answer::Empty);
        let mut record = food("Unknown");
        let before = record.clone();
        enrich(&places, &mut record, "New York").await;
        assert_eq!(record, before);
    }

    #[tokio::test]
    async fn failing_service_leaves_record_unchanged() {
        let places = FakePlaces::new(Answer::Fail);
        let mut records = vec![food("Unknown"), building("Barcelona, Spain")];
        let before = records.clone();
        enrich_all(&places, &mut records, "New York").await;
        assert_eq!(records, before);
        assert_eq!(places.queries().len(), 2);
    }

    #[tokio::test]
    async fn architecture_uses_its_location_and_never_touches_rating() {
        let places = FakePlaces::new(Answer::Found(PlacesMatch::new("p2", "Pg. de Gràcia", Some(4.7))));
        let mut record = building("Barcelona, Spain");
        enrich(&places, &mut record, "New York").await;
        assert_eq!(places.queries(), ["Casa Milà in Barcelona, Spain"]);
        match &record {
            SuggestionRecord::Architecture(r) => {
                assert_eq!(r.era, "1912");
                assert_eq!(r.map_link.as_deref(), Some("https://www.google.com/maps/place/?q=place_id:p2"));
            }
            _ => panic!("variant changed"),
        }
    }

    #[tokio::test]
    async fn artwork_is_never_looked_up() {
        let places = FakePlaces::new(Answer::Fail);
        let mut record = SuggestionRecord::Artwork(ArtworkSuggestion {
            name: "The Night Café".into(),
            artist: "Vincent van Gogh".into(),
            year: "1888".into(),
            current_location: "Yale University Art Gallery".into(),
            wikipedia: "Unknown".into(),
        });
        enrich(&places, &mut record, "New York").await;
        assert!(places.queries().is_empty());
    }

    #[test]
    fn unknown_location_queries_by_name_only() {
        assert_eq!(places_query(&building("Unknown"), "x").as_deref(), Some("Casa Milà"));
        assert_eq!(places_query(&building(" "), "x").as_deref(), Some("Casa Milà"));
    }
}
