//! The three kinds of subject a user can photograph.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Artwork,
    Food,
    Architecture,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Artwork, Domain::Food, Domain::Architecture];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Artwork => "artwork",
            Domain::Food => "food",
            Domain::Architecture => "architecture",
        }
    }

    /// Display text for a subject the resolver could not name.
    pub fn unresolved_text(&self) -> &'static str {
        match self {
            Domain::Artwork => "Unable to identify artwork",
            Domain::Food => "Unable to identify food item",
            Domain::Architecture => "Unable to identify building",
        }
    }

    /// Display text for a missing creator.
    pub fn unknown_creator_text(&self) -> &'static str {
        match self {
            Domain::Artwork => "Unknown Artist",
            Domain::Food => "Unknown",
            Domain::Architecture => "Unknown Architect",
        }
    }

    /// Food suggestions are anchored to a city; the others are not.
    pub fn uses_location(&self) -> bool {
        matches!(self, Domain::Food)
    }

    /// Whether suggestion records go through the places lookup.
    pub fn enriches_with_places(&self) -> bool {
        matches!(self, Domain::Food | Domain::Architecture)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "artwork" | "art" => Ok(Domain::Artwork),
            "food" => Ok(Domain::Food),
            "architecture" | "building" => Ok(Domain::Architecture),
            _ => Err(Error::UnknownDomain(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("artwork".parse::<Domain>().unwrap(), Domain::Artwork);
        assert_eq!(" Art ".parse::<Domain>().unwrap(), Domain::Artwork);
        assert_eq!("FOOD".parse::<Domain>().unwrap(), Domain::Food);
        assert_eq!("building".parse::<Domain>().unwrap(), Domain::Architecture);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "sculpture".parse::<Domain>().unwrap_err();
        assert!(matches!(err, Error::UnknownDomain(ref s) if s == "sculpture"));
    }

    #[test]
    fn display_round_trips() {
        for domain in Domain::ALL {
            assert_eq!(domain.to_string().parse::<Domain>().unwrap(), domain);
        }
    }

    #[test]
    fn only_food_and_architecture_use_places() {
        assert!(!Domain::Artwork.enriches_with_places());
        assert!(Domain::Food.enriches_with_places());
        assert!(Domain::Architecture.enriches_with_places());
        assert!(Domain::Food.uses_location());
        assert!(!Domain::Architecture.uses_location());
    }
}
