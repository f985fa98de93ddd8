//! Prompt templates: nine static bodies, three stages per domain.
//!
//! Each template has a fixed slot where the subject name goes. The slot is
//! part of the template's contract: editing a template body means
//! checking its `Slot` still points at the right line.

use crate::domain::Domain;

pub const SUBJECT_PLACEHOLDER: &str = "{subject}";
pub const LOCATION_PLACEHOLDER: &str = "{location}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Themes,
    Details,
    Suggestions,
}

/// Where the subject name is written into a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Append `" <subject>"` to the end of this line.
    Append { line: usize },
    /// Replace the first `{subject}` on this line.
    Placeholder { line: usize },
}

#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub domain: Domain,
    pub stage: Stage,
    pub body: &'static str,
    pub slot: Slot,
}

const ARTWORK_THEMES: &str = include_str!("../../prompts/artwork_themes.txt");
const ARTWORK_DETAILS: &str = include_str!("../../prompts/artwork_details.txt");
const ARTWORK_SUGGESTIONS: &str = include_str!("../../prompts/artwork_suggestions.txt");
const FOOD_THEMES: &str = include_str!("../../prompts/food_themes.txt");
const FOOD_DETAILS: &str = include_str!("../../prompts/food_details.txt");
const FOOD_SUGGESTIONS: &str = include_str!("../../prompts/food_suggestions.txt");
const ARCHITECTURE_THEMES: &str = include_str!("../../prompts/architecture_themes.txt");
const ARCHITECTURE_DETAILS: &str = include_str!("../../prompts/architecture_details.txt");
const ARCHITECTURE_SUGGESTIONS: &str = include_str!("../../prompts/architecture_suggestions.txt");

/// Look up the template for one domain and stage.
pub fn template(domain: Domain, stage: Stage) -> PromptTemplate {
    let body = match (domain, stage) {
        (Domain::Artwork, Stage::Themes) => ARTWORK_THEMES,
        (Domain::Artwork, Stage::Details) => ARTWORK_DETAILS,
        (Domain::Artwork, Stage::Suggestions) => ARTWORK_SUGGESTIONS,
        (Domain::Food, Stage::Themes) => FOOD_THEMES,
        (Domain::Food, Stage::Details) => FOOD_DETAILS,
        (Domain::Food, Stage::Suggestions) => FOOD_SUGGESTIONS,
        (Domain::Architecture, Stage::Themes) => ARCHITECTURE_THEMES,
        (Domain::Architecture, Stage::Details) => ARCHITECTURE_DETAILS,
        (Domain::Architecture, Stage::Suggestions) => ARCHITECTURE_SUGGESTIONS,
    };
    // Same slot layout in every domain.
    let slot = match stage {
        Stage::Themes => Slot::Append { line: 1 },
        Stage::Details => Slot::Append { line: 0 },
        Stage::Suggestions => Slot::Placeholder { line: 0 },
    };
    PromptTemplate {
        domain,
        stage,
        body,
        slot,
    }
}

impl PromptTemplate {
    /// Render the body with `subject` written into the slot.
    ///
    /// Only the slot line is touched, so a subject that itself contains
    /// `{subject}`, "by" or "-" is written exactly once.
    pub fn bind(&self, subject: &str) -> String {
        self.bind_with(subject, None)
    }

    fn bind_with(&self, subject: &str, location: Option<&str>) -> String {
        let index = match self.slot {
            Slot::Append { line } | Slot::Placeholder { line } => line,
        };

        let mut bound = false;
        let mut lines = Vec::new();
        for (i, line) in self.body.lines().enumerate() {
            let subject_here = matches!(self.slot, Slot::Placeholder { .. })
                && i == index
                && line.contains(SUBJECT_PLACEHOLDER);
            bound |= subject_here;
            lines.push(fill(line, subject_here.then_some(subject), location));
        }

        match (self.slot, lines.get_mut(index)) {
            (Slot::Append { .. }, Some(line)) => {
                line.push(' ');
                line.push_str(subject);
            }
            (Slot::Placeholder { .. }, Some(_)) if bound => {}
            _ => {
                log::warn!(
                    "[AGENT] {:?} {:?} template has no slot at line {}",
                    self.domain,
                    self.stage,
                    index
                );
                lines.push(subject.to_string());
            }
        }
        lines.join("\n")
    }
}

/// Replace the first occurrence of each given placeholder in one pass
/// over the template line. Inserted values are never scanned again.
fn fill(line: &str, mut subject: Option<&str>, mut location: Option<&str>) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    loop {
        let next_subject = subject.and_then(|_| rest.find(SUBJECT_PLACEHOLDER));
        let next_location = location.and_then(|_| rest.find(LOCATION_PLACEHOLDER));
        let (at, placeholder, value) = match (next_subject, next_location) {
            (Some(s), Some(l)) if l < s => (l, LOCATION_PLACEHOLDER, location.take()),
            (Some(s), _) => (s, SUBJECT_PLACEHOLDER, subject.take()),
            (None, Some(l)) => (l, LOCATION_PLACEHOLDER, location.take()),
            (None, None) => break,
        };
        out.push_str(&rest[..at]);
        out.push_str(value.unwrap_or_default());
        rest = &rest[at + placeholder.len()..];
    }
    out.push_str(rest);
    out
}

/// The three rendered prompts for one subject. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundPrompts {
    pub themes: String,
    pub details: String,
    pub suggestions: String,
}

impl BoundPrompts {
    /// Bind `subject` into all three templates. `location` only reaches
    /// templates that carry a `{location}` placeholder.
    pub fn bind(domain: Domain, subject: &str, location: &str) -> Self {
        Self {
            themes: template(domain, Stage::Themes).bind(subject),
            details: template(domain, Stage::Details).bind(subject),
            suggestions: template(domain, Stage::Suggestions).bind_with(subject, Some(location)),
        }
    }

    /// The suggestions prompt with `themes` appended on its own line.
    pub fn suggestions_with_themes(&self, themes: &str) -> String {
        let themes = themes.trim();
        if themes.is_empty() {
            self.suggestions.clone()
        } else {
            format!("{}\n{}", self.suggestions, themes)
        }
    }
}
