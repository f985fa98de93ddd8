//! The agent: drives the three-stage prompt pipeline for one subject.
//!
//! Lifecycle: `Agent::new` binds the subject into all three templates
//! (the SubjectBound state). `themes` and `details` can be issued any
//! number of times. `suggestions` takes `self` by value, so once it has
//! run the agent is gone and cannot append themes a second time.

use crate::domain::Domain;
use crate::error::Result;
use crate::llm::literal::{self, strip_code_fences};
use crate::llm::{BoundPrompts, SuggestionRecord, TextModel};
use crate::places::{self, PlacesLookup};

pub struct Agent<'a, M, P> {
    domain: Domain,
    subject: String,
    location: String,
    prompts: BoundPrompts,
    model: &'a M,
    places: &'a P,
}

impl<'a, M: TextModel, P: PlacesLookup> Agent<'a, M, P> {
    pub fn new(domain: Domain, subject: &str, location: &str, model: &'a M, places: &'a P) -> Self {
        let subject = subject.trim().to_string();
        let location = location.trim().to_string();
        let prompts = BoundPrompts::bind(domain, &subject, &location);
        log::info!("[AGENT] {} agent bound to '{}'", domain, subject);
        Self {
            domain,
            subject,
            location,
            prompts,
            model,
            places,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn prompts(&self) -> &BoundPrompts {
        &self.prompts
    }

    /// Raw themes text, shown to the user and fed into `suggestions`.
    pub async fn themes(&self) -> Result<String> {
        let start = std::time::Instant::now();
        let text = self.model.generate(&self.prompts.themes).await?;
        log::info!(
            "[AGENT] Themes for '{}': {} chars in {}ms",
            self.subject,
            text.len(),
            start.elapsed().as_millis()
        );
        Ok(text)
    }

    /// Raw description text. Never parsed.
    pub async fn details(&self) -> Result<String> {
        let start = std::time::Instant::now();
        let text = self.model.generate(&self.prompts.details).await?;
        log::info!(
            "[AGENT] Details for '{}': {} chars in {}ms",
            self.subject,
            text.len(),
            start.elapsed().as_millis()
        );
        Ok(text)
    }

    /// Ask for similar items, parse them, and enrich them with places data.
    ///
    /// Output that is not a list literal fails the whole call with
    /// `Error::SuggestionParse`; no partial list is returned. Inner lists
    /// that are too short are dropped.
    pub async fn suggestions(self, themes: &str) -> Result<Vec<SuggestionRecord>> {
        let start = std::time::Instant::now();
        let prompt = self.prompts.suggestions_with_themes(themes);
        let raw = self.model.generate(&prompt).await?;

        let cleaned = strip_code_fences(&raw);
        let items = literal::parse(&cleaned).map_err(|e| {
            log::warn!(
                "[AGENT] Unparseable suggestions for '{}': {} (raw: {})",
                self.subject,
                e,
                &cleaned.chars().take(200).collect::<String>()
            );
            e
        })?;

        let mut records = SuggestionRecord::from_items(self.domain, &items);
        if records.len() < items.len() {
            log::info!(
                "[AGENT] Skipped {} malformed suggestion rows",
                items.len() - records.len()
            );
        }

        if self.domain.enriches_with_places() {
            places::enrich_all(self.places, &mut records, &self.location).await;
        }

        log::info!(
            "[AGENT] {} suggestions for '{}' in {}ms",
            records.len(),
            self.subject,
            start.elapsed().as_millis()
        );
        Ok(records)
    }
}
