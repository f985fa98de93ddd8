//! Entity resolution: turn noisy vision output into one subject name.
//!
//! Pure and total: every input produces a `ResolutionResult`, and an image
//! nobody can name is `subject == None`, not an error.

use super::terms::{self, contains_any};
use super::{EntityObservation, LabelObservation};
use crate::domain::Domain;
use serde::Serialize;

/// Entities at or below this confidence are ignored entirely.
const ENTITY_FLOOR: f64 = 0.2;
/// Minimum confidence for an unlisted entity to count as a subject.
const UNKNOWN_SUBJECT_FLOOR: f64 = 0.4;
/// Minimum confidence for an unlisted entity to count as a creator.
const GENERIC_CREATOR_FLOOR: f64 = 0.6;
/// Threshold for the last-chance creator rescan.
const RESCAN_FLOOR: f64 = 0.4;
/// Food labels below this are not trusted to name the dish.
const FOOD_FLOOR: f64 = 0.30;

const SUPPORTING_ENTITIES: usize = 5;
const FOOD_SUPPORTING_LABELS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionResult {
    /// `None` when nothing in the image could be named.
    pub subject: Option<String>,
    pub creator: Option<String>,
    /// 0.0 exactly when `subject` is `None`.
    pub confidence: f64,
    pub supporting_labels: Vec<LabelObservation>,
    pub supporting_entities: Vec<EntityObservation>,
}

impl ResolutionResult {
    pub fn is_resolved(&self) -> bool {
        self.subject.is_some()
    }

    pub fn subject_display(&self, domain: Domain) -> &str {
        self.subject
            .as_deref()
            .unwrap_or_else(|| domain.unresolved_text())
    }

    pub fn creator_display(&self, domain: Domain) -> &str {
        self.creator
            .as_deref()
            .unwrap_or_else(|| domain.unknown_creator_text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    KnownSubject,
    KnownCreator,
    UnknownSubject,
    GenericCreator,
}

fn classify(entity: &EntityObservation) -> Option<Class> {
    let text = &entity.description;
    let is_subject = contains_any(text, terms::KNOWN_SUBJECTS);
    let is_creator = contains_any(text, terms::KNOWN_CREATORS);

    if is_subject && !is_creator {
        return Some(Class::KnownSubject);
    }
    if is_creator && !is_subject {
        return Some(Class::KnownCreator);
    }

    let is_generic = contains_any(text, terms::GENERIC_TERMS);
    let is_role = contains_any(text, terms::CREATOR_ROLE_TERMS);
    if !is_generic && !is_role && entity.confidence > UNKNOWN_SUBJECT_FLOOR {
        Some(Class::UnknownSubject)
    } else if is_role && !is_generic && entity.confidence > GENERIC_CREATOR_FLOOR {
        Some(Class::GenericCreator)
    } else {
        None
    }
}

/// Highest-confidence entity of `class`; earlier input wins ties.
fn best<'a>(
    classified: &[(&'a EntityObservation, Class)],
    class: Class,
) -> Option<&'a EntityObservation> {
    let mut pool: Vec<&EntityObservation> = classified
        .iter()
        .filter(|(_, c)| *c == class)
        .map(|(e, _)| *e)
        .collect();
    // sort_by is stable, so equal scores keep input order.
    pool.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    pool.first().copied()
}

/// Resolve an artwork or building from vision output.
pub fn resolve(labels: &[LabelObservation], entities: &[EntityObservation]) -> ResolutionResult {
    let supporting_labels: Vec<LabelObservation> = labels
        .iter()
        .filter(|l| contains_any(&l.description, terms::ART_LABEL_TERMS))
        .cloned()
        .collect();
    let supporting_entities: Vec<EntityObservation> =
        entities.iter().take(SUPPORTING_ENTITIES).cloned().collect();

    let classified: Vec<(&EntityObservation, Class)> = entities
        .iter()
        .filter(|e| e.confidence > ENTITY_FLOOR)
        .filter_map(|e| classify(e).map(|c| (e, c)))
        .collect();

    for (entity, class) in &classified {
        log::debug!(
            "[RESOLVE] {:?}: {} ({:.2})",
            class,
            entity.description,
            entity.confidence
        );
    }

    // Known subjects always win over unknown ones, whatever the scores.
    let subject = best(&classified, Class::KnownSubject)
        .or_else(|| best(&classified, Class::UnknownSubject));
    let creator = best(&classified, Class::KnownCreator)
        .or_else(|| best(&classified, Class::GenericCreator))
        .map(|e| e.description.clone());

    let Some(subject) = subject else {
        log::info!("[RESOLVE] No subject candidate among {} entities", entities.len());
        return ResolutionResult {
            subject: None,
            creator: creator.map(|c| c.trim().to_string()),
            confidence: 0.0,
            supporting_labels,
            supporting_entities,
        };
    };

    let confidence = subject.confidence;
    let mut name = subject.description.clone();
    let creator = match creator {
        Some(c) => Some(c),
        None => match split_creator(&name) {
            Some((subject_part, creator_part)) => {
                name = subject_part;
                Some(creator_part)
            }
            None => rescan_creator(entities),
        },
    };

    let name = name.trim().to_string();
    let creator = creator
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    log::info!(
        "[RESOLVE] Subject: {} ({:.2}), creator: {}",
        name,
        confidence,
        creator.as_deref().unwrap_or("-")
    );

    ResolutionResult {
        subject: Some(name),
        creator,
        confidence,
        supporting_labels,
        supporting_entities,
    }
}

/// Pull a creator out of the subject text itself.
///
/// Returns `(subject, creator)`. Separators are matched literally and a
/// split that leaves either side empty does not count.
fn split_creator(name: &str) -> Option<(String, String)> {
    if let Some((left, right)) = name.split_once(" by ") {
        if !left.trim().is_empty() && !right.trim().is_empty() {
            return Some((left.to_string(), right.to_string()));
        }
    }
    if let Some((left, right)) = name.split_once(" - ") {
        if !left.trim().is_empty() && !right.trim().is_empty() {
            return Some((right.to_string(), left.to_string()));
        }
    }
    let lower = name.to_lowercase();
    terms::FAMOUS_SURNAMES
        .iter()
        .find(|surname| lower.contains(*surname))
        .map(|surname| (name.to_string(), title_case(surname)))
}

/// First entity above the rescan floor that names a creator role.
fn rescan_creator(entities: &[EntityObservation]) -> Option<String> {
    entities
        .iter()
        .filter(|e| e.confidence > RESCAN_FLOOR)
        .find(|e| contains_any(&e.description, terms::RESCAN_CREATOR_TERMS))
        .map(|e| e.description.clone())
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a dish from its labels. Web entities are carried along but
/// never used for naming.
pub fn resolve_food(labels: &[LabelObservation], entities: &[EntityObservation]) -> ResolutionResult {
    let supporting_labels: Vec<LabelObservation> =
        labels.iter().take(FOOD_SUPPORTING_LABELS).cloned().collect();
    let supporting_entities: Vec<EntityObservation> =
        entities.iter().take(SUPPORTING_ENTITIES).cloned().collect();

    let mut best: Option<&LabelObservation> = None;
    for label in labels {
        let lower = label.description.to_lowercase();
        if terms::FOOD_GENERIC_TERMS.contains(&lower.trim()) {
            continue;
        }
        if best.map_or(true, |b| label.confidence > b.confidence) {
            best = Some(label);
        }
    }

    match best.filter(|b| b.confidence >= FOOD_FLOOR) {
        Some(label) => {
            log::info!(
                "[RESOLVE] Food: {} ({:.2})",
                label.description,
                label.confidence
            );
            ResolutionResult {
                subject: Some(label.description.trim().to_string()),
                creator: None,
                confidence: label.confidence,
                supporting_labels,
                supporting_entities,
            }
        }
        None => {
            log::info!("[RESOLVE] No specific food label among {} labels", labels.len());
            ResolutionResult {
                subject: None,
                creator: None,
                confidence: 0.0,
                supporting_labels,
                supporting_entities,
            }
        }
    }
}

/// Dispatch to the resolver a domain uses.
pub fn resolve_for(
    domain: Domain,
    labels: &[LabelObservation],
    entities: &[EntityObservation],
) -> ResolutionResult {
    match domain {
        Domain::Artwork | Domain::Architecture => resolve(labels, entities),
        Domain::Food => resolve_food(labels, entities),
    }
}
