//! Error type shared by every stage of the pipeline.
//!
//! An unresolved subject and a missing places match are NOT errors.
//! They are ordinary results (`ResolutionResult::subject == None` and
//! `Ok(None)` from a places lookup). Everything here ends up as a failure
//! envelope at the `Curio` boundary.

use crate::llm::literal::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} is not set; add it to .env.local or the environment")]
    MissingApiKey(&'static str),

    #[error("{service} call failed: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not parse suggestions: {0}")]
    SuggestionParse(#[from] ParseError),

    #[error("Unsupported upload: {0}")]
    UnsupportedImage(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Subject name is empty")]
    EmptySubject,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn upstream(service: &'static str, message: impl Into<String>) -> Self {
        Error::Upstream {
            service,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
