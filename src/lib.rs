//! Curio: identify an artwork, dish or building from a photo and
//! recommend similar ones to visit.
//!
//! No business logic lives here, only module declarations and startup.
//!
//! Operations are split across:
//!   - commands.rs: `Curio` facade and the `Envelope` every call returns
//!   - pipeline.rs: multi-step orchestration (upload analysis, suggestion chain)
//!   - agent.rs: three-stage prompt pipeline for one subject
//!   - vision/: annotate client + entity resolver
//!   - llm/: text model client, templates, list-literal parser
//!   - places/: places client + suggestion enrichment

pub mod agent;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod places;
pub mod vision;

pub use commands::{Curio, Envelope};
pub use config::Config;
pub use domain::Domain;
pub use error::{Error, Result};

use std::path::Path;

/// Startup: load `.env.local` / `.env` from `dir`, start logging, and
/// build the Google-backed service. Call once per process.
pub fn run(dir: &Path) -> Result<Curio> {
    let config = Config::load(dir)?;
    env_logger::init();
    log::info!("[STARTUP] {}", config.describe());
    Curio::from_config(config)
}
