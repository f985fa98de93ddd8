//! LLM domain: prompt templates, the text-model seam, and parsing of
//! what comes back.
//!
//!   - provider.rs: `TextModel` trait
//!   - gemini.rs: Gemini `generateContent` client
//!   - prompts.rs: nine static templates and subject binding
//!   - literal.rs: fence stripping + list-literal parser
//!   - types.rs: typed suggestion records

mod gemini;
pub mod literal;
pub mod prompts;
pub mod provider;
pub mod types;

pub use gemini::GeminiClient;
pub use literal::{strip_code_fences, ParseError};
pub use prompts::{BoundPrompts, Stage};
pub use provider::TextModel;
pub use types::SuggestionRecord;
