//! The nine discovery questionnaire variants.
//!
//! Each compliance regime's questionnaire is a TOML document under `data/`,
//! compiled into the binary and parsed into a
//! [`intake_model::QuestionnaireDefinition`] at registry load. Variants are
//! pure data: the engine never special-cases a regime, and differences
//! between variants (which fields are mandatory, which carry a consent
//! clause) live entirely in these documents.

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::SchemaRegistry;
