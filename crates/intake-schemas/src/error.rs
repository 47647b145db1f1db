use thiserror::Error;

use intake_model::SchemaError;

/// A variant document that cannot be served.
///
/// All of these are authoring defects: they fail `SchemaRegistry::load`,
/// which runs before any questionnaire is mounted, so a defective variant
/// never reaches runtime validation.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to parse variant '{variant}': {source}")]
    Parse {
        variant: &'static str,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("variant '{variant}' is not well-formed: {source}")]
    Invalid {
        variant: &'static str,
        #[source]
        source: SchemaError,
    },

    #[error("variant file '{variant}' declares id '{declared}'")]
    IdMismatch {
        variant: &'static str,
        declared: String,
    },
}
