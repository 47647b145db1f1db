use thiserror::Error;

use crate::schema::QuestionKind;

/// A structural defect in an authored questionnaire definition.
///
/// These are authoring mistakes, not runtime conditions: registries verify
/// every definition at load time and refuse to serve one that fails.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("duplicate question id '{id}' in questionnaire '{questionnaire}'")]
    DuplicateQuestionId { questionnaire: String, id: String },

    #[error("question '{id}' has kind {kind} but declares no options")]
    MissingOptions { id: String, kind: QuestionKind },

    #[error("question '{id}' has kind {kind} but declares options")]
    UnexpectedOptions { id: String, kind: QuestionKind },

    #[error("question '{id}' reveal references '{target}', which is not declared earlier")]
    RevealTargetNotEarlier { id: String, target: String },

    #[error("question '{id}' reveal value '{value}' is not an option of '{target}'")]
    RevealValueUnknown {
        id: String,
        target: String,
        value: String,
    },

    #[error("questionnaire '{questionnaire}' declares no required email question")]
    NoReplyChannel { questionnaire: String },
}
