pub mod answer;
pub mod error;
pub mod issue;
pub mod schema;

pub use answer::{FieldValue, FormState, OptionSet};
pub use error::SchemaError;
pub use issue::{CONSENT_FIELD_ID, Issue, IssueReason};
pub use schema::{
    ConsentClause, Question, QuestionKind, QuestionnaireDefinition, RevealCondition, Section,
};
