//! Pure validation of questionnaire answers.
//!
//! `validate_submission` maps a `(definition, state)` pair to a
//! [`ValidationReport`] with no I/O and no side effects: the same input
//! always yields the same report. A clean report is the precondition for
//! handing the snapshot to the formatter and relay.
//!
//! ## Checks
//!
//! - **required**: a required, currently active question with no usable
//!   answer → `missing-required`. Companion fields behind an unsatisfied
//!   reveal condition are never checked.
//! - **email**: a non-blank value on an email-kind question that is not
//!   `local "@" domain "." tld` → `malformed-email`.
//! - **consent**: the definition carries a consent clause and the box is
//!   unticked → `consent-not-given`. Per-schema, not universal.

mod checks;
mod report;

pub use report::ValidationReport;

use intake_model::{FormState, QuestionnaireDefinition};

/// Validate a state snapshot against its questionnaire definition.
///
/// Issues are reported in section/question declaration order, consent last.
pub fn validate_submission(
    definition: &QuestionnaireDefinition,
    state: &FormState,
) -> ValidationReport {
    checks::run_all(definition, state)
}
