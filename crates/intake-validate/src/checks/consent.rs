//! Consent-clause check.

use intake_model::{CONSENT_FIELD_ID, FormState, Issue, IssueReason, QuestionnaireDefinition};

/// Variants that carry a consent clause require the box to be ticked before
/// submission. Variants without one skip this check entirely; which variants
/// carry it is per-schema configuration, not a universal rule.
pub fn check(definition: &QuestionnaireDefinition, state: &FormState) -> Vec<Issue> {
    if definition.consent.is_none() || state.consent_given() {
        return Vec::new();
    }

    vec![Issue::new(CONSENT_FIELD_ID, IssueReason::ConsentNotGiven)]
}
