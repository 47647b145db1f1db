//! Email syntax check.

use std::sync::LazyLock;

use regex::Regex;

use intake_model::{FormState, Issue, IssueReason, Question, QuestionKind};

// local-part "@" domain "." tld, no embedded whitespace. Deliberately
// permissive beyond that: the relay bounces what it cannot deliver.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("literal email pattern compiles")
});

/// An email-kind question holding a non-blank value that is not an address
/// yields `malformed-email`. Blank values are the required check's business.
pub fn check(question: &Question, state: &FormState) -> Vec<Issue> {
    if question.kind != QuestionKind::Email || !question.is_active(state) {
        return Vec::new();
    }

    let Some(value) = state.single(&question.id) else {
        return Vec::new();
    };
    let trimmed = value.trim();
    if trimmed.is_empty() || EMAIL_PATTERN.is_match(trimmed) {
        return Vec::new();
    }

    vec![Issue::new(question.id.as_str(), IssueReason::MalformedEmail)]
}
