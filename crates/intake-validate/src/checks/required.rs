//! Required-presence check.

use intake_model::{FormState, Issue, IssueReason, Question};

/// A required question with no usable answer yields `missing-required`.
///
/// Questions behind an unsatisfied reveal condition are never checked, even
/// when nominally required: the companion "please specify" field only
/// matters while its trigger holds.
pub fn check(question: &Question, state: &FormState) -> Vec<Issue> {
    if !question.required || !question.is_active(state) {
        return Vec::new();
    }

    if state.is_answered(&question.id) {
        return Vec::new();
    }

    vec![Issue::new(question.id.as_str(), IssueReason::MissingRequired)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_model::QuestionKind;

    fn required_text(id: &str) -> Question {
        Question {
            id: id.to_string(),
            label: id.to_string(),
            kind: QuestionKind::Text,
            required: true,
            options: Vec::new(),
            reveal: None,
        }
    }

    #[test]
    fn missing_required_single() {
        let question = required_text("name");
        let state = FormState::new();
        let issues = check(&question, &state);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].reason, IssueReason::MissingRequired);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let question = required_text("name");
        let mut state = FormState::new();
        state.set_single("name", "  \t ");
        assert_eq!(check(&question, &state).len(), 1);
    }

    #[test]
    fn empty_multi_set_counts_as_missing() {
        let mut question = required_text("frameworks");
        question.kind = QuestionKind::MultiChoice;
        question.options = vec!["SOC 2".to_string(), "ISO 27001".to_string()];

        let mut state = FormState::new();
        assert_eq!(check(&question, &state).len(), 1);

        state.toggle_multi("frameworks", "SOC 2");
        assert!(check(&question, &state).is_empty());

        // Toggling back off empties the set again.
        state.toggle_multi("frameworks", "SOC 2");
        assert_eq!(check(&question, &state).len(), 1);
    }

    #[test]
    fn optional_question_is_never_flagged() {
        let mut question = required_text("notes");
        question.required = false;
        assert!(check(&question, &FormState::new()).is_empty());
    }
}
