//! Behavioral tests for the validator against a representative definition.

use intake_model::{
    ConsentClause, FormState, IssueReason, Question, QuestionKind, QuestionnaireDefinition,
    RevealCondition, Section,
};
use intake_validate::validate_submission;

fn question(id: &str, kind: QuestionKind, required: bool) -> Question {
    Question {
        id: id.to_string(),
        label: id.to_string(),
        kind,
        required,
        options: Vec::new(),
        reveal: None,
    }
}

/// Contact section, a multi-choice section, and the "Other → please specify"
/// pattern from the referral section.
fn sample_definition(consent: bool) -> QuestionnaireDefinition {
    let mut frameworks = question("frameworks", QuestionKind::MultiChoice, true);
    frameworks.options = vec![
        "SOC 2".to_string(),
        "ISO 27001".to_string(),
        "Other".to_string(),
    ];

    let mut referral = question("referral-source", QuestionKind::SingleChoice, false);
    referral.options = vec![
        "Other".to_string(),
        "Web search".to_string(),
        "Referral".to_string(),
    ];

    let mut referral_other = question("referral-other", QuestionKind::Text, true);
    referral_other.reveal = Some(RevealCondition {
        question: "referral-source".to_string(),
        equals: "Other".to_string(),
    });

    QuestionnaireDefinition {
        id: "soc2".to_string(),
        title: "SOC 2 readiness".to_string(),
        category: "soc2".to_string(),
        consent: consent.then(|| ConsentClause {
            prompt: "I consent to be contacted about my enquiry.".to_string(),
        }),
        sections: vec![
            Section {
                id: "contact".to_string(),
                title: "Contact details".to_string(),
                questions: vec![
                    question("name", QuestionKind::Text, true),
                    question("email", QuestionKind::Email, true),
                ],
            },
            Section {
                id: "scope".to_string(),
                title: "Scope".to_string(),
                questions: vec![frameworks, referral, referral_other],
            },
        ],
    }
}

fn filled_state() -> FormState {
    let mut state = FormState::new();
    state.set_single("name", "Jane Doe");
    state.set_single("email", "jane@example.com");
    state.toggle_multi("frameworks", "SOC 2");
    state
}

#[test]
fn empty_state_reports_every_required_question_in_order() {
    let def = sample_definition(false);
    let report = validate_submission(&def, &FormState::new());

    let flagged: Vec<&str> = report
        .issues
        .iter()
        .map(|issue| issue.question_id.as_str())
        .collect();
    // referral-other is behind an unsatisfied reveal and must not appear.
    assert_eq!(flagged, vec!["name", "email", "frameworks"]);
    assert!(
        report
            .issues
            .iter()
            .all(|issue| issue.reason == IssueReason::MissingRequired)
    );
}

#[test]
fn satisfied_state_is_clean() {
    let def = sample_definition(false);
    let report = validate_submission(&def, &filled_state());
    assert!(report.is_clean());
}

#[test]
fn malformed_email_is_reported_without_missing_required() {
    let def = sample_definition(false);
    let mut state = filled_state();
    state.set_single("email", "not-an-email");

    let report = validate_submission(&def, &state);
    assert_eq!(report.len(), 1);
    assert_eq!(report.reason_for("email"), Some(IssueReason::MalformedEmail));
}

#[test]
fn reveal_gates_the_companion_requirement() {
    let def = sample_definition(false);

    // "Web search" leaves the companion inactive: no issue even though it
    // is nominally required and empty.
    let mut state = filled_state();
    state.set_single("referral-source", "Web search");
    assert!(validate_submission(&def, &state).is_clean());

    // "Other" activates it: an empty companion is now missing-required.
    state.set_single("referral-source", "Other");
    let report = validate_submission(&def, &state);
    assert_eq!(
        report.reason_for("referral-other"),
        Some(IssueReason::MissingRequired)
    );

    state.set_single("referral-other", "Saw a conference talk");
    assert!(validate_submission(&def, &state).is_clean());
}

#[test]
fn consent_clause_is_checked_only_where_present() {
    let without = sample_definition(false);
    assert!(validate_submission(&without, &filled_state()).is_clean());

    let with = sample_definition(true);
    let report = validate_submission(&with, &filled_state());
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.issues[0].reason,
        IssueReason::ConsentNotGiven,
        "unticked consent on a consent-bearing variant"
    );

    let mut state = filled_state();
    state.set_consent(true);
    assert!(validate_submission(&with, &state).is_clean());
}

#[test]
fn consent_issue_is_reported_after_field_issues() {
    let def = sample_definition(true);
    let report = validate_submission(&def, &FormState::new());
    let last = report.issues.last().expect("issues present");
    assert_eq!(last.reason, IssueReason::ConsentNotGiven);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_state() -> impl Strategy<Value = FormState> {
        let single = ("[a-z]{1,12}", "[ -~]{0,20}");
        let toggle = ("[a-z]{1,12}", "[A-Za-z0-9 ]{1,10}");
        (
            proptest::collection::vec(single, 0..8),
            proptest::collection::vec(toggle, 0..8),
            any::<bool>(),
        )
            .prop_map(|(singles, toggles, consent)| {
                let mut state = FormState::new();
                for (id, value) in singles {
                    state.set_single(&id, value);
                }
                for (id, option) in toggles {
                    state.toggle_multi(&id, &option);
                }
                state.set_consent(consent);
                state
            })
    }

    proptest! {
        /// Same input, same report, every time.
        #[test]
        fn validator_is_pure(state in arb_state(), consent in any::<bool>()) {
            let def = sample_definition(consent);
            let first = validate_submission(&def, &state);
            let second = validate_submission(&def, &state);
            prop_assert_eq!(first, second);
        }

        /// A toggle applied twice leaves the report unchanged.
        #[test]
        fn toggle_pair_leaves_report_unchanged(
            state in arb_state(),
            id in "[a-z]{1,12}",
            option in "[A-Za-z0-9 ]{1,10}",
        ) {
            let def = sample_definition(false);
            let before = validate_submission(&def, &state);
            let mut toggled = state.snapshot();
            toggled.toggle_multi(&id, &option);
            toggled.toggle_multi(&id, &option);
            prop_assert_eq!(&toggled, &state);
            prop_assert_eq!(validate_submission(&def, &toggled), before);
        }
    }
}
