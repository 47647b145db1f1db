//! Formatter output tests.

use chrono::{TimeZone, Utc};
use intake_model::{
    ConsentClause, FormState, Question, QuestionKind, QuestionnaireDefinition, RevealCondition,
    Section,
};
use intake_report::{SubmitMeta, format_submission};

fn question(id: &str, label: &str, kind: QuestionKind, required: bool) -> Question {
    Question {
        id: id.to_string(),
        label: label.to_string(),
        kind,
        required,
        options: Vec::new(),
        reveal: None,
    }
}

fn sample_definition() -> QuestionnaireDefinition {
    let mut frameworks = question(
        "frameworks",
        "Which frameworks do you already operate?",
        QuestionKind::MultiChoice,
        true,
    );
    frameworks.options = vec![
        "ISO 27001".to_string(),
        "SOC 2".to_string(),
        "None yet".to_string(),
        "Other".to_string(),
    ];

    let mut dpo = question(
        "dpo",
        "Do you have a Data Protection Officer?",
        QuestionKind::SingleChoice,
        false,
    );
    dpo.options = vec![
        "Yes".to_string(),
        "No".to_string(),
        "Outsourced".to_string(),
    ];

    let mut referral = question(
        "referral-source",
        "How did you hear about us?",
        QuestionKind::SingleChoice,
        false,
    );
    referral.options = vec![
        "Web search".to_string(),
        "Referral".to_string(),
        "Other".to_string(),
    ];

    let mut referral_other =
        question("referral-other", "Please specify", QuestionKind::Text, true);
    referral_other.reveal = Some(RevealCondition {
        question: "referral-source".to_string(),
        equals: "Other".to_string(),
    });

    QuestionnaireDefinition {
        id: "gdpr".to_string(),
        title: "GDPR readiness assessment".to_string(),
        category: "gdpr".to_string(),
        consent: Some(ConsentClause {
            prompt: "I consent to be contacted about my enquiry.".to_string(),
        }),
        sections: vec![
            Section {
                id: "contact".to_string(),
                title: "Contact details".to_string(),
                questions: vec![
                    question("name", "Full name", QuestionKind::Text, true),
                    question("company", "Company", QuestionKind::Text, false),
                    question("email", "Work email", QuestionKind::Email, true),
                ],
            },
            Section {
                id: "posture".to_string(),
                title: "Compliance posture".to_string(),
                questions: vec![frameworks, dpo],
            },
            Section {
                id: "referral".to_string(),
                title: "About your enquiry".to_string(),
                questions: vec![referral, referral_other],
            },
        ],
    }
}

fn sample_state() -> FormState {
    let mut state = FormState::new();
    state.set_single("name", "Jane Doe");
    state.set_single("company", "");
    state.set_single("email", "jane@example.com");
    state.toggle_multi("frameworks", "SOC 2");
    state.toggle_multi("frameworks", "ISO 27001");
    state.set_single("dpo", "Outsourced");
    state.set_single("referral-source", "Web search");
    state.set_consent(true);
    state
}

fn sample_meta() -> SubmitMeta {
    let submitted_at = Utc
        .with_ymd_and_hms(2025, 11, 3, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    SubmitMeta::new("/questionnaires/gdpr", submitted_at)
}

#[test]
fn document_matches_expected_layout() {
    let document = format_submission(&sample_definition(), &sample_state(), &sample_meta());

    assert_eq!(document.category, "gdpr");
    assert_eq!(document.reply_to, "jane@example.com");
    assert_eq!(
        document.subject,
        "New GDPR readiness assessment enquiry from jane@example.com"
    );

    let expected = "\
GDPR readiness assessment
Submitted: 2025-11-03T09:30:00Z
Source page: /questionnaires/gdpr
Reply-to: jane@example.com

== Contact details ==
Full name: Jane Doe
Work email: jane@example.com

== Compliance posture ==
Which frameworks do you already operate?: SOC 2, ISO 27001
Do you have a Data Protection Officer?: Outsourced

== About your enquiry ==
How did you hear about us?: Web search

I consent to be contacted about my enquiry.: yes
";
    assert_eq!(document.body, expected);
}

#[test]
fn document_body_snapshot() {
    let document = format_submission(&sample_definition(), &sample_state(), &sample_meta());
    insta::assert_snapshot!("gdpr_document_body", document.body);
}

#[test]
fn identical_inputs_produce_byte_identical_documents() {
    let first = format_submission(&sample_definition(), &sample_state(), &sample_meta());
    let second = format_submission(&sample_definition(), &sample_state(), &sample_meta());
    assert_eq!(first, second);
}

#[test]
fn multi_values_keep_insertion_order() {
    let mut state = sample_state();
    // Re-toggle to reverse the stored order.
    state.toggle_multi("frameworks", "SOC 2");
    state.toggle_multi("frameworks", "SOC 2");
    let document = format_submission(&sample_definition(), &state, &sample_meta());
    assert!(
        document
            .body
            .contains("Which frameworks do you already operate?: ISO 27001, SOC 2")
    );
}

#[test]
fn revealed_companion_appears_once_triggered() {
    let mut state = sample_state();
    state.set_single("referral-source", "Other");
    state.set_single("referral-other", "Saw a conference talk");

    let document = format_submission(&sample_definition(), &state, &sample_meta());
    assert!(document.body.contains("How did you hear about us?: Other"));
    assert!(document.body.contains("Please specify: Saw a conference talk"));
}

#[test]
fn unsatisfied_reveal_and_blank_answers_are_omitted() {
    let document = format_submission(&sample_definition(), &sample_state(), &sample_meta());
    assert!(!document.body.contains("Please specify"));
    assert!(!document.body.contains("Company"));
}

#[test]
fn consent_line_reflects_state_and_is_absent_without_clause() {
    let mut definition = sample_definition();
    definition.consent = None;
    let document = format_submission(&definition, &sample_state(), &sample_meta());
    assert!(!document.body.contains("I consent"));

    let mut state = sample_state();
    state.set_consent(false);
    let document = format_submission(&sample_definition(), &state, &sample_meta());
    assert!(
        document
            .body
            .contains("I consent to be contacted about my enquiry.: no")
    );
}
