use std::fmt::Write;

use intake_model::{FieldValue, FormState, QuestionKind, QuestionnaireDefinition};

use crate::document::{SubmissionDocument, SubmitMeta};

/// Render a validated state snapshot into the outbound document.
///
/// Sections and questions appear in schema declaration order; multi-choice
/// answers keep their insertion order; questions that are unanswered or
/// behind an unsatisfied reveal condition are omitted. Identical inputs
/// produce byte-identical output.
pub fn format_submission(
    definition: &QuestionnaireDefinition,
    state: &FormState,
    meta: &SubmitMeta,
) -> SubmissionDocument {
    let reply_to = reply_address(definition, state).unwrap_or_default();

    let mut body = String::new();
    let _ = writeln!(body, "{}", definition.title);
    let _ = writeln!(body, "Submitted: {}", meta.timestamp());
    let _ = writeln!(body, "Source page: {}", meta.source_page);
    let _ = writeln!(body, "Reply-to: {reply_to}");

    for section in &definition.sections {
        let answered: Vec<_> = section
            .questions
            .iter()
            .filter(|question| question.is_active(state) && state.is_answered(&question.id))
            .collect();
        if answered.is_empty() {
            continue;
        }

        let _ = writeln!(body);
        let _ = writeln!(body, "== {} ==", section.title);
        for question in answered {
            match state.value(&question.id) {
                Some(FieldValue::Single(value)) => {
                    let _ = writeln!(body, "{}: {}", question.label, value.trim());
                }
                Some(FieldValue::Multi(set)) => {
                    let joined: Vec<&str> = set.iter().collect();
                    let _ = writeln!(body, "{}: {}", question.label, joined.join(", "));
                }
                None => {}
            }
        }
    }

    if let Some(consent) = &definition.consent {
        let _ = writeln!(body);
        let answer = if state.consent_given() { "yes" } else { "no" };
        let _ = writeln!(body, "{}: {}", consent.prompt, answer);
    }

    SubmissionDocument {
        category: definition.category.clone(),
        subject: format!("New {} enquiry from {reply_to}", definition.title),
        reply_to,
        body,
    }
}

/// The first answered email-kind question, in declaration order. Every
/// definition declares at least one required email question, so a snapshot
/// that passed validation always yields an address here.
fn reply_address(definition: &QuestionnaireDefinition, state: &FormState) -> Option<String> {
    definition
        .questions()
        .filter(|question| question.kind == QuestionKind::Email)
        .find_map(|question| state.single(&question.id))
        .map(|value| value.trim().to_string())
}
