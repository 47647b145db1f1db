use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::answer::FormState;
use crate::error::SchemaError;

/// What kind of input a question collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Single-line free text.
    Text,
    /// Single-line text holding an email address.
    Email,
    /// Multi-line free text.
    #[serde(rename = "textarea")]
    TextArea,
    /// Exactly one of the declared options.
    SingleChoice,
    /// Any subset of the declared options.
    MultiChoice,
}

impl QuestionKind {
    /// Returns true for kinds that declare an option list.
    pub fn is_choice(&self) -> bool {
        matches!(self, QuestionKind::SingleChoice | QuestionKind::MultiChoice)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::Email => "email",
            QuestionKind::TextArea => "textarea",
            QuestionKind::SingleChoice => "single-choice",
            QuestionKind::MultiChoice => "multi-choice",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Makes a companion question meaningful only while another question holds a
/// specific value (the "please specify" pattern).
///
/// The referenced question must be declared earlier in the definition; this
/// is enforced by [`QuestionnaireDefinition::verify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealCondition {
    /// Id of the triggering question.
    pub question: String,
    /// Value that satisfies the condition.
    pub equals: String,
}

impl RevealCondition {
    /// Whether the trigger is currently satisfied: the referenced question's
    /// single value equals, or its multi set contains, the trigger value.
    pub fn is_met(&self, state: &FormState) -> bool {
        state.has_value(&self.question, &self.equals)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// Prompt text shown to the prospect.
    pub label: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub required: bool,
    /// Option labels, in display order. Empty for non-choice kinds.
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal: Option<RevealCondition>,
}

impl Question {
    /// Whether this question is currently relevant: it has no reveal
    /// condition, or the condition is satisfied by the given state.
    ///
    /// Inactive questions are never validated and never rendered into the
    /// submission document, even when nominally required.
    pub fn is_active(&self, state: &FormState) -> bool {
        self.reveal.as_ref().is_none_or(|reveal| reveal.is_met(state))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// Declaration order is display order and the canonical order of the
    /// formatted submission document.
    pub questions: Vec<Question>,
}

/// Prompt text for a "consent to be contacted" checkbox.
///
/// Only some variants carry one; the validator reads the definition rather
/// than assuming a universal rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentClause {
    pub prompt: String,
}

/// A complete discovery questionnaire: one per compliance regime, authored
/// once, immutable at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireDefinition {
    /// Stable slug, also the routing path segment of the variant.
    pub id: String,
    pub title: String,
    /// Destination/category tag carried on the relay request.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent: Option<ConsentClause>,
    pub sections: Vec<Section>,
}

impl QuestionnaireDefinition {
    /// Iterate all questions in declaration order across sections.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|section| &section.questions)
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|question| question.id == id)
    }

    pub fn question_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.questions.len())
            .sum()
    }

    /// Check the structural invariants of this definition.
    ///
    /// Authoring defects are programmer errors: a definition that fails here
    /// must never reach runtime validation, so registries call this at load
    /// time and treat any error as fatal.
    pub fn verify(&self) -> Result<(), SchemaError> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut has_reply_channel = false;

        for question in self.questions() {
            if seen.contains(question.id.as_str()) {
                return Err(SchemaError::DuplicateQuestionId {
                    questionnaire: self.id.clone(),
                    id: question.id.clone(),
                });
            }

            if question.kind.is_choice() {
                if question.options.is_empty() {
                    return Err(SchemaError::MissingOptions {
                        id: question.id.clone(),
                        kind: question.kind,
                    });
                }
            } else if !question.options.is_empty() {
                return Err(SchemaError::UnexpectedOptions {
                    id: question.id.clone(),
                    kind: question.kind,
                });
            }

            if let Some(reveal) = &question.reveal {
                // `seen` holds exactly the ids declared before this question,
                // so a self-reference or forward reference both fail here.
                if !seen.contains(reveal.question.as_str()) {
                    return Err(SchemaError::RevealTargetNotEarlier {
                        id: question.id.clone(),
                        target: reveal.question.clone(),
                    });
                }
                if let Some(target) = self.question(&reveal.question) {
                    if target.kind.is_choice() && !target.options.contains(&reveal.equals) {
                        return Err(SchemaError::RevealValueUnknown {
                            id: question.id.clone(),
                            target: reveal.question.clone(),
                            value: reveal.equals.clone(),
                        });
                    }
                }
            }

            if question.kind == QuestionKind::Email && question.required {
                has_reply_channel = true;
            }

            seen.insert(&question.id);
        }

        if !has_reply_channel {
            return Err(SchemaError::NoReplyChannel {
                questionnaire: self.id.clone(),
            });
        }

        Ok(())
    }
}
