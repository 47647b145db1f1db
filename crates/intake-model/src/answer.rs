use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered set of selected option labels.
///
/// Insertion order is preserved (it is the order answers appear in the
/// formatted document) and duplicates are impossible. Backed by a `Vec`
/// because option lists are small and order matters more than lookup cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet(Vec<String>);

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `label` if present, append it otherwise. Applying the same
    /// toggle twice returns the set to its prior contents.
    pub fn toggle(&mut self, label: &str) {
        if let Some(index) = self.0.iter().position(|existing| existing == label) {
            self.0.remove(index);
        } else {
            self.0.push(label.to_string());
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|existing| existing == label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for OptionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for label in iter {
            if !set.contains(&label) {
                set.0.push(label);
            }
        }
        set
    }
}

/// Current answer for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text, email, and single-choice answers.
    Single(String),
    /// Multi-choice answers.
    Multi(OptionSet),
}

/// Mutable record of a prospect's answers for one questionnaire visit.
///
/// Created empty when a questionnaire mounts and discarded when the visit
/// ends; nothing is persisted across visits. Mutation happens exclusively
/// through [`set_single`](Self::set_single),
/// [`toggle_multi`](Self::toggle_multi), and
/// [`set_consent`](Self::set_consent), none of which can fail or block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
    consent_given: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value of a single-valued question.
    pub fn set_single(&mut self, question_id: &str, value: impl Into<String>) {
        self.values
            .insert(question_id.to_string(), FieldValue::Single(value.into()));
    }

    /// Toggle one option of a multi-choice question. An entry whose set
    /// becomes empty is dropped so the state compares equal to one that
    /// never held it.
    pub fn toggle_multi(&mut self, question_id: &str, option: &str) {
        let mut set = match self.values.remove(question_id) {
            Some(FieldValue::Multi(set)) => set,
            // A single value under this id is replaced by a fresh set; kinds
            // never change for a given id, so this only happens if the shell
            // mixes up ids.
            Some(FieldValue::Single(_)) | None => OptionSet::new(),
        };
        set.toggle(option);
        if !set.is_empty() {
            self.values
                .insert(question_id.to_string(), FieldValue::Multi(set));
        }
    }

    pub fn set_consent(&mut self, given: bool) {
        self.consent_given = given;
    }

    pub fn consent_given(&self) -> bool {
        self.consent_given
    }

    /// Immutable copy for handoff to the validator and formatter, so edits
    /// made while a submission is in flight cannot corrupt it.
    pub fn snapshot(&self) -> FormState {
        self.clone()
    }

    pub fn value(&self, question_id: &str) -> Option<&FieldValue> {
        self.values.get(question_id)
    }

    /// The single value for a question, if one is set.
    pub fn single(&self, question_id: &str) -> Option<&str> {
        match self.values.get(question_id) {
            Some(FieldValue::Single(value)) => Some(value),
            _ => None,
        }
    }

    /// The multi-choice set for a question, if one is set.
    pub fn multi(&self, question_id: &str) -> Option<&OptionSet> {
        match self.values.get(question_id) {
            Some(FieldValue::Multi(set)) => Some(set),
            _ => None,
        }
    }

    /// Whether the question holds a usable answer: a non-blank single value
    /// or a non-empty set.
    pub fn is_answered(&self, question_id: &str) -> bool {
        match self.values.get(question_id) {
            Some(FieldValue::Single(value)) => !value.trim().is_empty(),
            Some(FieldValue::Multi(set)) => !set.is_empty(),
            None => false,
        }
    }

    /// Whether the question currently holds `expected`, either as its single
    /// value or as a member of its set. This is how reveal triggers match.
    pub fn has_value(&self, question_id: &str, expected: &str) -> bool {
        match self.values.get(question_id) {
            Some(FieldValue::Single(value)) => value == expected,
            Some(FieldValue::Multi(set)) => set.contains(expected),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && !self.consent_given
    }

    /// All current answers, keyed by question id.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values
            .iter()
            .map(|(question_id, value)| (question_id.as_str(), value))
    }
}
