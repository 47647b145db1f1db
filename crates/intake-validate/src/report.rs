use serde::Serialize;

use intake_model::{Issue, IssueReason};

/// Validation findings for one submission attempt, in schema declaration
/// order (consent last).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    #[serde(rename = "questionnaire")]
    pub questionnaire_id: String,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn new(questionnaire_id: &str) -> Self {
        Self {
            questionnaire_id: questionnaire_id.to_string(),
            issues: Vec::new(),
        }
    }

    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// A clean report is the precondition for contacting the relay.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether any issue targets the given question.
    pub fn flags(&self, question_id: &str) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.question_id == question_id)
    }

    pub fn reason_for(&self, question_id: &str) -> Option<IssueReason> {
        self.issues
            .iter()
            .find(|issue| issue.question_id == question_id)
            .map(|issue| issue.reason)
    }

    /// The single aggregate message the shell shows. The shell never shows
    /// an accumulating log, only the latest relevant message.
    pub fn first_message(&self) -> Option<&'static str> {
        self.issues.first().map(|issue| issue.reason.message())
    }
}
