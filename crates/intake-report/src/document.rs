use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Caller-supplied context for one submission attempt.
///
/// The timestamp is taken here rather than sampled inside the formatter so
/// that identical inputs always produce byte-identical documents.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitMeta {
    /// Path of the page the questionnaire was filled in on.
    pub source_page: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmitMeta {
    pub fn new(source_page: impl Into<String>, submitted_at: DateTime<Utc>) -> Self {
        Self {
            source_page: source_page.into(),
            submitted_at,
        }
    }

    pub(crate) fn timestamp(&self) -> String {
        self.submitted_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// The flat document handed to the relay: everything that was actually sent,
/// reconstructible from the inputs alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionDocument {
    /// Destination/category tag identifying the producing variant.
    pub category: String,
    pub subject: String,
    /// Reply channel: the first answered email-kind question.
    pub reply_to: String,
    /// Human-readable plain-text body.
    pub body: String,
}
