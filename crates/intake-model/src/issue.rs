use serde::Serialize;
use std::fmt;

/// Pseudo question id used for the consent checkbox, which is declared on
/// the definition rather than inside a section.
pub const CONSENT_FIELD_ID: &str = "consent";

/// Why a submission attempt was rejected for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueReason {
    /// A required, currently active question has no usable answer.
    MissingRequired,
    /// An email-kind question holds a value that is not an address.
    MalformedEmail,
    /// The variant requires consent to be contacted and it was not given.
    ConsentNotGiven,
}

impl IssueReason {
    /// The message shown next to the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            IssueReason::MissingRequired => "This field is required.",
            IssueReason::MalformedEmail => "Please enter a valid email address.",
            IssueReason::ConsentNotGiven => "Please confirm you consent to be contacted.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueReason::MissingRequired => "missing-required",
            IssueReason::MalformedEmail => "malformed-email",
            IssueReason::ConsentNotGiven => "consent-not-given",
        }
    }
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One field-level validation finding.
///
/// Validation findings are expected and fully recoverable by editing; they
/// are never logged as exceptional and never reach the relay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    /// The offending question, or [`CONSENT_FIELD_ID`] for the consent
    /// checkbox.
    pub question_id: String,
    pub reason: IssueReason,
}

impl Issue {
    pub fn new(question_id: impl Into<String>, reason: IssueReason) -> Self {
        Self {
            question_id: question_id.into(),
            reason,
        }
    }
}
