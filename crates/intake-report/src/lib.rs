//! Submission document formatting.
//!
//! Pure functions from `(definition, state snapshot, metadata)` to the flat
//! plain-text document the relay delivers. Determinism matters twice over:
//! snapshot tests pin the exact output, and the document is the audit record
//! of what was actually sent.

mod document;
mod text;

pub use document::{SubmissionDocument, SubmitMeta};
pub use text::format_submission;
