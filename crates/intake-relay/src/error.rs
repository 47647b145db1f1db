use thiserror::Error;

/// A failed delivery attempt.
///
/// Reasons are surfaced to the user verbatim and never reinterpreted; the
/// engine performs no automatic retry, since a duplicate lead email is worse
/// than asking the prospect to press the button again.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request never completed (connection, TLS, timeout at the HTTP
    /// layer).
    #[error("could not reach the relay: {0}")]
    Request(#[from] reqwest::Error),

    /// The relay answered but refused the submission.
    #[error("relay rejected the submission ({status}): {reason}")]
    Rejected { status: u16, reason: String },

    /// The relay answered 2xx with a body that does not match the contract.
    #[error("relay response was not understood: {message}")]
    MalformedResponse { message: String },
}
