//! Transport adapter for completed submissions.
//!
//! The engine treats delivery as a black box behind the [`Relay`] trait:
//! exactly one `deliver` call per submission attempt, an opaque
//! acknowledgment on success, and a human-readable reason on failure. The
//! shipped implementation, [`HttpRelay`], POSTs the formatted document to an
//! external email-relay endpoint as JSON and maps its response envelope.

mod client;
mod error;

pub use client::{HttpRelay, Relay, RelayAck, RelayConfig};
pub use error::RelayError;
