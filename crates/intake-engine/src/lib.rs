//! Questionnaire session engine.
//!
//! Orchestrates the pieces the other crates provide: a [`Session`] owns one
//! visit's answers and drives validate → format → deliver through the
//! [`SubmitMachine`] lifecycle (`Idle`, `Submitting`, `Succeeded`,
//! `Failed`).
//!
//! Ordering guarantees, and the only ones the system needs:
//!
//! - at most one in-flight relay call per session (re-entrancy guard);
//! - a stale attempt's result is discarded by attempt-counter comparison,
//!   never applied to a newer attempt;
//! - `Succeeded` is terminal for the submit capability, independent of how
//!   long its banner stays visible.

mod machine;
mod session;

pub use machine::{BANNER_QUIET_PERIOD, SubmitMachine, SubmitState};
pub use session::{DEFAULT_SUCCESS_MESSAGE, Session, SubmitOutcome};
