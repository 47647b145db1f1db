use std::time::Instant;

use tracing::{debug, info, warn};

use intake_model::{FormState, QuestionnaireDefinition};
use intake_relay::Relay;
use intake_report::{SubmitMeta, format_submission};
use intake_validate::{ValidationReport, validate_submission};

use crate::machine::{SubmitMachine, SubmitState};

/// Fallback confirmation when the relay acknowledges without a message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you. We will be in touch shortly.";

/// What a `submit` call came to.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Delivered; the session is now terminally complete.
    Accepted { message: String },
    /// Validation found issues; nothing was sent and the prospect can edit
    /// and resubmit immediately.
    Rejected(ValidationReport),
    /// The relay refused or could not be reached; the reason is surfaced
    /// verbatim and a manual retry is allowed.
    Failed { message: String },
    /// Refused: an attempt is already in flight.
    InFlight,
    /// Refused: a previous attempt already succeeded.
    AlreadyCompleted,
    /// The attempt settled after a newer one had started; its result was
    /// discarded.
    Superseded,
}

/// One questionnaire visit: the definition, the answers collected so far,
/// and the submission lifecycle.
///
/// Every mount owns an independent session; nothing is shared between
/// concurrently open questionnaires, so repeated navigations cannot
/// cross-contaminate state. Dropping the session discards the answers.
#[derive(Debug)]
pub struct Session<R: Relay> {
    definition: QuestionnaireDefinition,
    answers: FormState,
    machine: SubmitMachine,
    relay: R,
}

impl<R: Relay> Session<R> {
    /// The definition should come from a verified registry; a session never
    /// re-checks schema invariants at runtime.
    pub fn new(definition: QuestionnaireDefinition, relay: R) -> Self {
        Self {
            definition,
            answers: FormState::new(),
            machine: SubmitMachine::new(),
            relay,
        }
    }

    pub fn definition(&self) -> &QuestionnaireDefinition {
        &self.definition
    }

    pub fn answers(&self) -> &FormState {
        &self.answers
    }

    pub fn state(&self) -> &SubmitState {
        self.machine.state()
    }

    pub fn is_completed(&self) -> bool {
        self.machine.is_completed()
    }

    /// The settled status banner, if still within its quiet period.
    pub fn banner(&self, now: Instant) -> Option<&str> {
        self.machine.banner(now)
    }

    /// Edits are accepted while idle or after a failure; they are dropped
    /// while a delivery is in flight (the snapshot being sent must not
    /// change underneath it) and after terminal success.
    fn is_editable(&self) -> bool {
        !self.machine.is_in_flight() && !self.machine.is_completed()
    }

    pub fn set_single(&mut self, question_id: &str, value: impl Into<String>) {
        if !self.is_editable() {
            debug!(question_id, "edit dropped: session not editable");
            return;
        }
        self.answers.set_single(question_id, value);
    }

    pub fn toggle_multi(&mut self, question_id: &str, option: &str) {
        if !self.is_editable() {
            debug!(question_id, "edit dropped: session not editable");
            return;
        }
        self.answers.toggle_multi(question_id, option);
    }

    pub fn set_consent(&mut self, given: bool) {
        if !self.is_editable() {
            debug!("consent edit dropped: session not editable");
            return;
        }
        self.answers.set_consent(given);
    }

    /// Drive one submission attempt: validate, and on a clean report format
    /// the snapshot and deliver it through the relay exactly once.
    ///
    /// Validation failures never reach the relay; relay failures are never
    /// reinterpreted as validation issues. There is no cancellation: once in
    /// flight, the attempt runs to completion.
    pub async fn submit(&mut self, meta: SubmitMeta) -> SubmitOutcome {
        if self.machine.is_completed() {
            debug!(questionnaire = %self.definition.id, "submit refused: already completed");
            return SubmitOutcome::AlreadyCompleted;
        }
        if self.machine.is_in_flight() {
            debug!(questionnaire = %self.definition.id, "submit refused: attempt in flight");
            return SubmitOutcome::InFlight;
        }

        let snapshot = self.answers.snapshot();
        let report = validate_submission(&self.definition, &snapshot);
        if !report.is_clean() {
            debug!(
                questionnaire = %self.definition.id,
                issues = report.len(),
                "submission rejected by validation"
            );
            return SubmitOutcome::Rejected(report);
        }

        let Some(attempt) = self.machine.begin_attempt() else {
            return SubmitOutcome::InFlight;
        };
        info!(questionnaire = %self.definition.id, attempt, "delivering submission");

        let document = format_submission(&self.definition, &snapshot, &meta);
        match self.relay.deliver(&document).await {
            Ok(ack) => {
                let message = ack
                    .message
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                if self.machine.settle_ok(attempt, message.clone(), Instant::now()) {
                    info!(questionnaire = %self.definition.id, attempt, "submission delivered");
                    SubmitOutcome::Accepted { message }
                } else {
                    debug!(attempt, "stale delivery result discarded");
                    SubmitOutcome::Superseded
                }
            }
            Err(error) => {
                let message = error.to_string();
                warn!(questionnaire = %self.definition.id, attempt, %error, "delivery failed");
                if self.machine.settle_err(attempt, message.clone(), Instant::now()) {
                    SubmitOutcome::Failed { message }
                } else {
                    debug!(attempt, "stale delivery result discarded");
                    SubmitOutcome::Superseded
                }
            }
        }
    }
}
