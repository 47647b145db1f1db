use std::time::{Duration, Instant};

/// How long a settled banner stays visible. Done-ness is independent of
/// banner visibility and never reverts.
pub const BANNER_QUIET_PERIOD: Duration = Duration::from_secs(8);

/// Lifecycle of the submit capability for one questionnaire visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    /// One delivery is in flight; no second attempt may start.
    Submitting,
    /// Terminal: the lead was delivered. A fresh session is the only way to
    /// submit again, which is what prevents duplicate lead emails.
    Succeeded { message: String },
    /// Recoverable: the prospect may edit and resubmit.
    Failed { message: String },
}

impl SubmitState {
    fn settled_message(&self) -> Option<&str> {
        match self {
            SubmitState::Succeeded { message } | SubmitState::Failed { message } => Some(message),
            SubmitState::Idle | SubmitState::Submitting => None,
        }
    }
}

/// The submission state machine.
///
/// Transitions are driven by the owning session: `begin_attempt` on a clean
/// validation pass, `settle_ok`/`settle_err` when the relay call resolves.
/// Each attempt carries a counter; a settle whose counter no longer matches
/// the current attempt is discarded rather than applied.
#[derive(Debug)]
pub struct SubmitMachine {
    state: SubmitState,
    attempt: u64,
    completed: bool,
    settled_at: Option<Instant>,
}

impl Default for SubmitMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitMachine {
    pub fn new() -> Self {
        Self {
            state: SubmitState::Idle,
            attempt: 0,
            completed: false,
            settled_at: None,
        }
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// True once a submission has succeeded; never reverts.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Start a new attempt. Returns its counter, or `None` when an attempt
    /// is already in flight or the machine is terminally complete.
    pub fn begin_attempt(&mut self) -> Option<u64> {
        if self.is_in_flight() || self.completed {
            return None;
        }
        self.attempt += 1;
        self.state = SubmitState::Submitting;
        self.settled_at = None;
        Some(self.attempt)
    }

    /// Apply a successful delivery result. Returns false when the result is
    /// stale (its attempt counter does not match) and was discarded.
    pub fn settle_ok(&mut self, attempt: u64, message: String, now: Instant) -> bool {
        if !self.accepts(attempt) {
            return false;
        }
        self.state = SubmitState::Succeeded { message };
        self.completed = true;
        self.settled_at = Some(now);
        true
    }

    /// Apply a failed delivery result. Returns false when stale.
    pub fn settle_err(&mut self, attempt: u64, message: String, now: Instant) -> bool {
        if !self.accepts(attempt) {
            return false;
        }
        self.state = SubmitState::Failed { message };
        self.settled_at = Some(now);
        true
    }

    fn accepts(&self, attempt: u64) -> bool {
        self.is_in_flight() && attempt == self.attempt
    }

    /// The settled status message, while it is still within the quiet
    /// period. Returns `None` once the banner has faded; `is_completed`
    /// is unaffected.
    pub fn banner(&self, now: Instant) -> Option<&str> {
        let settled_at = self.settled_at?;
        if now.duration_since(settled_at) >= BANNER_QUIET_PERIOD {
            return None;
        }
        self.state.settled_message()
    }
}
