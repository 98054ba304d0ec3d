use crate::view_model::{EchoViewModel, UNKNOWN_ERROR};

pub type SubmissionId = u64;

/// Where the screen is in the submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting { submission_id: SubmissionId },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EchoState {
    input: String,
    phase: Phase,
    result: Option<String>,
    error: Option<String>,
    last_submission_id: SubmissionId,
    dirty: bool,
}

impl EchoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> EchoViewModel {
        EchoViewModel {
            input: self.input.clone(),
            is_loading: self.is_loading(),
            result: self.result.clone(),
            error: self.error.clone(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
        self.error = None;
        self.dirty = true;
    }

    /// Moves `Idle -> Submitting`. Returns `None` when a submission is already outstanding.
    pub(crate) fn begin_submission(&mut self) -> Option<SubmissionId> {
        if self.is_loading() {
            return None;
        }
        self.last_submission_id += 1;
        let submission_id = self.last_submission_id;
        self.phase = Phase::Submitting { submission_id };
        self.result = None;
        self.error = None;
        self.dirty = true;
        Some(submission_id)
    }

    /// True if `submission_id` is the one currently outstanding.
    pub(crate) fn is_outstanding(&self, submission_id: SubmissionId) -> bool {
        self.phase == Phase::Submitting { submission_id }
    }

    pub(crate) fn finish_success(&mut self, value: String) {
        self.phase = Phase::Idle;
        self.result = Some(value);
        self.error = None;
        self.dirty = true;
    }

    pub(crate) fn finish_failure(&mut self, message: Option<String>) {
        self.phase = Phase::Idle;
        self.result = None;
        self.error = Some(message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()));
        self.dirty = true;
    }
}
