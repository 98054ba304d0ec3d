#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the text field.
    InputChanged(String),
    /// User activated submit.
    Submitted,
    /// Validator accepted the input of a submission.
    ValidationSucceeded {
        submission_id: crate::SubmissionId,
        value: String,
    },
    /// Validator rejected or failed a submission. `None` when the failure had no message.
    ValidationFailed {
        submission_id: crate::SubmissionId,
        message: Option<String>,
    },
}
