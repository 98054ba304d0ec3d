#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the validator on `text` and report back with the same submission id.
    Validate {
        submission_id: crate::SubmissionId,
        text: String,
    },
}
