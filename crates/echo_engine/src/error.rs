use thiserror::Error;

use echo_core::UNKNOWN_ERROR;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input cannot be empty.")]
    EmptyInput,
    #[error("The server rejected your input. Try a different value.")]
    Rejected,
    /// Any other failure of the validation service.
    #[error("{}", .message.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Unavailable { message: Option<String> },
}

impl ValidationError {
    /// Message carried by the failure, if any. The controller falls back to
    /// [`UNKNOWN_ERROR`] when this is `None`.
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationError::Unavailable { message } => message.clone(),
            other => Some(other.to_string()),
        }
    }
}
