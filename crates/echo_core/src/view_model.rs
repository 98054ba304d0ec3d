/// Shown when a validation failure carries no message of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Immutable snapshot of the screen, replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EchoViewModel {
    pub input: String,
    pub is_loading: bool,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl EchoViewModel {
    /// Submit is offered only when idle and there is something other than whitespace to send.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }
}
