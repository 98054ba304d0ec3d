use echo_core::EchoViewModel;

pub const TITLE: &str = "Text Echo";
pub const LABEL_INPUT: &str = "Validate text";
pub const PLACEHOLDER_INPUT: &str = "Type something...";
pub const ACTION_SUBMIT: &str = "Submit";
pub const ACTION_SUBMITTING: &str = "Submitting...";

/// Renders a snapshot as the lines of one screen frame.
pub fn render(view: &EchoViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);
    lines.push(format!("== {TITLE} =="));

    let field = if view.input.is_empty() {
        PLACEHOLDER_INPUT
    } else {
        view.input.as_str()
    };
    lines.push(format!("{LABEL_INPUT}: [{field}]"));
    if let Some(error) = &view.error {
        lines.push(format!("  ! {error}"));
    }

    let button = if view.is_loading {
        format!("<{ACTION_SUBMITTING}>")
    } else if view.can_submit() {
        format!("<{ACTION_SUBMIT}>")
    } else {
        format!("<{ACTION_SUBMIT}> (disabled)")
    };
    lines.push(button);

    if let Some(result) = &view.result {
        lines.push(format!("Echo: {result}"));
    }
    lines
}
