use echo_logging::{echo_debug, echo_warn};

use crate::{EchoState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: EchoState, msg: Msg) -> (EchoState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::Submitted => match state.begin_submission() {
            Some(submission_id) => {
                echo_debug!(
                    "Submission {} started input_len={}",
                    submission_id,
                    state.input().len()
                );
                vec![Effect::Validate {
                    submission_id,
                    text: state.input().to_string(),
                }]
            }
            None => {
                echo_debug!("Submit ignored; a submission is already outstanding");
                Vec::new()
            }
        },
        Msg::ValidationSucceeded {
            submission_id,
            value,
        } => {
            if state.is_outstanding(submission_id) {
                state.finish_success(value);
            } else {
                echo_warn!("Ignoring stale success for submission {}", submission_id);
            }
            Vec::new()
        }
        Msg::ValidationFailed {
            submission_id,
            message,
        } => {
            if state.is_outstanding(submission_id) {
                state.finish_failure(message);
            } else {
                echo_warn!("Ignoring stale failure for submission {}", submission_id);
            }
            Vec::new()
        }
    };

    (state, effects)
}
