use std::sync::Once;

use echo_core::{update, EchoState, EchoViewModel, Effect, Msg, Phase, UNKNOWN_ERROR};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(echo_logging::initialize_for_tests);
}

fn submit_text(state: EchoState, input: &str) -> (EchoState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::Submitted)
}

#[test]
fn initial_view_is_empty() {
    let view = EchoState::new().view();

    assert_eq!(view, EchoViewModel::default());
    assert!(!view.can_submit());
}

#[test]
fn input_changed_replaces_input_and_marks_dirty() {
    init_logging();
    let state = EchoState::new();

    let (mut next, effects) = update(state, Msg::InputChanged("  hello  ".to_string()));

    assert_eq!(next.view().input, "  hello  ");
    assert!(next.view().can_submit());
    assert!(effects.is_empty());
    assert!(next.consume_dirty());
    assert!(!next.consume_dirty());
}

#[test]
fn submit_emits_validate_with_raw_input() {
    init_logging();
    let (state, effects) = submit_text(EchoState::new(), "  hello  ");

    assert_eq!(state.phase(), Phase::Submitting { submission_id: 1 });
    assert!(state.view().is_loading);
    assert!(!state.view().can_submit());
    assert_eq!(
        effects,
        vec![Effect::Validate {
            submission_id: 1,
            text: "  hello  ".to_string(),
        }]
    );
}

#[test]
fn submit_while_loading_is_ignored() {
    init_logging();
    let (mut state, _) = submit_text(EchoState::new(), "hello");
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut next, effects) = update(state, Msg::Submitted);

    assert_eq!(next, before);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn success_sets_result_and_returns_to_idle() {
    init_logging();
    let (state, _) = submit_text(EchoState::new(), "  hello  ");

    let (state, effects) = update(
        state,
        Msg::ValidationSucceeded {
            submission_id: 1,
            value: "hello".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(
        state.view(),
        EchoViewModel {
            input: "  hello  ".to_string(),
            is_loading: false,
            result: Some("hello".to_string()),
            error: None,
        }
    );
}

#[test]
fn failure_sets_error_and_clears_result() {
    init_logging();
    let (state, _) = submit_text(EchoState::new(), "ok");
    let (state, _) = update(
        state,
        Msg::ValidationSucceeded {
            submission_id: 1,
            value: "ok".to_string(),
        },
    );
    let (state, _) = submit_text(state, "please fail");
    assert_eq!(state.view().result, None);

    let (state, _) = update(
        state,
        Msg::ValidationFailed {
            submission_id: 2,
            message: Some("The server rejected your input. Try a different value.".to_string()),
        },
    );

    let view = state.view();
    assert!(!view.is_loading);
    assert_eq!(view.result, None);
    assert_eq!(
        view.error.as_deref(),
        Some("The server rejected your input. Try a different value.")
    );
}

#[test]
fn failure_without_message_falls_back_to_unknown_error() {
    init_logging();
    let (state, _) = submit_text(EchoState::new(), "anything");
    let (state, _) = update(
        state,
        Msg::ValidationFailed {
            submission_id: 1,
            message: None,
        },
    );
    assert_eq!(state.view().error.as_deref(), Some(UNKNOWN_ERROR));
}

#[test]
fn empty_failure_message_is_shown_as_is() {
    init_logging();
    let (state, _) = submit_text(EchoState::new(), "anything");
    let (state, _) = update(
        state,
        Msg::ValidationFailed {
            submission_id: 1,
            message: Some(String::new()),
        },
    );
    assert_eq!(state.view().error.as_deref(), Some(""));
    assert_eq!(state.view().result, None);
}

#[test]
fn input_change_clears_error_but_keeps_result_and_loading() {
    init_logging();
    let (state, _) = submit_text(EchoState::new(), "   ");
    let (state, _) = update(
        state,
        Msg::ValidationFailed {
            submission_id: 1,
            message: Some("Input cannot be empty.".to_string()),
        },
    );
    let (state, _) = update(state, Msg::InputChanged("x".to_string()));
    assert_eq!(state.view().error, None);

    let (state, _) = update(state, Msg::Submitted);
    let (state, _) = update(
        state,
        Msg::ValidationSucceeded {
            submission_id: 2,
            value: "x".to_string(),
        },
    );
    let (state, _) = update(state, Msg::InputChanged("y".to_string()));
    assert_eq!(state.view().result.as_deref(), Some("x"));

    // Typing during an outstanding submission keeps the loading flag.
    let (state, _) = update(state, Msg::Submitted);
    let (state, _) = update(state, Msg::InputChanged("z".to_string()));
    assert!(state.view().is_loading);
    assert_eq!(state.view().input, "z");
}

#[test]
fn stale_completion_is_ignored() {
    init_logging();
    let (state, _) = submit_text(EchoState::new(), "first");
    let (state, _) = update(
        state,
        Msg::ValidationSucceeded {
            submission_id: 1,
            value: "first".to_string(),
        },
    );
    let (mut state, _) = submit_text(state, "second");
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut next, effects) = update(
        state,
        Msg::ValidationFailed {
            submission_id: 1,
            message: Some("late".to_string()),
        },
    );

    assert_eq!(next, before);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn submission_ids_increase() {
    init_logging();
    let (state, _) = submit_text(EchoState::new(), "a");
    let (state, _) = update(
        state,
        Msg::ValidationSucceeded {
            submission_id: 1,
            value: "a".to_string(),
        },
    );

    let (_state, effects) = update(state, Msg::Submitted);

    assert_eq!(
        effects,
        vec![Effect::Validate {
            submission_id: 2,
            text: "a".to_string(),
        }]
    );
}
