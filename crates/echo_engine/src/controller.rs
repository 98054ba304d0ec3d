use std::sync::{Arc, Mutex, PoisonError};

use echo_core::{update, EchoState, EchoViewModel, Effect, Msg};
use echo_logging::{echo_info, echo_warn};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::Validator;

/// Owns the screen state for one session and runs validations for it.
///
/// Views call [`update_input`](Self::update_input) and [`submit`](Self::submit)
/// and observe state through [`subscribe`](Self::subscribe), which always
/// yields the latest snapshot first. Cloning shares the same session.
#[derive(Clone)]
pub struct SubmissionController {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<EchoState>,
    snapshots: watch::Sender<EchoViewModel>,
    validator: Arc<dyn Validator>,
    runtime: Handle,
}

impl SubmissionController {
    /// Validation tasks are spawned on `runtime`.
    pub fn new(validator: Arc<dyn Validator>, runtime: Handle) -> Self {
        let state = EchoState::new();
        let (snapshots, _) = watch::channel(state.view());
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                snapshots,
                validator,
                runtime,
            }),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<EchoViewModel> {
        self.inner.snapshots.subscribe()
    }

    pub fn snapshot(&self) -> EchoViewModel {
        self.inner.snapshots.borrow().clone()
    }

    /// Replaces the input text and clears any error. Never blocks on validation.
    pub fn update_input(&self, text: impl Into<String>) {
        let effects = self.dispatch(Msg::InputChanged(text.into()));
        debug_assert!(effects.is_empty());
    }

    /// Starts validating the current input.
    ///
    /// Returns `None` without touching state if a submission is already
    /// outstanding. The returned task always runs to completion, even if the
    /// handle is dropped.
    pub fn submit(&self) -> Option<JoinHandle<()>> {
        let mut task = None;
        for effect in self.dispatch(Msg::Submitted) {
            task = Some(self.spawn_effect(effect));
        }
        task
    }

    fn dispatch(&self, msg: Msg) -> Vec<Effect> {
        let mut guard = self
            .inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let state = std::mem::take(&mut *guard);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            // Published under the lock so snapshots leave in transition order.
            self.inner.snapshots.send_replace(state.view());
        }
        *guard = state;
        effects
    }

    fn spawn_effect(&self, effect: Effect) -> JoinHandle<()> {
        match effect {
            Effect::Validate {
                submission_id,
                text,
            } => {
                let controller = self.clone();
                self.inner.runtime.spawn(async move {
                    let msg = match controller.inner.validator.validate(&text).await {
                        Ok(value) => {
                            echo_info!("Submission {} accepted", submission_id);
                            Msg::ValidationSucceeded {
                                submission_id,
                                value,
                            }
                        }
                        Err(err) => {
                            echo_warn!("Submission {} failed: {}", submission_id, err);
                            Msg::ValidationFailed {
                                submission_id,
                                message: err.message(),
                            }
                        }
                    };
                    controller.dispatch(msg);
                })
            }
        }
    }
}
