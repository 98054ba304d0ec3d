//! Echo engine: simulated validation service and the submission controller.
mod controller;
mod error;
mod validate;

pub use controller::SubmissionController;
pub use error::ValidationError;
pub use validate::{SimulatedValidator, Validator, ValidatorSettings};
