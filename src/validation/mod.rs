//! Validation Engine
//!
//! Check functions, the request contract and the dispatching [`Validator`].

pub mod checks;
pub mod engine;
pub mod request;

pub use checks::{CheckInput, CheckResult};
pub use engine::{ErrorRecord, Failure, ValidationReport, Validator, ValidatorBuilder, validate};
pub use request::{Callback, Callbacks, ErrorMode, ValidationRequest};
