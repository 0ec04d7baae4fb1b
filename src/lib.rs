//! Field Validator
//!
//! A declarative field-validation engine: field values plus compact rule
//! strings like `"required|minLength:5"` in, ordered templated failures out.
//!
//! This library provides:
//! - Rule-string parsing
//! - Built-in checks and caller-registered callbacks
//! - Message catalogs with placeholder templating
//! - Configuration and a command-line front end

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod validation;
pub mod value;

// Re-exports for clean public API
pub use catalog::{MessageCatalog, Rule};
pub use config::Config;
pub use error::ValidatorError;
pub use parser::{RuleSpec, parse_rules};
pub use validation::{
    CheckInput, CheckResult, ErrorMode, ErrorRecord, Failure, ValidationReport, ValidationRequest,
    Validator, validate,
};
pub use value::FieldValue;
