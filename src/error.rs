//! Configuration errors
//!
//! Field-value failures are data, not errors: they end up in the
//! [`ValidationReport`](crate::validation::ValidationReport). Everything here
//! is a caller mistake that aborts the whole `make` call.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    #[error("Unknown rule '{rule}' for field '{field}'")]
    UnknownRule { field: String, rule: String },

    #[error("Rule '{rule}' for field '{field}' requires a parameter")]
    MissingParameter { field: String, rule: String },

    #[error("Rule '{rule}' for field '{field}' expects a number, got '{parameter}'")]
    InvalidParameter {
        field: String,
        rule: String,
        parameter: String,
    },

    #[error("Empty rule in '{rules}' for field '{field}'")]
    EmptyRule { field: String, rules: String },

    #[error("Failed to read message catalog {path:?}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse message catalog {path:?}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
