//! Request Contract
//!
//! What callers hand to the engine: field values, rule strings and the
//! optional labels, message overrides, callbacks and error mode.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::validation::checks::{CheckInput, CheckResult};
use crate::value::FieldValue;

/// Shape of the reported failures, fixed per validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Plain message strings
    #[default]
    Simple,
    /// `{error, field, message}` records
    Extended,
}

impl ErrorMode {
    /// Only the literal token `"extended"` selects extended mode
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("extended") => ErrorMode::Extended,
            _ => ErrorMode::Simple,
        }
    }

    fn deserialize_flag<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flag = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_flag(flag.as_str()))
    }
}

/// A caller-supplied check
pub type Callback = Arc<dyn Fn(&CheckInput<'_>) -> CheckResult + Send + Sync>;

/// Callbacks by rule name
#[derive(Clone, Default)]
pub struct Callbacks(IndexMap<String, Callback>);

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `check` under `rule`, replacing any earlier registration
    pub fn insert<F>(&mut self, rule: impl Into<String>, check: F)
    where
        F: Fn(&CheckInput<'_>) -> CheckResult + Send + Sync + 'static,
    {
        self.insert_shared(rule, Arc::new(check));
    }

    /// Register an already shared callback
    pub fn insert_shared(&mut self, rule: impl Into<String>, check: Callback) {
        self.0.insert(rule.into(), check);
    }

    pub fn get(&self, rule: &str) -> Option<&Callback> {
        self.0.get(rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Callback)> {
        self.0.iter().map(|(rule, check)| (rule.as_str(), check))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// A validation request
///
/// Deserializes from the JSON shape produced by form collectors:
///
/// ```json
/// {
///   "data": { "age": "-1" },
///   "rules": { "age": "required|natural" },
///   "labels": { "age": "Age" },
///   "errors": "extended"
/// }
/// ```
///
/// Fields are validated in the order they appear in `rules`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationRequest {
    #[serde(default)]
    pub data: HashMap<String, FieldValue>,
    pub rules: IndexMap<String, String>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub messages: HashMap<String, String>,
    /// Only available through the Rust API
    #[serde(skip)]
    pub callbacks: Callbacks,
    #[serde(
        default,
        rename = "errors",
        alias = "extendedErrors",
        deserialize_with = "ErrorMode::deserialize_flag"
    )]
    pub error_mode: ErrorMode,
}

impl ValidationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with its value and rule string
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
        rules: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.data.insert(name.clone(), value.into());
        self.rules.insert(name, rules.into());
        self
    }

    /// Declare rules for a field without supplying a value
    pub fn rule(mut self, name: impl Into<String>, rules: impl Into<String>) -> Self {
        self.rules.insert(name.into(), rules.into());
        self
    }

    pub fn label(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(field.into(), label.into());
        self
    }

    /// Override the template of one rule for this request
    pub fn message(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(rule.into(), template.into());
        self
    }

    pub fn callback<F>(mut self, rule: impl Into<String>, check: F) -> Self
    where
        F: Fn(&CheckInput<'_>) -> CheckResult + Send + Sync + 'static,
    {
        self.callbacks.insert(rule, check);
        self
    }

    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    pub fn extended(self) -> Self {
        self.error_mode(ErrorMode::Extended)
    }

    /// Raw value of a field, absent fields read as [`FieldValue::Null`]
    pub fn value(&self, field: &str) -> &FieldValue {
        static ABSENT: FieldValue = FieldValue::Null;
        self.data.get(field).unwrap_or(&ABSENT)
    }

    /// Display label of a field, falling back to its name
    pub fn label_for<'a>(&'a self, field: &'a str) -> &'a str {
        self.labels
            .get(field)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
            .unwrap_or(field)
    }
}
