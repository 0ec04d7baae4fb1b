//! Validation Engine
//!
//! Resolves each `(field, rule)` pair to a check, runs it and collects the
//! failures in declaration order.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::catalog::{MessageCatalog, Rule};
use crate::error::{Result, ValidatorError};
use crate::parser::{RuleCall, parse_rules};
use crate::validation::checks::{CheckInput, CheckResult, run_builtin};
use crate::validation::request::{Callback, Callbacks, ErrorMode, ValidationRequest};

/// A failed check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    #[serde(rename = "error")]
    pub rule: String,
    pub field: String,
    #[serde(skip)]
    pub label: String,
    pub message: String,
    #[serde(skip)]
    pub parameter: Option<String>,
}

/// One reported failure, shaped by the [`ErrorMode`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Failure {
    Message(String),
    Extended(ErrorRecord),
}

impl Failure {
    pub fn message(&self) -> &str {
        match self {
            Failure::Message(message) => message,
            Failure::Extended(record) => &record.message,
        }
    }
}

/// Result of validating a request
///
/// Serializes as a JSON array of strings (simple mode) or of
/// `{error, field, message}` objects (extended mode).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    mode: ErrorMode,
    records: Vec<ErrorRecord>,
}

impl ValidationReport {
    pub fn new(mode: ErrorMode) -> Self {
        Self {
            mode,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: ErrorRecord) {
        self.records.push(record);
    }

    pub fn mode(&self) -> ErrorMode {
        self.mode
    }

    pub fn is_valid(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    pub fn messages(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.message.as_str()).collect()
    }

    /// Failures of one field, in rule order
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ErrorRecord> + 'a {
        self.records.iter().filter(move |r| r.field == field)
    }

    /// Failures in the shape selected by the mode
    pub fn failures(&self) -> Vec<Failure> {
        self.records
            .iter()
            .map(|record| match self.mode {
                ErrorMode::Simple => Failure::Message(record.message.clone()),
                ErrorMode::Extended => Failure::Extended(record.clone()),
            })
            .collect()
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.failures())
    }
}

/// Resolved implementation of a rule name
#[derive(Clone)]
pub enum CheckFn {
    Builtin(Rule),
    Custom(Callback),
}

impl CheckFn {
    fn call(&self, input: &CheckInput<'_>) -> CheckResult {
        match self {
            CheckFn::Builtin(rule) => run_builtin(*rule, input),
            CheckFn::Custom(callback) => callback(input),
        }
    }
}

impl fmt::Debug for CheckFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckFn::Builtin(rule) => f.debug_tuple("Builtin").field(rule).finish(),
            CheckFn::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Rule engine for one request
///
/// Immutable once built: the dispatch table is the built-ins overlaid with
/// the registered callbacks.
#[derive(Debug, Clone)]
pub struct Validator {
    catalog: MessageCatalog,
    mode: ErrorMode,
    checks: HashMap<String, CheckFn>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ErrorMode::Simple)
    }
}

impl Validator {
    /// Validator with the built-in catalog and checks only
    pub fn new(mode: ErrorMode) -> Self {
        Self::builder().mode(mode).build()
    }

    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    /// Validator configured from the request's error mode and callbacks
    pub fn from_request(request: &ValidationRequest) -> Self {
        Self::from_request_with_catalog(request, MessageCatalog::builtin())
    }

    /// Like [`from_request`](Self::from_request), over a preloaded catalog
    pub fn from_request_with_catalog(request: &ValidationRequest, catalog: MessageCatalog) -> Self {
        Self::builder()
            .catalog(catalog)
            .mode(request.error_mode)
            .callbacks(&request.callbacks)
            .build()
    }

    pub fn mode(&self) -> ErrorMode {
        self.mode
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Whether a rule name resolves to a check
    pub fn has_rule(&self, rule: &str) -> bool {
        self.checks.contains_key(rule)
    }

    /// Validate every field of `request`
    ///
    /// Fields run in `rules` order and rules in rule-string order. A
    /// configuration error aborts the whole call.
    pub fn make(&self, request: &ValidationRequest) -> Result<ValidationReport> {
        let mut report = ValidationReport::new(self.mode);

        for (field, rules) in &request.rules {
            let spec = parse_rules(field, rules)?;
            let label = request.label_for(field);
            let value = request.value(field);

            for call in &spec {
                let check = self.resolve(field, call)?;
                let template = request
                    .messages
                    .get(&call.name)
                    .map(String::as_str)
                    .filter(|template| !template.is_empty())
                    .unwrap_or_else(|| self.catalog.template_for(&call.name));
                let parameter = match check {
                    CheckFn::Builtin(rule) if !rule.takes_parameter() => None,
                    _ => call.parameter.as_deref(),
                };

                let input = CheckInput {
                    rule: &call.name,
                    field,
                    value,
                    parameter,
                    label,
                    template,
                };

                if let Some(record) = check.call(&input)? {
                    log::debug!("field '{}' failed '{}'", field, call.name);
                    report.push(record);
                }
            }
        }

        log::debug!(
            "validated {} field(s), {} failure(s)",
            request.rules.len(),
            report.len()
        );
        Ok(report)
    }

    fn resolve(&self, field: &str, call: &RuleCall) -> Result<&CheckFn> {
        let check = self
            .checks
            .get(&call.name)
            .ok_or_else(|| ValidatorError::UnknownRule {
                field: field.to_string(),
                rule: call.name.clone(),
            })?;

        if let (CheckFn::Builtin(rule), Some(parameter)) = (check, &call.parameter)
            && !rule.takes_parameter()
        {
            log::debug!(
                "ignoring parameter '{}' of rule '{}' on field '{}'",
                parameter,
                rule,
                field
            );
        }

        Ok(check)
    }
}

/// Builder for [`Validator`]
#[derive(Debug, Clone, Default)]
pub struct ValidatorBuilder {
    catalog: Option<MessageCatalog>,
    mode: ErrorMode,
    callbacks: Callbacks,
}

impl ValidatorBuilder {
    pub fn catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Override templates on top of the catalog
    pub fn messages<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.catalog
            .get_or_insert_with(MessageCatalog::builtin)
            .extend(overrides);
        self
    }

    pub fn mode(mut self, mode: ErrorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Register `check` under `rule`, replacing a built-in of the same name
    pub fn callback<F>(mut self, rule: impl Into<String>, check: F) -> Self
    where
        F: Fn(&CheckInput<'_>) -> CheckResult + Send + Sync + 'static,
    {
        self.callbacks.insert(rule, check);
        self
    }

    pub fn callbacks(mut self, callbacks: &Callbacks) -> Self {
        for (rule, check) in callbacks.iter() {
            self.callbacks.insert_shared(rule, check.clone());
        }
        self
    }

    pub fn build(self) -> Validator {
        let mut checks: HashMap<String, CheckFn> = Rule::ALL
            .into_iter()
            .map(|rule| (rule.as_str().to_string(), CheckFn::Builtin(rule)))
            .collect();

        for (rule, check) in self.callbacks.iter() {
            if checks.contains_key(rule) {
                log::debug!("callback replaces built-in rule '{}'", rule);
            }
            checks.insert(rule.to_string(), CheckFn::Custom(check.clone()));
        }

        Validator {
            catalog: self.catalog.unwrap_or_default(),
            mode: self.mode,
            checks,
        }
    }
}

/// Validate a request with the built-in catalog
pub fn validate(request: &ValidationRequest) -> Result<ValidationReport> {
    Validator::from_request(request).make(request)
}
