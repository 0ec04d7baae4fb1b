//! Built-in Check Functions
//!
//! One function per [`Rule`]. All of them pass on values that are not
//! present (see [`FieldValue::is_present`]) except `required`.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{Rule, render};
use crate::error::{Result, ValidatorError};
use crate::validation::engine::ErrorRecord;
use crate::value::{FieldValue, parse_number};

/// Outcome of one check: `None` passes, `Some` is a field-value failure
pub type CheckResult = Result<Option<ErrorRecord>>;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))"#,
        r#"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    ))
    .expect("email pattern compiles")
});

/// Everything a check gets to see for one `(field, rule)` pair
#[derive(Debug, Clone, Copy)]
pub struct CheckInput<'a> {
    /// Rule name as written in the rule string
    pub rule: &'a str,
    pub field: &'a str,
    pub value: &'a FieldValue,
    pub parameter: Option<&'a str>,
    /// Display label, already falling back to the field name
    pub label: &'a str,
    /// Request override or catalog template for this rule
    pub template: &'a str,
}

impl CheckInput<'_> {
    /// Build the failure for this invocation from its template
    pub fn fail(&self) -> ErrorRecord {
        ErrorRecord {
            rule: self.rule.to_string(),
            field: self.field.to_string(),
            label: self.label.to_string(),
            message: render(self.template, self.label, self.parameter),
            parameter: self.parameter.map(str::to_string),
        }
    }

    /// `Some(failure)` when `failed` holds
    pub fn fail_if(&self, failed: bool) -> Option<ErrorRecord> {
        failed.then(|| self.fail())
    }

    /// The parameter coerced to a number
    pub fn numeric_parameter(&self) -> Result<f64> {
        let parameter = self
            .parameter
            .ok_or_else(|| ValidatorError::MissingParameter {
                field: self.field.to_string(),
                rule: self.rule.to_string(),
            })?;

        parse_number(parameter).ok_or_else(|| ValidatorError::InvalidParameter {
            field: self.field.to_string(),
            rule: self.rule.to_string(),
            parameter: parameter.to_string(),
        })
    }
}

/// Run the built-in implementation of `rule`
pub fn run_builtin(rule: Rule, input: &CheckInput<'_>) -> CheckResult {
    match rule {
        Rule::Required => required(input),
        Rule::Natural => natural(input),
        Rule::NaturalPositive => natural_positive(input),
        Rule::Numeric => numeric(input),
        Rule::MinNumber => min_number(input),
        Rule::MaxNumber => max_number(input),
        Rule::Str => string(input),
        Rule::MinLength => min_length(input),
        Rule::MaxLength => max_length(input),
        Rule::ValidEmail => valid_email(input),
    }
}

pub fn required(input: &CheckInput<'_>) -> CheckResult {
    Ok(input.fail_if(!input.value.is_present()))
}

pub fn natural(input: &CheckInput<'_>) -> CheckResult {
    Ok(input.fail_if(input.value.is_present() && !is_integer_at_least(input.value, 0.0)))
}

pub fn natural_positive(input: &CheckInput<'_>) -> CheckResult {
    Ok(input.fail_if(input.value.is_present() && !is_integer_at_least(input.value, 1.0)))
}

pub fn numeric(input: &CheckInput<'_>) -> CheckResult {
    Ok(input.fail_if(input.value.is_present() && input.value.to_number().is_none()))
}

pub fn min_number(input: &CheckInput<'_>) -> CheckResult {
    let scale = input.numeric_parameter()?;
    Ok(input.fail_if(compare_number(input.value, |n| n < scale)))
}

pub fn max_number(input: &CheckInput<'_>) -> CheckResult {
    let scale = input.numeric_parameter()?;
    Ok(input.fail_if(compare_number(input.value, |n| n > scale)))
}

pub fn string(input: &CheckInput<'_>) -> CheckResult {
    Ok(input.fail_if(input.value.is_present() && input.value.as_text().is_none()))
}

pub fn min_length(input: &CheckInput<'_>) -> CheckResult {
    let length = input.numeric_parameter()?;
    Ok(input.fail_if(compare_length(input.value, |len| len < length)))
}

pub fn max_length(input: &CheckInput<'_>) -> CheckResult {
    let length = input.numeric_parameter()?;
    Ok(input.fail_if(compare_length(input.value, |len| len > length)))
}

pub fn valid_email(input: &CheckInput<'_>) -> CheckResult {
    Ok(input.fail_if(input.value.is_present() && !is_valid_email(&input.value.to_string())))
}

pub fn is_valid_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// An integer prefix exists and the value does not compare below `min`.
///
/// A value that does not coerce to a number as a whole (`"12px"`) never
/// compares below the bound.
fn is_integer_at_least(value: &FieldValue, min: f64) -> bool {
    value.to_integer_prefix().is_some() && !value.to_number().is_some_and(|n| n < min)
}

fn compare_number(value: &FieldValue, failed: impl Fn(f64) -> bool) -> bool {
    value.is_present() && value.to_number().is_some_and(failed)
}

fn compare_length(value: &FieldValue, failed: impl Fn(f64) -> bool) -> bool {
    value.is_present() && value.char_len().is_some_and(|len| failed(len as f64))
}
