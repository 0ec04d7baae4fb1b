//! Catalog Schema Types
//!
//! The closed set of built-in rules and the TOML shape of catalog files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Built-in rule names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    Required,
    Natural,
    NaturalPositive,
    Numeric,
    MinNumber,
    MaxNumber,
    Str,
    MinLength,
    MaxLength,
    ValidEmail,
}

impl Rule {
    /// Every built-in, in catalog order
    pub const ALL: [Rule; 10] = [
        Rule::Required,
        Rule::Natural,
        Rule::NaturalPositive,
        Rule::Numeric,
        Rule::MinNumber,
        Rule::MaxNumber,
        Rule::Str,
        Rule::MinLength,
        Rule::MaxLength,
        Rule::ValidEmail,
    ];

    /// Name as written in rule strings
    pub const fn as_str(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Natural => "natural",
            Rule::NaturalPositive => "naturalPositive",
            Rule::Numeric => "numeric",
            Rule::MinNumber => "minNumber",
            Rule::MaxNumber => "maxNumber",
            Rule::Str => "str",
            Rule::MinLength => "minLength",
            Rule::MaxLength => "maxLength",
            Rule::ValidEmail => "validEmail",
        }
    }

    /// Whether the rule needs a `:parameter`
    pub const fn takes_parameter(self) -> bool {
        matches!(
            self,
            Rule::MinNumber | Rule::MaxNumber | Rule::MinLength | Rule::MaxLength
        )
    }

    pub const fn default_template(self) -> &'static str {
        match self {
            Rule::Required => "The #fieldLabel# is required!",
            Rule::Natural => "The #fieldLabel# must be a natural integer!",
            Rule::NaturalPositive => "The #fieldLabel# must be a positive integer!",
            Rule::Numeric => "The #fieldLabel# must be a number!",
            Rule::MinNumber => "The #fieldLabel# must be minimum #fieldSize#!",
            Rule::MaxNumber => "The #fieldLabel# must be maximum #fieldSize#!",
            Rule::Str => "The #fieldLabel# must be a string!",
            Rule::MinLength => "The #fieldLabel# must be at least #fieldSize# characters!",
            Rule::MaxLength => "The #fieldLabel# must be maximum #fieldSize# characters!",
            Rule::ValidEmail => "The #fieldLabel# must be a valid email!",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.as_str() == name)
            .ok_or(())
    }
}

/// Root catalog file structure (matches TOML)
///
/// ```toml
/// [catalog]
/// name = "terse"
///
/// [messages]
/// required = "#fieldLabel# missing"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogFile {
    pub catalog: Option<CatalogMeta>,
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

/// Catalog metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogMeta {
    pub name: String,
    pub description: Option<String>,
}
