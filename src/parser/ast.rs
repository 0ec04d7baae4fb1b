//! Parsed Rule Specifications
//!
//! Pure data: which checks to run for one field, in order. Whether a rule
//! name exists is decided at dispatch time.

use crate::error::{Result, ValidatorError};
use crate::parser::lexer::{PARAMETER_SEPARATOR, Token, TokenKind};

/// One check invocation, e.g. `minLength:5`
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCall {
    /// Rule name (e.g., "required", "minLength")
    pub name: String,
    /// Parameter text, coerced later by the check
    pub parameter: Option<String>,
}

/// Ordered checks for one field
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSpec {
    pub field: String,
    pub calls: Vec<RuleCall>,
}

impl RuleSpec {
    pub fn iter(&self) -> std::slice::Iter<'_, RuleCall> {
        self.calls.iter()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSpec {
    type Item = &'a RuleCall;
    type IntoIter = std::slice::Iter<'a, RuleCall>;

    fn into_iter(self) -> Self::IntoIter {
        self.calls.iter()
    }
}

/// Convert tokens into a rule spec for `field`.
///
/// `source` is the full rule string, only used for error reporting.
pub fn tokens_to_rule_spec(field: &str, source: &str, tokens: Vec<Token<'_>>) -> Result<RuleSpec> {
    let calls = tokens
        .into_iter()
        .map(|token| match token.kind {
            TokenKind::Empty => Err(ValidatorError::EmptyRule {
                field: field.to_string(),
                rules: source.to_string(),
            }),
            TokenKind::Bare => Ok(RuleCall {
                name: token.text.to_string(),
                parameter: None,
            }),
            TokenKind::Parameterized => Ok(parse_parameterized(token.text)),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RuleSpec {
        field: field.to_string(),
        calls,
    })
}

/// Split "name:parameter" on the first separator
fn parse_parameterized(text: &str) -> RuleCall {
    let (name, parameter) = text.split_once(PARAMETER_SEPARATOR).unwrap_or((text, ""));
    let parameter = parameter.trim();

    RuleCall {
        name: name.trim().to_string(),
        parameter: (!parameter.is_empty()).then(|| parameter.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_parameterized() {
        let call = parse_parameterized("minLength:5");
        assert_eq!(call.name, "minLength");
        assert_eq!(call.parameter.as_deref(), Some("5"));
    }

    #[test]
    fn test_parse_parameterized_keeps_later_separators() {
        let call = parse_parameterized("pattern:a:b");
        assert_eq!(call.name, "pattern");
        assert_eq!(call.parameter.as_deref(), Some("a:b"));
    }

    #[test]
    fn test_dangling_separator_has_no_parameter() {
        let call = parse_parameterized("minLength:");
        assert_eq!(call.name, "minLength");
        assert_eq!(call.parameter, None);
    }

    #[test]
    fn test_tokens_to_rule_spec() {
        let tokens = vec![
            Token {
                kind: TokenKind::Bare,
                text: "required",
            },
            Token {
                kind: TokenKind::Parameterized,
                text: "maxNumber:10",
            },
        ];

        let spec = tokens_to_rule_spec("age", "required|maxNumber:10", tokens).unwrap();
        assert_eq!(spec.field, "age");
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.calls[1].name, "maxNumber");
        assert_eq!(spec.calls[1].parameter.as_deref(), Some("10"));
    }
}
