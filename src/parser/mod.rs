//! Rule-String Parser
//!
//! Purely syntactic parsing of the `name[:parameter](|name[:parameter])*`
//! mini-language into ordered [`RuleCall`]s.

pub mod ast;
pub mod lexer;

pub use ast::{RuleCall, RuleSpec};
pub use lexer::{Token, TokenKind, tokenize_rules};

use crate::error::Result;

/// Parse the rule string of one field
///
/// Unknown rule names are accepted here; only empty rule segments are
/// rejected.
pub fn parse_rules(field: &str, rules: &str) -> Result<RuleSpec> {
    log::trace!("parsing rules for '{}': {:?}", field, rules);
    let tokens = lexer::tokenize_rules(rules);
    ast::tokens_to_rule_spec(field, rules, tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidatorError;

    #[test]
    fn test_parse_preserves_order() {
        let spec = parse_rules("name", "required|minLength:5|str").unwrap();

        let names: Vec<_> = spec.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["required", "minLength", "str"]);
        assert_eq!(spec.calls[0].parameter, None);
        assert_eq!(spec.calls[1].parameter.as_deref(), Some("5"));
    }

    #[test]
    fn test_parse_unknown_rule_is_syntactically_fine() {
        let spec = parse_rules("code", "custom:abc").unwrap();
        assert_eq!(spec.calls[0].name, "custom");
        assert_eq!(spec.calls[0].parameter.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_empty_rule_is_an_error() {
        let err = parse_rules("name", "required||str").unwrap_err();
        assert!(matches!(err, ValidatorError::EmptyRule { ref field, .. } if field == "name"));

        assert!(parse_rules("name", "").is_err());
        assert!(parse_rules("name", "required|").is_err());
    }
}
