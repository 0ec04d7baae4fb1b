//! Rule-String Lexer
//!
//! Splits a rule string like `"required|minLength:5"` into one token per
//! rule. No knowledge of which rules exist.

/// Token types in a rule string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A bare rule name like "required"
    Bare,
    /// A rule with a parameter like "minLength:5"
    Parameterized,
    /// Nothing between two separators
    Empty,
}

/// A token with its text content
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

pub const RULE_SEPARATOR: char = '|';
pub const PARAMETER_SEPARATOR: char = ':';

/// Tokenize a rule string, one token per `|`-separated segment
pub fn tokenize_rules(rules: &str) -> Vec<Token<'_>> {
    rules
        .split(RULE_SEPARATOR)
        .map(str::trim)
        .map(|text| {
            let kind = if text.is_empty() {
                TokenKind::Empty
            } else if text.contains(PARAMETER_SEPARATOR) {
                TokenKind::Parameterized
            } else {
                TokenKind::Bare
            };
            Token { kind, text }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_rules() {
        let tokens = tokenize_rules("required|minLength:5|str");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::Bare);
        assert_eq!(tokens[0].text, "required");
        assert_eq!(tokens[1].kind, TokenKind::Parameterized);
        assert_eq!(tokens[1].text, "minLength:5");
        assert_eq!(tokens[2].kind, TokenKind::Bare);
    }

    #[test]
    fn test_tokenize_trims_whitespace() {
        let tokens = tokenize_rules(" required | maxLength:10 ");

        assert_eq!(tokens[0].text, "required");
        assert_eq!(tokens[1].text, "maxLength:10");
    }

    #[test]
    fn test_tokenize_empty_segments() {
        let tokens = tokenize_rules("required||str|");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].kind, TokenKind::Empty);
        assert_eq!(tokens[3].kind, TokenKind::Empty);
    }

    #[test]
    fn test_tokenize_empty_string() {
        let tokens = tokenize_rules("");
        assert_eq!(
            tokens,
            vec![Token {
                kind: TokenKind::Empty,
                text: ""
            }]
        );
    }
}
