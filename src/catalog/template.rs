//! Message Templating
//!
//! Substitution over a fixed set of placeholder tokens. Every occurrence of
//! a token is replaced; a token with no value is left as written.

/// Placeholders understood in message templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Display label of the field
    FieldLabel,
    /// Parameter of the rule, e.g. the 5 in `minLength:5`
    FieldSize,
}

impl Placeholder {
    pub const ALL: [Placeholder; 2] = [Placeholder::FieldLabel, Placeholder::FieldSize];

    pub const fn token(self) -> &'static str {
        match self {
            Placeholder::FieldLabel => "#fieldLabel#",
            Placeholder::FieldSize => "#fieldSize#",
        }
    }
}

/// Render `template` for a field
///
/// Single pass: text coming from the label or size is never re-scanned for
/// tokens.
pub fn render(template: &str, label: &str, size: Option<&str>) -> String {
    let mut message = String::with_capacity(template.len() + label.len());
    let mut rest = template;

    while let Some(start) = rest.find('#') {
        message.push_str(&rest[..start]);
        let tail = &rest[start..];

        match Placeholder::ALL
            .into_iter()
            .find(|placeholder| tail.starts_with(placeholder.token()))
        {
            Some(placeholder) => {
                let value = match placeholder {
                    Placeholder::FieldLabel => Some(label),
                    Placeholder::FieldSize => size,
                };
                message.push_str(value.unwrap_or(placeholder.token()));
                rest = &tail[placeholder.token().len()..];
            }
            None => {
                message.push('#');
                rest = &tail[1..];
            }
        }
    }

    message.push_str(rest);
    message
}
