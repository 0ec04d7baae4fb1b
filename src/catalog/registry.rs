//! Message Catalog
//!
//! Rule name -> message template, seeded with the built-in defaults and
//! layered with catalog files and per-request overrides.

use super::schema::{CatalogFile, Rule};
use crate::error::{Result, ValidatorError};
use std::collections::HashMap;
use std::path::Path;

/// Template used for rules that have no catalog entry at all
pub const FALLBACK_TEMPLATE: &str = "The #fieldLabel# is invalid!";

/// In-memory message catalog
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MessageCatalog {
    /// Catalog with a template for every built-in rule
    pub fn builtin() -> Self {
        let templates = Rule::ALL
            .into_iter()
            .map(|rule| (rule.as_str().to_string(), rule.default_template().to_string()))
            .collect();

        Self { templates }
    }

    /// Template for a rule name, if any
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.templates.get(rule).map(String::as_str)
    }

    /// Template for a rule name, falling back to [`FALLBACK_TEMPLATE`]
    pub fn template_for(&self, rule: &str) -> &str {
        self.get(rule).unwrap_or(FALLBACK_TEMPLATE)
    }

    pub fn set(&mut self, rule: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(rule.into(), template.into());
    }

    /// Layer overrides on top of the current templates
    pub fn extend<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (rule, template) in overrides {
            self.set(rule, template);
        }
    }

    /// Consuming variant of [`extend`](Self::extend)
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extend(overrides);
        self
    }

    /// Layer a parsed catalog file on top of the current templates
    pub fn apply_file(&mut self, file: CatalogFile) {
        if let Some(meta) = &file.catalog {
            log::debug!("applying message catalog '{}'", meta.name);
        }
        for (rule, template) in file.messages {
            if rule.parse::<Rule>().is_err() {
                log::debug!("catalog entry '{}' does not name a built-in rule", rule);
            }
            self.set(rule, template);
        }
    }

    /// Layer catalog TOML text on top of the current templates
    pub fn apply_toml(&mut self, path: &Path, content: &str) -> Result<()> {
        let file = toml::from_str::<CatalogFile>(content).map_err(|source| {
            ValidatorError::CatalogParse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.apply_file(file);
        Ok(())
    }

    /// Read a catalog file from disk and layer it on top
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|source| ValidatorError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        self.apply_toml(path, &content)?;
        log::info!("Loaded message catalog: {:?}", path);
        Ok(())
    }

    /// All entries: built-ins in catalog order, then other rules by name
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut builtin: Vec<(&str, &str)> = Rule::ALL
            .into_iter()
            .filter_map(|rule| Some((rule.as_str(), self.get(rule.as_str())?)))
            .collect();

        let mut extra: Vec<(&str, &str)> = self
            .templates
            .iter()
            .filter(|(rule, _)| rule.parse::<Rule>().is_err())
            .map(|(rule, template)| (rule.as_str(), template.as_str()))
            .collect();
        extra.sort_unstable();

        builtin.append(&mut extra);
        builtin
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_builtin_covers_every_rule() {
        let catalog = MessageCatalog::builtin();
        assert_eq!(catalog.len(), Rule::ALL.len());
        for rule in Rule::ALL {
            assert_eq!(catalog.get(rule.as_str()), Some(rule.default_template()));
        }
    }

    #[test]
    fn test_overrides_replace_and_add() {
        let catalog = MessageCatalog::builtin().with_overrides([
            ("required", "#fieldLabel# missing"),
            ("custom", "#fieldLabel# is odd"),
        ]);

        assert_eq!(catalog.get("required"), Some("#fieldLabel# missing"));
        assert_eq!(catalog.get("custom"), Some("#fieldLabel# is odd"));
        assert_eq!(catalog.template_for("other"), FALLBACK_TEMPLATE);
    }

    #[test]
    fn test_entries_order() {
        let catalog = MessageCatalog::builtin().with_overrides([("zeta", "z"), ("alpha", "a")]);
        let names: Vec<_> = catalog.entries().into_iter().map(|(name, _)| name).collect();

        assert_eq!(names[0], "required");
        assert_eq!(names[9], "validEmail");
        assert_eq!(&names[10..], ["alpha", "zeta"]);
    }

    #[test]
    fn test_apply_toml_rejects_malformed_file() {
        let mut catalog = MessageCatalog::builtin();
        let err = catalog
            .apply_toml(&PathBuf::from("bad.toml"), "[messages\nrequired = 1")
            .unwrap_err();

        assert!(matches!(err, ValidatorError::CatalogParse { .. }));
        assert_eq!(catalog, MessageCatalog::builtin());
    }

    #[test]
    fn test_load_missing_file() {
        let mut catalog = MessageCatalog::builtin();
        let err = catalog
            .load_file(Path::new("/nonexistent/field-validator/messages.toml"))
            .unwrap_err();
        assert!(matches!(err, ValidatorError::CatalogIo { .. }));
    }
}
