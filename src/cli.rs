//! Command-line front end
//!
//! Reads a JSON request, validates it and writes the JSON response.

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::catalog::MessageCatalog;
use crate::config::Config;
use crate::validation::{ErrorMode, ValidationReport, ValidationRequest, Validator};

/// What a run ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every rule passed, or only the catalog was listed
    Valid,
    /// At least one field-value failure was reported
    Invalid,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Valid => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::from(1),
        }
    }
}

/// Entry point of the `fvalidate` binary
pub fn run() -> Result<Outcome> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    execute(&config, io::stdin().lock(), io::stdout().lock())
}

/// Run with explicit input and output streams
///
/// `input` is only read when the config names no request file.
pub fn execute(config: &Config, input: impl Read, mut output: impl Write) -> Result<Outcome> {
    let catalog = config.load_catalog()?;

    if config.list_rules {
        write_catalog(&catalog, &mut output)?;
        return Ok(Outcome::Valid);
    }

    let mut request = read_request(config, input)?;
    if config.force_extended {
        request.error_mode = ErrorMode::Extended;
    }

    let report = Validator::from_request_with_catalog(&request, catalog)
        .make(&request)
        .context("Validation aborted")?;
    log::info!("{} failure(s)", report.len());

    write_report(&report, config.pretty, &mut output)?;

    Ok(if report.is_valid() {
        Outcome::Valid
    } else {
        Outcome::Invalid
    })
}

fn read_request(config: &Config, mut input: impl Read) -> Result<ValidationRequest> {
    let content = match &config.request_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read request {}", path.display()))?,
        None => {
            let mut content = String::new();
            input
                .read_to_string(&mut content)
                .context("Failed to read request from stdin")?;
            content
        }
    };

    serde_json::from_str(&content).context("Invalid validation request")
}

fn write_report(report: &ValidationReport, pretty: bool, output: &mut impl Write) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *output, report)?;
    } else {
        serde_json::to_writer(&mut *output, report)?;
    }
    writeln!(output)?;
    Ok(())
}

fn write_catalog(catalog: &MessageCatalog, output: &mut impl Write) -> Result<()> {
    for (rule, template) in catalog.entries() {
        writeln!(output, "{rule}\t{template}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            request_path: None,
            catalog_files: Vec::new(),
            force_extended: false,
            list_rules: false,
            pretty: false,
            log_level: "warn".to_string(),
        }
    }

    fn execute_str(config: &Config, input: &str) -> Result<(Outcome, String)> {
        let mut output = Vec::new();
        let outcome = execute(config, input.as_bytes(), &mut output)?;
        Ok((outcome, String::from_utf8(output)?))
    }

    #[test]
    fn test_execute_reports_failures() {
        let (outcome, output) = execute_str(
            &config(),
            r#"{"data": {"age": "-1"}, "rules": {"age": "natural"}, "labels": {"age": "Age"}}"#,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Invalid);
        assert_eq!(output, "[\"The Age must be a natural integer!\"]\n");
    }

    #[test]
    fn test_execute_valid_request() {
        let (outcome, output) =
            execute_str(&config(), r#"{"data": {"age": "0"}, "rules": {"age": "natural"}}"#)
                .unwrap();

        assert_eq!(outcome, Outcome::Valid);
        assert_eq!(output, "[]\n");
    }

    #[test]
    fn test_force_extended() {
        let config = Config {
            force_extended: true,
            ..config()
        };
        let (_, output) =
            execute_str(&config, r#"{"data": {}, "rules": {"name": "required"}}"#).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["error"], "required");
        assert_eq!(value[0]["field"], "name");
    }

    #[test]
    fn test_list_rules() {
        let config = Config {
            list_rules: true,
            ..config()
        };
        let (outcome, output) = execute_str(&config, "").unwrap();

        assert_eq!(outcome, Outcome::Valid);
        assert!(output.starts_with("required\tThe #fieldLabel# is required!\n"));
        assert_eq!(output.lines().count(), 10);
    }

    #[test]
    fn test_unknown_rule_is_an_error() {
        let err = execute_str(&config(), r#"{"rules": {"a": "bogus"}}"#).unwrap_err();
        assert!(format!("{err:#}").contains("Unknown rule 'bogus'"));
    }

    #[test]
    fn test_malformed_request() {
        let err = execute_str(&config(), "{not json").unwrap_err();
        assert!(err.to_string().contains("Invalid validation request"));
    }
}
