//! Tests for catalog-file layering and request files
use std::io::Write;

use clap::Parser;
use field_validator::cli::{Outcome, execute};
use field_validator::config::{Args, Config};
use field_validator::{MessageCatalog, ValidationRequest, Validator};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

fn config_for(args: &[&str]) -> Config {
    let args = Args::try_parse_from(std::iter::once("fvalidate").chain(args.iter().copied()))
        .expect("parse args");
    let mut config = Config::from_args(args).expect("create config");
    // Keep the machine's user-global catalog out of the picture
    config
        .catalog_files
        .retain(|p| Some(p.clone()) != field_validator::config::user_catalog_path());
    config
}

#[test]
fn test_catalog_file_overrides_builtin_messages() {
    let catalog_file = write_temp(
        r##"
[catalog]
name = "terse"

[messages]
required = "#fieldLabel# missing"
"##,
    );

    let config = config_for(&["--messages", catalog_file.path().to_str().unwrap()]);
    let catalog = config.load_catalog().expect("load catalog");

    assert_eq!(catalog.get("required"), Some("#fieldLabel# missing"));
    assert_eq!(
        catalog.get("numeric"),
        MessageCatalog::builtin().get("numeric")
    );
}

#[test]
fn test_request_messages_win_over_catalog_file() {
    let mut catalog = MessageCatalog::builtin();
    catalog
        .load_file(
            write_temp("[messages]\nrequired = \"from file\"\nnumeric = \"not a number\"\n").path(),
        )
        .expect("load catalog");

    let request = ValidationRequest::new()
        .field("a", "", "required")
        .field("b", "x", "numeric")
        .message("required", "from request");

    let report = Validator::from_request_with_catalog(&request, catalog)
        .make(&request)
        .unwrap();

    assert_eq!(report.messages(), ["from request", "not a number"]);
}

#[test]
fn test_later_catalog_files_win() {
    let first = write_temp("[messages]\nrequired = \"first\"\nstr = \"first str\"\n");
    let second = write_temp("[messages]\nrequired = \"second\"\n");

    let mut config = config_for(&[]);
    config.catalog_files = vec![first.path().to_path_buf(), second.path().to_path_buf()];

    let catalog = config.load_catalog().unwrap();
    assert_eq!(catalog.get("required"), Some("second"));
    assert_eq!(catalog.get("str"), Some("first str"));
}

#[test]
fn test_invalid_catalog_file_is_reported() {
    let broken = write_temp("[messages]\nrequired = [1, 2]\n");
    let config = config_for(&["--messages", broken.path().to_str().unwrap()]);

    let err = config.load_catalog().unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to parse message catalog"));
    assert_eq!(message.matches("message catalog").count(), 1, "{message}");
}

#[test]
fn test_request_file_with_catalog() {
    let catalog_file = write_temp("[messages]\nminLength = \"#fieldLabel# < #fieldSize#\"\n");
    let request_file = write_temp(
        r#"{"data": {"name": "ab"}, "rules": {"name": "minLength:3"}, "labels": {"name": "Name"}}"#,
    );

    let config = config_for(&[
        "--messages",
        catalog_file.path().to_str().unwrap(),
        "--request",
        request_file.path().to_str().unwrap(),
    ]);

    let mut output = Vec::new();
    let outcome = execute(&config, std::io::empty(), &mut output).unwrap();

    assert_eq!(outcome, Outcome::Invalid);
    assert_eq!(String::from_utf8(output).unwrap(), "[\"Name < 3\"]\n");
}

#[test]
fn test_missing_request_file() {
    let config = config_for(&["--request", "/nonexistent/request.json"]);
    let err = execute(&config, std::io::empty(), Vec::new()).unwrap_err();
    assert!(err.to_string().contains("Failed to read request"));
}
