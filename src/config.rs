//! Configuration management for the field validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Message catalog layering (built-in < user-global < `--messages`)

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::catalog::MessageCatalog;

/// File name of the user-global message catalog
pub const USER_CATALOG_FILE: &str = "messages.toml";

/// Command-line arguments for the field validator
#[derive(Debug, Parser)]
#[command(name = "fvalidate")]
#[command(about = "Validate form fields against rule strings")]
#[command(version)]
pub struct Args {
    /// JSON request file, read from stdin when omitted
    #[arg(long, help = "JSON validation request (defaults to stdin)")]
    pub request: Option<PathBuf>,

    /// Message catalog layered over the built-in and user-global ones
    #[arg(long, help = "TOML file with [messages] overrides")]
    pub messages: Option<PathBuf>,

    /// Report structured errors regardless of the request flag
    #[arg(long, help = "Force {error, field, message} error records")]
    pub extended: bool,

    /// Print the effective message catalog and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Pretty-print the JSON response
    #[arg(long)]
    pub pretty: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Request file, `None` for stdin
    pub request_path: Option<PathBuf>,
    /// Catalog files to apply, lowest priority first
    pub catalog_files: Vec<PathBuf>,
    pub force_extended: bool,
    pub list_rules: bool,
    pub pretty: bool,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let mut catalog_files = Vec::new();

        // User-global catalog only when it exists
        if let Some(path) = user_catalog_path().filter(|p| p.is_file()) {
            catalog_files.push(path);
        }

        // Explicit catalog last so it wins
        if let Some(path) = args.messages {
            catalog_files.push(path);
        }

        Ok(Config {
            request_path: args.request,
            catalog_files,
            force_extended: args.extended,
            list_rules: args.list_rules,
            pretty: args.pretty,
            log_level: args.log_level,
        })
    }

    /// Built-in catalog with every configured catalog file applied in order
    pub fn load_catalog(&self) -> Result<MessageCatalog> {
        let mut catalog = MessageCatalog::builtin();
        for path in &self.catalog_files {
            catalog.load_file(path)?;
        }
        Ok(catalog)
    }
}

/// Location of the user-global catalog, e.g. `~/.config/field-validator/messages.toml`
pub fn user_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("field-validator").join(USER_CATALOG_FILE))
}
