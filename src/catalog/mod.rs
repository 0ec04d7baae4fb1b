//! Message Catalog System
//!
//! Built-in rule names, their default templates and the TOML catalog files
//! that override them.

pub mod registry;
pub mod schema;
pub mod template;

pub use registry::{FALLBACK_TEMPLATE, MessageCatalog};
pub use schema::{CatalogFile, Rule};
pub use template::{Placeholder, render};
