//! Azbox keyword client - typed async access to translation keywords
//!
//! This library fetches the keywords of an Azbox project for one language
//! and decodes them into [`KeywordRecord`] values, with a small CLI on top.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::KeywordClient,
    config::{ClientConfig, DEFAULT_BASE_URL},
    errors::{KeywordError, Result},
    models::{translation_map, KeywordFields, KeywordRecord, QueryOptions},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
