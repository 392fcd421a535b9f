//! Configuration management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::core::errors::{KeywordError, Result};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://api.azbox.io/v1";

/// Connection settings for the keyword API
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// API key, sent as the `token` query parameter
    #[serde(default)]
    pub token: String,
    /// Project identifier
    #[serde(default)]
    pub project_id: String,
    /// Language code of the translations, e.g. "EN" or "ES"
    #[serde(default)]
    pub language: String,
    /// API root; [`DEFAULT_BASE_URL`] when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("ClientConfig")
            .field("token", &token)
            .field("project_id", &self.project_id)
            .field("language", &self.language)
            .field("base_url", &self.base_url())
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration using the default base URL
    pub fn new(
        token: impl Into<String>,
        project_id: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            project_id: project_id.into(),
            language: language.into(),
            base_url: None,
        }
    }

    /// Override the API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Effective API root
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `AZBOX_TOKEN`, `AZBOX_PROJECT_ID`, `AZBOX_LANGUAGE` and the
    /// optional `AZBOX_BASE_URL`. Missing values are left empty and reported
    /// by [`ClientConfig::validate`].
    pub fn from_env() -> Self {
        let base_url = std::env::var("AZBOX_BASE_URL")
            .ok()
            .filter(|url| !url.is_empty());

        Self {
            token: std::env::var("AZBOX_TOKEN").unwrap_or_default(),
            project_id: std::env::var("AZBOX_PROJECT_ID").unwrap_or_default(),
            language: std::env::var("AZBOX_LANGUAGE").unwrap_or_default(),
            base_url,
        }
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        debug!("Loaded client config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(KeywordError::config("'token' is required"));
        }

        if self.project_id.is_empty() {
            return Err(KeywordError::config("'projectId' is required"));
        }

        // URL path normalization drops dot segments, which would change the route.
        if matches!(self.project_id.as_str(), "." | "..") {
            return Err(KeywordError::config(format!(
                "'projectId' cannot be '{}'",
                self.project_id
            )));
        }

        if self.language.is_empty() {
            return Err(KeywordError::config("'language' is required"));
        }

        Ok(())
    }
}
