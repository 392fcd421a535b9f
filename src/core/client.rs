//! Async client for the keyword endpoint

use reqwest::header::ACCEPT;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

use crate::core::config::ClientConfig;
use crate::core::errors::{KeywordError, Result};
use crate::core::models::{KeywordRecord, QueryOptions};

/// Read-only client for `GET /projects/{projectId}/keywords`
#[derive(Debug, Clone)]
pub struct KeywordClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
    base_url: Url,
}

impl KeywordClient {
    /// Create a new client.
    ///
    /// Validates the configuration eagerly; no request is made here.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client on top of a caller-supplied transport
    pub fn with_http_client(config: ClientConfig, client: reqwest::Client) -> Result<Self> {
        config.validate()?;
        let base_url = parse_base_url(config.base_url())?;

        debug!(
            "Keyword client ready for project {} ({}) at {}",
            config.project_id, config.language, base_url
        );

        Ok(Self {
            client,
            config: Arc::new(config),
            base_url,
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full request URL for a keyword query, token included
    pub fn keywords_url(&self, options: &QueryOptions) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| KeywordError::config("base URL cannot carry a path"))?
            .pop_if_empty()
            .push("projects")
            .push(&self.config.project_id)
            .push("keywords");

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("token", &self.config.token);
            query.append_pair("language", &self.config.language);
            if let Some(after) = options.after_updated_at_param() {
                query.append_pair("afterUpdatedAtStr", &after);
            }
        }

        Ok(url)
    }

    /// Fetch all keywords of the project for the configured language
    pub async fn fetch_keywords(&self, options: &QueryOptions) -> Result<Vec<KeywordRecord>> {
        let items = self.fetch_keywords_raw(options).await?;
        Ok(items.into_iter().map(KeywordRecord::from).collect())
    }

    /// Same request as [`KeywordClient::fetch_keywords`], elements left undecoded
    pub async fn fetch_keywords_raw(&self, options: &QueryOptions) -> Result<Vec<Value>> {
        let url = self.keywords_url(options)?;

        // The URL carries the token, so it is never logged.
        debug!(
            project_id = %self.config.project_id,
            language = %self.config.language,
            after_updated_at = ?options.after_updated_at,
            "Fetching keywords"
        );

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Keyword request failed with status {}", status);

            return Err(KeywordError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)?;

        match json {
            Value::Array(items) => {
                info!("Fetched {} keywords for project {}", items.len(), self.config.project_id);
                Ok(items)
            }
            other => Err(KeywordError::UnexpectedResponseShape {
                found: json_kind(&other),
            }),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| KeywordError::config(format!("invalid base URL '{}': {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(KeywordError::config(format!(
            "base URL '{}' must be an absolute http(s) URL",
            raw
        )));
    }

    Ok(url)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
