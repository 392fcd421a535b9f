//! CLI command definitions and handlers

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::core::client::KeywordClient;
use crate::core::config::ClientConfig;
use crate::core::models::{translation_map, KeywordRecord, QueryOptions};

/// Connection flags; each one falls back to its `AZBOX_*` environment variable
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// API token (defaults to AZBOX_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Project ID (defaults to AZBOX_PROJECT_ID)
    #[arg(long, global = true)]
    pub project_id: Option<String>,

    /// Language code, e.g. EN or ES (defaults to AZBOX_LANGUAGE)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// API base URL (defaults to AZBOX_BASE_URL, then https://api.azbox.io/v1)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl ConfigArgs {
    /// Overlay the flags that were given onto an existing configuration
    pub fn apply(self, mut config: ClientConfig) -> ClientConfig {
        if let Some(token) = self.token {
            config.token = token;
        }
        if let Some(project_id) = self.project_id {
            config.project_id = project_id;
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = Some(base_url);
        }
        config
    }

    /// Resolve against the environment
    pub fn into_config(self) -> ClientConfig {
        self.apply(ClientConfig::from_env())
    }
}

/// Commands for the keyword CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch keywords and print them as a JSON array
    Fetch {
        /// Only keywords updated after this RFC 3339 instant
        #[arg(long)]
        after: Option<DateTime<Utc>>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Export a flat `{ id: translation }` JSON object
    Export {
        /// Only keywords updated after this RFC 3339 instant
        #[arg(long)]
        after: Option<DateTime<Utc>>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle fetch command
pub async fn handle_fetch(
    config: ClientConfig,
    after: Option<DateTime<Utc>>,
    output: Option<PathBuf>,
    pretty: bool,
) -> anyhow::Result<()> {
    let records = fetch(config, after).await?;
    let rendered = render_records(&records, pretty)?;
    write_output(output.as_deref(), &rendered)?;
    Ok(())
}

/// Handle export command
pub async fn handle_export(
    config: ClientConfig,
    after: Option<DateTime<Utc>>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let records = fetch(config, after).await?;
    let translations = translation_map(&records);

    if translations.len() < records.len() {
        info!(
            "Skipped {} keywords without id or translation",
            records.len() - translations.len()
        );
    }

    let rendered = render_translations(&translations)?;
    write_output(output.as_deref(), &rendered)?;
    Ok(())
}

async fn fetch(
    config: ClientConfig,
    after: Option<DateTime<Utc>>,
) -> anyhow::Result<Vec<KeywordRecord>> {
    let start_time = Instant::now();
    let client = KeywordClient::new(config)?;

    let options = QueryOptions {
        after_updated_at: after,
    };
    let records = client.fetch_keywords(&options).await?;

    info!(
        "Fetched {} keywords in {:?}",
        records.len(),
        start_time.elapsed()
    );

    Ok(records)
}

/// Serialize records as a JSON array
pub fn render_records(records: &[KeywordRecord], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
}

/// Serialize an `id -> translation` map as pretty JSON
pub fn render_translations(translations: &BTreeMap<String, String>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(translations)
}

fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", content))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
