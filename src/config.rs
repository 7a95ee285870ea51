//! TOML configuration parsing and validation.
//!
//! ```toml
//! [db]
//! path = "./data/recall.sqlite"
//!
//! [retrieval]
//! default_limit = 10
//! related_limit = 5
//! related_strategy = "none"
//! ```
//!
//! Only `[db].path` is required; every `[retrieval]` key has a default.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use knowledge_recall_core::rank::DEFAULT_SEARCH_LIMIT;
use knowledge_recall_core::related::DEFAULT_RELATED_LIMIT;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    /// Results returned by `recall search` when `--limit` is omitted.
    #[serde(default = "default_limit")]
    pub default_limit: i64,
    /// Results returned by `recall related` when `--limit` is omitted.
    #[serde(default = "default_related_limit")]
    pub related_limit: i64,
    /// `"none"` (always empty) or `"title"` (title overlap).
    #[serde(default = "default_related_strategy")]
    pub related_strategy: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            related_limit: default_related_limit(),
            related_strategy: default_related_strategy(),
        }
    }
}

fn default_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT
}
fn default_related_limit() -> i64 {
    DEFAULT_RELATED_LIMIT
}
fn default_related_strategy() -> String {
    "none".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&content)
}

/// Parse and validate a configuration document.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if config.retrieval.default_limit < 1 {
        anyhow::bail!("retrieval.default_limit must be >= 1");
    }

    if config.retrieval.related_limit < 1 {
        anyhow::bail!("retrieval.related_limit must be >= 1");
    }

    match config.retrieval.related_strategy.as_str() {
        "none" | "title" => {}
        other => anyhow::bail!(
            "Unknown related strategy: '{}'. Must be none or title.",
            other
        ),
    }

    Ok(config)
}
