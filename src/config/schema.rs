use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::ScoreTable;

pub const DEFAULT_API_BASE: &str = "https://blightbane.io";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "30s";
pub const DEFAULT_RETRIES: usize = 3;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the JSON caches (default: ./data)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Base URL of the card API (default: https://blightbane.io)
    #[serde(default)]
    pub api_base: Option<String>,

    /// Per-request timeout, humantime format (e.g. "30s", "1m")
    #[serde(default)]
    pub request_timeout: Option<String>,

    /// Retries per request after the first attempt fails
    #[serde(default)]
    pub retries: Option<usize>,

    #[serde(default)]
    pub cards: Option<CardSearchConfig>,

    #[serde(default)]
    pub scoring: Option<ScoreTable>,
}

impl Config {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn retries(&self) -> usize {
        self.retries.unwrap_or(DEFAULT_RETRIES)
    }

    pub fn card_search(&self) -> CardSearchConfig {
        self.cards.clone().unwrap_or_default()
    }

    pub fn score_table(&self) -> ScoreTable {
        self.scoring.clone().unwrap_or_default()
    }
}

/// Exclusions always applied by the `cards` command.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CardSearchConfig {
    /// Summons, performance, form, hymn, affixes, attunements, ingredients
    pub excluded_categories: Vec<u32>,

    /// Conjured cards by default
    pub excluded_expansions: Vec<u32>,

    /// Card names to hide (case-insensitive)
    pub excluded_names: Vec<String>,
}

impl Default for CardSearchConfig {
    fn default() -> Self {
        Self {
            excluded_categories: vec![3, 6, 7, 8, 9, 12, 13, 16],
            excluded_expansions: vec![0],
            excluded_names: Vec::new(),
        }
    }
}
