use serde::Deserialize;
use std::path::PathBuf;

use crate::models::Catalog;
use crate::services::catalog_loader::{CatalogSource, SPICY_LABELS_FILE};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with per-category menu files; the built-in table is used when unset
    #[serde(default)]
    pub menu_data_dir: Option<PathBuf>,

    /// Spiciness label file, defaults to `spicy_emoji.json` in the data directory
    #[serde(default)]
    pub spicy_labels_file: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn catalog_source(&self) -> CatalogSource {
        match &self.menu_data_dir {
            Some(dir) => CatalogSource::data_dir(dir),
            None => CatalogSource::Table(Catalog::builtin()),
        }
    }

    pub fn spicy_labels_path(&self) -> Option<PathBuf> {
        self.spicy_labels_file.clone().or_else(|| {
            self.menu_data_dir
                .as_ref()
                .map(|dir| dir.join(SPICY_LABELS_FILE))
        })
    }
}
