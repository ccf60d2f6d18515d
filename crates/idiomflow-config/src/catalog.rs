use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_data_path() -> PathBuf {
    PathBuf::from("data/idioms.json")
}

fn default_fallback() -> bool {
    true
}

fn default_limit() -> usize {
    50
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file the catalog is read from at startup
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// Serve the built-in sample when the data file cannot be read
    #[serde(default = "default_fallback")]
    pub fallback_on_error: bool,
    /// Search limit used when the caller does not pass one
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            fallback_on_error: default_fallback(),
            default_limit: default_limit(),
        }
    }
}

impl CatalogConfig {
    pub fn new() -> Self {
        let data_path = env::var("IDIOMFLOW_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_path());

        let fallback_on_error = env_flag("IDIOMFLOW_FALLBACK_ON_ERROR").unwrap_or(default_fallback());

        let default_limit = env::var("IDIOMFLOW_DEFAULT_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_limit());

        Self {
            data_path,
            fallback_on_error,
            default_limit,
        }
    }
}
