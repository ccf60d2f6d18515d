use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One idiom entry as served to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdiomRecord {
    pub id: Uuid,
    pub idiom: String,
    pub meaning: String,
    pub example: String,
    /// Display text only, may name an idiom that is not in the catalog
    pub related_idiom: String,
    pub difficulty_level: String,
    pub category: String,
    pub origin: String,
}

/// Record shape of the catalog data file. Every field is optional on disk
/// and both an absent field and `null` read as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawIdiom {
    #[serde(deserialize_with = "null_as_empty")]
    pub idiom: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub meaning: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub example: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub related_idiom: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub difficulty_level: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub origin: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    #[serde(rename = "total_idioms")]
    pub total: usize,
    pub categories: usize,
    pub difficulty_levels: usize,
}

/// How the catalog came to hold the records it serves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    Loaded {
        source: String,
        records: usize,
        skipped: usize,
    },
    /// Source failed, built-in sample in use
    Fallback { reason: String },
    /// Source failed and nothing could be substituted
    Empty { reason: String },
}

impl LoadStatus {
    pub fn is_degraded(&self) -> bool {
        !matches!(self, LoadStatus::Loaded { .. })
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Loaded {
                source,
                records,
                skipped,
            } => write!(f, "loaded {records} idioms from {source} ({skipped} skipped)"),
            LoadStatus::Fallback { reason } => write!(f, "serving fallback sample: {reason}"),
            LoadStatus::Empty { reason } => write!(f, "serving empty catalog: {reason}"),
        }
    }
}
