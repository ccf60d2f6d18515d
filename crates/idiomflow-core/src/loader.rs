use std::io::ErrorKind;
use std::path::PathBuf;

use idiomflow_types::{LoadStatus, RawIdiom};
use serde_json::Value;

use crate::catalog::Catalog;
use crate::error::LoadError;

/// Where catalog records come from
pub trait CatalogSource {
    /// Human readable origin, used in logs and the load status
    fn describe(&self) -> String;

    /// Read every raw record the source holds
    fn read(&self) -> Result<Vec<RawIdiom>, LoadError>;
}

/// JSON array of idiom objects stored on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Vec<RawIdiom>, LoadError> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::FileNotFound(self.describe()),
            _ => LoadError::IoError(e),
        })?;
        parse_records(&json)
    }
}

/// JSON text already held in memory
#[derive(Debug, Clone)]
pub struct JsonSource {
    json: String,
}

impl JsonSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl CatalogSource for JsonSource {
    fn describe(&self) -> String {
        "inline json".to_string()
    }

    fn read(&self) -> Result<Vec<RawIdiom>, LoadError> {
        parse_records(&self.json)
    }
}

impl CatalogSource for [RawIdiom] {
    fn describe(&self) -> String {
        "in-memory records".to_string()
    }

    fn read(&self) -> Result<Vec<RawIdiom>, LoadError> {
        Ok(self.to_vec())
    }
}

/// Parse the catalog file format: a top level array of objects.
///
/// Elements that are not objects with string fields are skipped with a
/// blank record so they count as rejected rather than failing the load.
fn parse_records(json: &str) -> Result<Vec<RawIdiom>, LoadError> {
    let value: Value = serde_json::from_str(json)?;

    let Value::Array(items) = value else {
        return Err(LoadError::InvalidFormat(
            "expected a JSON array of idiom objects".to_string(),
        ));
    };

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(position, item)| {
            serde_json::from_value(item).unwrap_or_else(|e| {
                tracing::debug!("Idiom #{position} is malformed: {e}");
                RawIdiom::default()
            })
        })
        .collect())
}

pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog, surfacing any source failure to the caller
    pub fn try_load<S>(source: &S) -> Result<Catalog, LoadError>
    where
        S: CatalogSource + ?Sized,
    {
        let origin = source.describe();
        tracing::info!("Loading idioms from {origin}...");
        let raw = source.read()?;
        let catalog = Catalog::from_raw(raw, origin);
        tracing::info!("{}", catalog.status());
        Ok(catalog)
    }

    /// Load a catalog, never failing.
    ///
    /// A missing source yields the built-in sample, any other failure an
    /// empty catalog. Either way the catalog reports itself as degraded.
    pub fn load<S>(source: &S) -> Catalog
    where
        S: CatalogSource + ?Sized,
    {
        Self::try_load(source).unwrap_or_else(Self::recover)
    }

    pub fn load_with<S>(source: &S, with_fallback_on_error: bool) -> Result<Catalog, LoadError>
    where
        S: CatalogSource + ?Sized,
    {
        if with_fallback_on_error {
            Ok(Self::load(source))
        } else {
            Self::try_load(source)
        }
    }

    fn recover(error: LoadError) -> Catalog {
        let reason = error.to_string();

        if error.is_missing_source() {
            tracing::warn!("Idioms file not found, using sample data: {reason}");
            Catalog::from_raw(Self::sample_records(), "built-in sample")
                .with_status(LoadStatus::Fallback { reason })
        } else {
            tracing::error!("Error loading idioms: {reason}");
            tracing::warn!("Starting with empty catalog");
            Catalog::empty(reason)
        }
    }

    /// Placeholder served when no catalog file is available
    pub fn sample_records() -> Vec<RawIdiom> {
        vec![RawIdiom {
            idiom: "Break the ice".to_string(),
            meaning: "To initiate conversation in a social setting".to_string(),
            example: "She told a joke to break the ice at the meeting.".to_string(),
            related_idiom: "Start the ball rolling".to_string(),
            difficulty_level: "Easy".to_string(),
            category: "Popular".to_string(),
            origin: "From old sailing ships breaking ice to create a path".to_string(),
        }]
    }
}
