use idiomflow_types::{IdiomRecord, LoadStatus, RawIdiom};
use uuid::Uuid;

use crate::difficulty::Difficulty;
use crate::normalize::normalize_category;

/// Immutable in-memory idiom catalog.
///
/// Built once at startup and shared read-only afterwards; every query in
/// [`crate::query`] is a scan over `records` in load order.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<IdiomRecord>,
    status: LoadStatus,
}

impl Catalog {
    /// Build a catalog from raw source records.
    ///
    /// Every accepted record gets a fresh id. Records whose `idiom` or
    /// `meaning` is blank are dropped and counted in the load status.
    pub fn from_raw<I>(raw: I, source: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = RawIdiom>,
    {
        let mut records = Vec::new();
        let mut skipped = 0;

        for (position, entry) in raw.into_iter().enumerate() {
            match build_record(entry) {
                Some(record) => records.push(record),
                None => {
                    tracing::debug!("Skipping idiom #{position}: missing idiom or meaning");
                    skipped += 1;
                }
            }
        }

        let status = LoadStatus::Loaded {
            source: source.into(),
            records: records.len(),
            skipped,
        };

        Self { records, status }
    }

    /// Catalog with no records, used when the source is unusable
    pub fn empty(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            status: LoadStatus::Empty {
                reason: reason.into(),
            },
        }
    }

    /// Replace the status of a freshly built catalog
    pub(crate) fn with_status(mut self, status: LoadStatus) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_degraded(&self) -> bool {
        self.status.is_degraded()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by the id it was given at load time
    pub fn get(&self, id: &Uuid) -> Option<&IdiomRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub(crate) fn records(&self) -> &[IdiomRecord] {
        &self.records
    }
}

fn build_record(raw: RawIdiom) -> Option<IdiomRecord> {
    let idiom = raw.idiom.trim();
    let meaning = raw.meaning.trim();

    if idiom.is_empty() || meaning.is_empty() {
        return None;
    }

    Some(IdiomRecord {
        id: Uuid::new_v4(),
        idiom: idiom.to_string(),
        meaning: meaning.to_string(),
        example: raw.example.trim().to_string(),
        related_idiom: raw.related_idiom.trim().to_string(),
        difficulty_level: Difficulty::canonical_label(&raw.difficulty_level),
        category: normalize_category(&raw.category),
        origin: raw.origin.trim().to_string(),
    })
}
