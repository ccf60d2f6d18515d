use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use idiomflow_types::{CatalogStats, IdiomRecord};

use crate::catalog::Catalog;
use crate::difficulty::Difficulty;

pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Order of the source file
    #[default]
    LoadOrder,
    /// By idiom text, ignoring case
    Alphabetical,
    /// Easy first, unknown labels last
    Difficulty,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "load" | "load-order" | "none" => Ok(SortOrder::LoadOrder),
            "alphabetical" | "alpha" => Ok(SortOrder::Alphabetical),
            "difficulty" => Ok(SortOrder::Difficulty),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Filters for [`Catalog::search`]. Unset filters match everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Substring of either the idiom or its meaning
    pub query: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub limit: usize,
    pub sort: SortOrder,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: None,
            category: None,
            difficulty: None,
            limit: DEFAULT_LIMIT,
            sort: SortOrder::LoadOrder,
        }
    }
}

impl SearchOptions {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Case folded text query, untrimmed so it stays a plain substring test.
/// Only the empty string means no filter.
fn fold_query(query: &Option<String>) -> Option<String> {
    query
        .as_deref()
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}

/// Case folded, trimmed label filter; blank labels impose nothing
fn fold_label(filter: &Option<String>) -> Option<String> {
    filter
        .as_deref()
        .map(|f| f.trim().to_lowercase())
        .filter(|f| !f.is_empty())
}

fn same_label(stored: &str, wanted: &str) -> bool {
    stored.trim().to_lowercase() == wanted
}

impl Catalog {
    /// Every record, in load order
    pub fn fetch_all(&self) -> &[IdiomRecord] {
        self.records()
    }

    /// Records matching all supplied filters, at most `options.limit` of them
    pub fn search(&self, options: &SearchOptions) -> Vec<&IdiomRecord> {
        let query = fold_query(&options.query);
        let category = fold_label(&options.category);
        let difficulty = fold_label(&options.difficulty);

        let matches = self.records().iter().filter(|record| {
            let text_hit = query.as_deref().is_none_or(|q| {
                record.idiom.to_lowercase().contains(q) || record.meaning.to_lowercase().contains(q)
            });
            let category_hit = category
                .as_deref()
                .is_none_or(|c| same_label(&record.category, c));
            let difficulty_hit = difficulty
                .as_deref()
                .is_none_or(|d| same_label(&record.difficulty_level, d));

            text_hit && category_hit && difficulty_hit
        });

        let results: Vec<&IdiomRecord> = match options.sort {
            SortOrder::LoadOrder => matches.take(options.limit).collect(),
            SortOrder::Alphabetical => {
                let mut all: Vec<_> = matches.collect();
                all.sort_by_cached_key(|r| r.idiom.to_lowercase());
                all.truncate(options.limit);
                all
            }
            SortOrder::Difficulty => {
                let mut all: Vec<_> = matches.collect();
                all.sort_by_key(|r| Difficulty::rank(&r.difficulty_level));
                all.truncate(options.limit);
                all
            }
        };

        tracing::debug!(
            "search {:?} matched {} of {} idioms",
            options,
            results.len(),
            self.len()
        );

        results
    }

    pub fn distinct_categories(&self) -> BTreeSet<String> {
        self.records().iter().map(|r| r.category.clone()).collect()
    }

    pub fn distinct_difficulties(&self) -> BTreeSet<String> {
        self.records()
            .iter()
            .map(|r| r.difficulty_level.clone())
            .collect()
    }

    /// Totals recomputed from the records on every call
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total: self.len(),
            categories: self.distinct_categories().len(),
            difficulty_levels: self.distinct_difficulties().len(),
        }
    }

    /// Number of idioms per category
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        count_by(self.records(), |r| &r.category)
    }

    /// Number of idioms per difficulty label
    pub fn difficulty_counts(&self) -> BTreeMap<String, usize> {
        count_by(self.records(), |r| &r.difficulty_level)
    }
}

fn count_by<F>(records: &[IdiomRecord], key: F) -> BTreeMap<String, usize>
where
    F: Fn(&IdiomRecord) -> &String,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(key(record).clone()).or_insert(0) += 1;
    }
    counts
}
