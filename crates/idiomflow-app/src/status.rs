use idiomflow_core::Catalog;
use idiomflow_types::{CatalogStats, LoadStatus};
use serde::Serialize;

/// Health snapshot of the running catalog
#[derive(Debug, Clone, Serialize)]
pub struct AppStatus {
    pub degraded: bool,
    pub load: LoadStatus,
    pub stats: CatalogStats,
}

impl AppStatus {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            degraded: catalog.is_degraded(),
            load: catalog.status().clone(),
            stats: catalog.stats(),
        }
    }
}
