use std::sync::Arc;

use anyhow::Context;
use idiomflow_config::Config;
use idiomflow_core::{Catalog, CatalogLoader, FileSource};

pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    /// Read the catalog named by the config off the async runtime
    pub async fn load(config: Config) -> anyhow::Result<Self> {
        let source = FileSource::new(config.catalog.data_path.clone());
        let fallback = config.catalog.fallback_on_error;

        let catalog = tokio::task::spawn_blocking(move || {
            CatalogLoader::load_with(&source, fallback)
        })
        .await
        .context("catalog loader task panicked")?
        .with_context(|| {
            format!(
                "failed to load catalog from {}",
                config.catalog.data_path.display()
            )
        })?;

        if catalog.is_degraded() {
            tracing::warn!("Catalog degraded: {}", catalog.status());
        }

        Ok(Self::new(config, catalog))
    }
}
