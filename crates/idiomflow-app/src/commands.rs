use anyhow::anyhow;
use idiomflow_core::{SearchOptions, normalize_category};
use serde_json::{Value, json};

use crate::cli::Command;
use crate::state::AppState;
use crate::status::AppStatus;

const BANNER: &str = "Welcome to IdiomFlow - Educational Idioms Platform";

/// Run one command against the loaded catalog and render it as JSON
pub fn execute(state: &AppState, command: &Command) -> anyhow::Result<Value> {
    let catalog = &state.catalog;

    let output = match command {
        Command::List => serde_json::to_value(catalog.fetch_all())?,
        Command::Search {
            query,
            category,
            difficulty,
            limit,
            sort,
        } => {
            let options = SearchOptions {
                query: query.clone(),
                category: category.clone(),
                difficulty: difficulty.clone(),
                limit: limit.unwrap_or(state.config.catalog.default_limit),
                sort: *sort,
            };
            serde_json::to_value(catalog.search(&options))?
        }
        Command::Get { id } => {
            let record = catalog
                .get(id)
                .ok_or_else(|| anyhow!("no idiom with id {id}"))?;
            serde_json::to_value(record)?
        }
        Command::Categories => json!({ "categories": catalog.distinct_categories() }),
        Command::Difficulties => json!({ "difficulties": catalog.distinct_difficulties() }),
        Command::Stats => serde_json::to_value(catalog.stats())?,
        Command::Breakdown => json!({
            "categories": catalog.category_counts(),
            "difficulties": catalog.difficulty_counts(),
        }),
        Command::Status => serde_json::to_value(AppStatus::from_catalog(catalog))?,
        Command::Normalize { label } => json!({
            "label": label,
            "normalized": normalize_category(label),
        }),
        Command::Config => serde_json::to_value(&state.config)?,
        Command::About => json!({
            "message": BANNER,
            "version": env!("CARGO_PKG_VERSION"),
            "status": AppStatus::from_catalog(catalog),
        }),
    };

    Ok(output)
}
