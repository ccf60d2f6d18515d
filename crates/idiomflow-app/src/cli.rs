use std::path::PathBuf;

use clap::{Parser, Subcommand};
use idiomflow_config::{Config, LogFormat};
use idiomflow_core::SortOrder;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "idiomflow",
    about = "Query the IdiomFlow idiom catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog JSON file (overrides IDIOMFLOW_DATA_PATH)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Fail instead of serving fallback data when the catalog cannot be read
    #[arg(long, global = true)]
    pub no_fallback: bool,

    /// Log output format: pretty or json (overrides IDIOMFLOW_LOG_FORMAT)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Layer command line overrides on top of the environment config
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.data {
            config.catalog.data_path = path.clone();
        }
        if self.no_fallback {
            config.catalog.fallback_on_error = false;
        }
        if let Some(format) = self.log_format {
            config.log.format = format;
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every idiom in catalog order
    List,

    /// Search and filter idioms
    Search {
        /// Text to look for in the idiom or its meaning
        #[arg(short, long)]
        query: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        difficulty: Option<String>,

        /// Maximum number of results (defaults to IDIOMFLOW_DEFAULT_LIMIT)
        #[arg(long)]
        limit: Option<usize>,

        /// load, alphabetical or difficulty
        #[arg(long, default_value = "load")]
        sort: SortOrder,
    },

    /// Print a single idiom by id
    Get { id: Uuid },

    /// List the categories present in the catalog
    Categories,

    /// List the difficulty levels present in the catalog
    Difficulties,

    /// Catalog totals
    Stats,

    /// Idiom counts per category and per difficulty
    Breakdown,

    /// How the catalog was loaded
    Status,

    /// Show the canonical form of a category label
    Normalize { label: String },

    /// Print the effective configuration
    Config,

    /// Service banner and catalog summary
    About,
}
