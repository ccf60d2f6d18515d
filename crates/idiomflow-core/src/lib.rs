pub mod catalog;
pub mod difficulty;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod query;

pub use catalog::Catalog;
pub use difficulty::Difficulty;
pub use error::LoadError;
pub use loader::{CatalogLoader, CatalogSource, FileSource, JsonSource};
pub use normalize::{CategoryNormalizer, Normalizer, normalize_category};
pub use query::{DEFAULT_LIMIT, SearchOptions, SortOrder};
