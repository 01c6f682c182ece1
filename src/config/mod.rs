//! Configuration for movie-scout.
//!
//! Layering, lowest to highest precedence: built-in defaults, YAML config
//! file, environment variables, CLI flags.

mod file;
mod types;

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
pub use types::{
    AnalyticsConfig, AppConfig, CatalogConfig, TuiConfig, DEFAULT_CATALOG_API_BASE,
    DEFAULT_STORE_ENDPOINT, IMAGE_BASE_URL,
};
