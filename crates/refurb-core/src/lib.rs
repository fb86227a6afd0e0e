pub mod app_config;
pub mod config;
pub mod listing;
pub mod locales;
pub mod specs;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{CoverageGap, CoverageReport, Dataset, ListingIdentity, ProductListing};
pub use locales::{load_locales, parse_locales, LocaleProfile, LocaleTable};
pub use specs::{DeviceType, SpecSet};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read locales file {path}: {source}")]
    LocalesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse locales file: {0}")]
    LocalesFileParse(#[from] serde_yaml::Error),

    #[error("locale validation failed: {0}")]
    Validation(String),

    #[error("no valid locale in selection {requested:?}; available: {available:?}")]
    NoValidLocale {
        requested: Vec<String>,
        available: Vec<String>,
    },
}
