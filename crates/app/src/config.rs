//! Session configuration from environment variables.
//!
//! | variable | default | meaning |
//! |---|---|---|
//! | `STOREFRONT_CATALOG_PATH` | unset (built-in catalog) | JSON catalog file |
//! | `STOREFRONT_POPULAR_CATEGORIES` | `2` | categories featured on the home screen |
//! | `STOREFRONT_LOG_FORMAT` | `json` | `json` or `pretty` |

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_observability::LogFormat;

pub const CATALOG_PATH_VAR: &str = "STOREFRONT_CATALOG_PATH";
pub const POPULAR_CATEGORIES_VAR: &str = "STOREFRONT_POPULAR_CATEGORIES";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

const DEFAULT_POPULAR_CATEGORIES: usize = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var}: {message}")]
    InvalidValue { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// External catalog file; the built-in catalog is used when absent.
    pub catalog_path: Option<PathBuf>,
    pub popular_categories: usize,
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            popular_categories: DEFAULT_POPULAR_CATEGORIES,
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get(CATALOG_PATH_VAR) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = get(POPULAR_CATEGORIES_VAR) {
            config.popular_categories =
                raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                    var: POPULAR_CATEGORIES_VAR,
                    value: raw.clone(),
                })?;
        }

        if let Some(raw) = get(LOG_FORMAT_VAR) {
            config.log_format = raw.parse().map_err(|e: storefront_observability::ParseLogFormatError| {
                ConfigError::InvalidValue {
                    var: LOG_FORMAT_VAR,
                    message: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }
}
