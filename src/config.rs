//! Environment-driven configuration.
//!
//! There is no config file; every knob is an environment variable so the
//! binary stays free of file I/O outside explicit `--add-file` input.

use std::env;

pub const STRICT_CATEGORIES_ENV: &str = "WORKSHOP_CATALOG_STRICT_CATEGORIES";
pub const SEED_ENV: &str = "WORKSHOP_CATALOG_SEED";
pub const LOG_ENV: &str = "WORKSHOP_CATALOG_LOG";

const DEFAULT_LOG_FILTER: &str = "workshop_catalog=info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Reject unknown category filter values instead of matching nothing.
    pub strict_categories: bool,
    /// Start from the example workshops rather than an empty store.
    pub seed: bool,
    /// `tracing_subscriber::EnvFilter` directive for binaries.
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            strict_categories: false,
            seed: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            strict_categories: lookup(STRICT_CATEGORIES_ENV)
                .map(|v| flag_enabled(&v))
                .unwrap_or(defaults.strict_categories),
            seed: lookup(SEED_ENV)
                .map(|v| flag_enabled(&v))
                .unwrap_or(defaults.seed),
            log_filter: lookup(LOG_ENV)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

/// A flag is on when it is non-empty after trimming and not `0`.
pub fn flag_enabled(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != "0"
}
