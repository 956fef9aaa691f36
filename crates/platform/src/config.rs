//! Application configuration and constants
//!
//! Branding strings live here so screens and renderers reference one place.
//! Runtime settings come from an optional JSON file; every key is optional.

use std::path::{Path, PathBuf};

use events::{CatalogError, EventCatalog};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The application name
pub const APP_NAME: &str = "Eventos UDB";

/// The institution badge shown on the welcome and auth screens
pub const APP_BADGE: &str = "UDB";

/// Tagline under the application name
pub const APP_TAGLINE: &str = "Gestión de Eventos Comunitarios";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when neither `RUST_LOG` nor the config file sets one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The config file is not valid JSON for [`AppConfig`].
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    /// The event list named by `catalog_path` is invalid.
    #[error("invalid event list: {0}")]
    Catalog(#[from] CatalogError),
}

/// Runtime settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// `tracing` filter directive, e.g. `"ui=debug,info"`.
    pub log_filter: Option<String>,
    /// JSON file holding an array of events that replaces the sample list.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Parse a config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = read(path)?;
        Self::from_json_str(&text)
    }

    /// The filter to install when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// The event catalogue: the file named by `catalog_path`, or the samples.
    pub fn catalog(&self) -> Result<EventCatalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => {
                let text = read(path)?;
                let catalog = EventCatalog::from_json(&text)?;
                tracing::info!(path = %path.display(), events = catalog.len(), "event list loaded");
                Ok(catalog)
            }
            None => Ok(EventCatalog::sample()),
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
