//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use domain::{Catalog, CatalogError};
use thiserror::Error;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `3000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `RECEIPT_DIR`: where text receipts are written (default: `"receipts"`)
/// - `MENU_PATH`: JSON menu file; the built-in café menu is used when unset
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub receipt_dir: PathBuf,
    pub menu_path: Option<PathBuf>,
}

/// Errors raised while loading startup resources.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The menu file could not be read.
    #[error("Failed to read menu file {path}: {source}")]
    MenuRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The menu file was read but is not a valid catalog.
    #[error("Invalid menu: {0}")]
    Menu(#[from] CatalogError),
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            receipt_dir: std::env::var_os("RECEIPT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("receipts")),
            menu_path: std::env::var_os("MENU_PATH").map(PathBuf::from),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the menu, from `menu_path` if set.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.menu_path else {
            return Ok(Catalog::cafe_menu());
        };

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::MenuRead {
            path: path.clone(),
            source,
        })?;
        Ok(Catalog::from_json_str(&json)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            receipt_dir: PathBuf::from("receipts"),
            menu_path: None,
        }
    }
}
