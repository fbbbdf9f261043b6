//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                               │
//! │     --data-dir ./shop   --no-seed                                       │
//! │                                                                         │
//! │  2. Environment Variables                                               │
//! │     STOX_DATA_DIR=./shop   STOX_STORE_NAME="OBA MARKET"   STOX_SEED=0   │
//! │                                                                         │
//! │  3. TOML Config File                                                    │
//! │     --config <path>, otherwise                                          │
//! │     ~/.config/stox/stox.toml (Linux)                                    │
//! │     ~/Library/Application Support/com.stox.stox/stox.toml (macOS)       │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "OBA MARKET"
//! receipt_footer = "Thank you for shopping with us!"
//!
//! [files]
//! data_dir = "/var/lib/stox"
//! products_file = "products.csv"
//! employees_file = "employees.csv"
//! barcode_dir = "barcodes"
//! receipt_dir = "receipts"
//!
//! [session]
//! seed_sample_data = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stox_core::ReceiptLayout;
use stox_store::StoreConfig;
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "stox.toml";

// =============================================================================
// Store Settings
// =============================================================================

/// Shop identity, printed on receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub name: String,
    pub receipt_footer: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        let layout = ReceiptLayout::default();
        StoreSettings {
            name: layout.store_name,
            receipt_footer: layout.footer,
        }
    }
}

// =============================================================================
// Session Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Start with three products, a cashier and a manager.
    pub seed_sample_data: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            seed_sample_data: true,
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoxConfig {
    #[serde(default)]
    pub store: StoreSettings,

    /// File layout, handed to `FileStore::open` as-is.
    #[serde(default)]
    pub files: StoreConfig,

    #[serde(default)]
    pub session: SessionSettings,
}

impl StoxConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (stox.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// file at the platform default location is not.
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(path = %path.display(), "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(path = %path.display(), "Loading config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> CliResult<Self> {
        toml::from_str(contents).map_err(|e| CliError::config(e.to_string()))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(CliError::config("store.name must not be empty"));
        }

        let names = [
            ("files.products_file", &self.files.products_file),
            ("files.employees_file", &self.files.employees_file),
            ("files.barcode_dir", &self.files.barcode_dir),
            ("files.receipt_dir", &self.files.receipt_dir),
        ];
        for (key, path) in names {
            if path.as_os_str().is_empty() {
                return Err(CliError::config(format!("{key} must not be empty")));
            }
        }

        if self.files.products_path() == self.files.employees_path() {
            return Err(CliError::config(
                "files.products_file and files.employees_file must differ",
            ));
        }

        Ok(())
    }

    /// Applies `STOX_*` overrides, reading variables through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("STOX_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data directory from environment");
            self.files.data_dir = PathBuf::from(dir);
        }

        if let Some(name) = lookup("STOX_STORE_NAME") {
            self.store.name = name;
        }

        if let Some(seed) = lookup("STOX_SEED") {
            match parse_flag(&seed) {
                Some(flag) => self.session.seed_sample_data = flag,
                None => warn!(value = %seed, "Ignoring unrecognized STOX_SEED value"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stox", "stox")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn receipt_layout(&self) -> ReceiptLayout {
        ReceiptLayout {
            store_name: self.store.name.clone(),
            footer: self.store.receipt_footer.clone(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
