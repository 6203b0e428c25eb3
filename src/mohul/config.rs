use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILENAME: &str = "mohul.json";
const DEFAULT_USERS_FILE: &str = "users.txt";
const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";
const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 20;

/// Configuration for mohul, stored in `<data-dir>/mohul.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MohulConfig {
    /// Account file, relative to the data directory
    #[serde(default = "default_users_file")]
    pub users_file: String,

    /// Stock file, relative to the data directory
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,

    /// Product names tracked, in presentation order
    #[serde(default = "default_catalog")]
    pub catalog: Vec<String>,

    /// Products below this quantity are flagged as running low
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i32,

    /// Reject zero and negative quantities for production, sales and returns
    #[serde(default)]
    pub strict_quantities: bool,
}

fn default_users_file() -> String {
    DEFAULT_USERS_FILE.to_string()
}

fn default_inventory_file() -> String {
    DEFAULT_INVENTORY_FILE.to_string()
}

fn default_catalog() -> Vec<String> {
    vec![
        "Hair Oil".to_string(),
        "Hair Pack".to_string(),
        "Hair Spray".to_string(),
    ]
}

fn default_low_stock_threshold() -> i32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for MohulConfig {
    fn default() -> Self {
        Self {
            users_file: default_users_file(),
            inventory_file: default_inventory_file(),
            catalog: default_catalog(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            strict_quantities: false,
        }
    }
}

impl MohulConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: MohulConfig = serde_json::from_str(&content)?;
        debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }
}
