use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persistent volume the CSV files are mounted at by default.
pub const DEFAULT_DATA_DIR: &str = "/shivam_PV_dir";

/// Configuration for the `product_sum` module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductSumConfig {
    /// Base directory requested filenames are resolved against. Only files
    /// inside this directory (and its subdirectories) can be read.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for ProductSumConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}
