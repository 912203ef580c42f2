use std::env;
use std::path::PathBuf;

use persistence::cart::repository::DEFAULT_CART_KEY;

const DEFAULT_DATA_DIR: &str = ".storefront";

/// Key-value storage configuration for the cart record
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub cart_key: String,
    /// Keep the cart in memory only; nothing is read from or written to disk.
    pub ephemeral: bool,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_DATA_DIR: directory holding stored records (default: ".storefront")
    /// - STOREFRONT_CART_KEY: key of the cart record (default: "@cart")
    pub fn from_env() -> Self {
        let data_dir =
            env::var("STOREFRONT_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let cart_key =
            env::var("STOREFRONT_CART_KEY").unwrap_or_else(|_| DEFAULT_CART_KEY.to_string());

        Self {
            data_dir: PathBuf::from(data_dir),
            cart_key,
            ephemeral: false,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cart_key: DEFAULT_CART_KEY.to_string(),
            ephemeral: false,
        }
    }
}
