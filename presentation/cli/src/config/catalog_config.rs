use std::env;
use std::path::PathBuf;

/// Where the product catalog comes from.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in demo catalog is used when unset.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Environment variables:
    /// - STOREFRONT_CATALOG_PATH: path to a JSON catalog (optional)
    pub fn from_env() -> Self {
        let path = env::var("STOREFRONT_CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self { path }
    }
}
