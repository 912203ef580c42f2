use super::{
    catalog_config::CatalogConfig, persistence_config::PersistenceConfig,
    storage_config::StorageConfig,
};

pub struct AppConfig {
    pub storage: StorageConfig,
    pub persistence: PersistenceConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            persistence: PersistenceConfig::from_env(),
            catalog: CatalogConfig::from_env(),
        }
    }
}
