pub mod app_config;
pub mod catalog_config;
pub mod persistence_config;
pub mod storage_config;
