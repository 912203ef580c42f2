use std::path::Path;

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;

use super::dto::ProductDto;

const DEMO_CATALOG: &str = include_str!("demo_catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.read_failed")]
    Read(#[from] std::io::Error),
    #[error("catalog.malformed")]
    Malformed(#[from] serde_json::Error),
    #[error("catalog.invalid_product")]
    InvalidProduct(#[from] ProductError),
    #[error("catalog.product_not_found: {0}")]
    ProductNotFound(String),
}

/// Static, ordered product list loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let dtos: Vec<ProductDto> = serde_json::from_str(raw)?;
        let products = dtos
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { products })
    }

    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_json(&raw)
    }

    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_json(DEMO_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &str) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }
}
