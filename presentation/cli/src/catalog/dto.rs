use serde::Deserialize;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::ProductId;

/// A product as it appears in a catalog JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    /// Catalog identifier, string or integer
    pub id: IdValue,
    pub name: String,
    /// Unit price as a JSON number
    pub price: serde_json::Number,
    /// Thumbnail image URL
    pub image: String,
    /// Detail carousel image URLs
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Text(String),
    Number(u64),
}

impl std::fmt::Display for IdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdValue::Text(text) => write!(f, "{}", text),
            IdValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl TryFrom<ProductDto> for Product {
    type Error = ProductError;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        Product::new(NewProductProps {
            id: ProductId::new(dto.id.to_string())?,
            name: dto.name,
            // serde_json prints the shortest decimal form, so 19.99 stays 19.99
            price: dto.price.to_string().parse()?,
            image: dto.image,
            images: dto.images,
            description: dto.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(json: &str) -> ProductDto {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn should_convert_dto_with_numeric_id() {
        let product = Product::try_from(dto(
            r#"{"id": 3, "name": "Ultraboost", "price": 189.99, "image": "u.jpg"}"#,
        ))
        .unwrap();

        assert_eq!(product.id.as_str(), "3");
        assert_eq!(product.price.to_string(), "189.99");
        assert!(product.images.is_empty());
    }

    #[test]
    fn should_convert_dto_with_string_id_and_images() {
        let product = Product::try_from(dto(
            r#"{"id": "sku-9", "name": "Chuck 70", "price": 85, "image": "c.jpg", "images": ["c1.jpg", "c2.jpg"], "description": "Canvas"}"#,
        ))
        .unwrap();

        assert_eq!(product.id.as_str(), "sku-9");
        assert_eq!(product.images.len(), 2);
        assert_eq!(product.description, "Canvas");
    }

    #[test]
    fn should_reject_negative_price() {
        let result = Product::try_from(dto(
            r#"{"id": "1", "name": "Refund", "price": -5, "image": ""}"#,
        ));

        assert!(matches!(result, Err(ProductError::NegativePrice)));
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Product::try_from(dto(r#"{"id": "1", "name": " ", "price": 5, "image": ""}"#));

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }
}
