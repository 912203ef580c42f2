use super::errors::ProductError;
use super::value_objects::{ProductId, UnitPrice};

/// A catalog product. Supplied by the catalog data source and never mutated
/// by the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: UnitPrice,
    /// Thumbnail shown in lists.
    pub image: String,
    /// Detail carousel images, in display order.
    pub images: Vec<String>,
    pub description: String,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub price: UnitPrice,
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            price: props.price,
            image: props.image,
            images: props.images,
            description: props.description,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: UnitPrice,
        image: String,
        images: Vec<String>,
        description: String,
    ) -> Self {
        Self {
            id,
            name,
            price,
            image,
            images,
            description,
        }
    }
}
