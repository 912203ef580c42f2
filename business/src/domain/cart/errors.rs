use crate::domain::product::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("cart.zero_quantity")]
    ZeroQuantity(ProductId),
    #[error("cart.duplicated_product")]
    DuplicatedProduct(ProductId),
}
