#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("product.id_empty")]
    IdEmpty,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.negative_price")]
    NegativePrice,
}
