use bigdecimal::BigDecimal;
use num_traits::Signed;

use super::errors::ProductError;

/// Stable catalog identifier of a product.
/// Cart entries are unique by this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new ProductId, rejecting empty or whitespace-only values.
    pub fn new(id: impl Into<String>) -> Result<Self, ProductError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ProductError::IdEmpty);
        }
        Ok(Self(id))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ProductId {
    type Error = ProductError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

/// Non-negative price of a single unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPrice(BigDecimal);

impl UnitPrice {
    pub fn new(amount: BigDecimal) -> Result<Self, ProductError> {
        if amount.is_negative() {
            return Err(ProductError::NegativePrice);
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.0
    }
}

impl std::fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UnitPrice {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s
            .trim()
            .parse::<BigDecimal>()
            .map_err(|_| ProductError::InvalidPrice)?;
        Self::new(amount)
    }
}

impl From<u32> for UnitPrice {
    fn from(amount: u32) -> Self {
        Self(BigDecimal::from(amount))
    }
}
