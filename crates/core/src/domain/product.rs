use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductCategory(pub String);

impl ProductCategory {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductCategory {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Largest base price or shipping surcharge accepted. Keeps every pricing
/// sum and the loyalty point count well inside `Decimal` and `u64` range.
pub fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000_000, 0)
}

/// A catalog item as seen by the pricing engine.
///
/// Construction goes through [`Product::new`] so a product with a negative
/// or out-of-range base price never reaches the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    base_price: Decimal,
    category: ProductCategory,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        base_price: Decimal,
        category: impl Into<ProductCategory>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if base_price < Decimal::ZERO {
            return Err(DomainError::NegativePrice { product: name, price: base_price });
        }
        if base_price > max_amount() {
            return Err(DomainError::PriceTooLarge {
                product: name,
                price: base_price,
                limit: max_amount(),
            });
        }

        Ok(Self { name, base_price, category: category.into() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    pub fn category(&self) -> &ProductCategory {
        &self.category
    }
}
