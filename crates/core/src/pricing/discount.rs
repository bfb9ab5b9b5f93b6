use rust_decimal::Decimal;

use crate::errors::DomainError;

pub trait DiscountStrategy: Send + Sync {
    /// Discount amount, in the same unit as `base_price`.
    fn discount(&self, base_price: Decimal) -> Decimal;
}

/// Discount of `base_price * rate`. No clamping is applied here; rates are
/// checked with [`validate_rate`] when a category is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PercentageDiscount {
    rate: Decimal,
}

impl PercentageDiscount {
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn discount(&self, base_price: Decimal) -> Decimal {
        base_price * self.rate
    }
}

pub fn validate_rate(category: &str, rate: Decimal) -> Result<(), DomainError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(DomainError::DiscountRateOutOfRange { category: category.to_owned(), rate });
    }
    Ok(())
}
