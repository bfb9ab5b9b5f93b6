use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::errors::DomainError;

pub trait LoyaltyStrategy: Send + Sync {
    /// Points earned on `base_price`. Always computed on the gross price.
    fn points(&self, base_price: Decimal) -> u64;
}

/// One point per full `tranche` spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrancheLoyalty {
    tranche: u32,
}

impl TrancheLoyalty {
    pub fn new(tranche: u32) -> Self {
        Self { tranche }
    }

    pub fn tranche(&self) -> u32 {
        self.tranche
    }
}

impl LoyaltyStrategy for TrancheLoyalty {
    fn points(&self, base_price: Decimal) -> u64 {
        if self.tranche == 0 || base_price <= Decimal::ZERO {
            return 0;
        }

        (base_price / Decimal::from(self.tranche)).floor().to_u64().unwrap_or(u64::MAX)
    }
}

pub fn validate_tranche(category: &str, tranche: u32) -> Result<(), DomainError> {
    if tranche == 0 {
        return Err(DomainError::ZeroTranche { category: category.to_owned() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{validate_tranche, LoyaltyStrategy, TrancheLoyalty};

    #[test]
    fn points_are_floored_per_tranche() {
        assert_eq!(TrancheLoyalty::new(10).points(Decimal::new(2999, 2)), 2);
        assert_eq!(TrancheLoyalty::new(20).points(Decimal::new(59999, 2)), 29);
        assert_eq!(TrancheLoyalty::new(50).points(Decimal::new(1999, 2)), 0);
        assert_eq!(TrancheLoyalty::new(5).points(Decimal::new(999, 2)), 1);
    }

    #[test]
    fn exact_tranche_boundary_earns_the_point() {
        assert_eq!(TrancheLoyalty::new(50).points(Decimal::new(100, 0)), 2);
    }

    #[test]
    fn points_beyond_u64_range_saturate() {
        let price = Decimal::from(u64::MAX) * Decimal::from(4u32);

        assert_eq!(TrancheLoyalty::new(1).points(price), u64::MAX);
        assert_eq!(TrancheLoyalty::new(1).points(Decimal::from(u64::MAX)), u64::MAX);
    }

    #[test]
    fn zero_tranche_earns_nothing() {
        assert_eq!(TrancheLoyalty::new(0).points(Decimal::new(59999, 2)), 0);
        assert!(validate_tranche("vip", 0).is_err());
        assert!(validate_tranche("vip", 5).is_ok());
    }
}
