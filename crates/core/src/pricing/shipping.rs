use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::product::{max_amount, ProductCategory};
use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingResolution {
    Listed,
    Default,
}

pub fn default_shipping_rates() -> Vec<(ProductCategory, Decimal)> {
    vec![
        (ProductCategory::from("livre"), Decimal::new(599, 2)),
        (ProductCategory::from("electronique"), Decimal::new(1299, 2)),
        (ProductCategory::from("vetement"), Decimal::new(699, 2)),
    ]
}

pub fn default_surcharge() -> Decimal {
    Decimal::new(799, 2)
}

/// Product category → shipping surcharge. Fixed once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShippingTable {
    rates: HashMap<ProductCategory, Decimal>,
    default_surcharge: Decimal,
}

impl ShippingTable {
    pub fn new(
        rates: impl IntoIterator<Item = (ProductCategory, Decimal)>,
        default_surcharge: Decimal,
    ) -> Result<Self, DomainError> {
        validate_surcharge("<default>", default_surcharge)?;

        let mut table = HashMap::new();
        for (category, surcharge) in rates {
            validate_surcharge(category.as_str(), surcharge)?;
            table.insert(category, surcharge);
        }

        Ok(Self { rates: table, default_surcharge })
    }

    pub fn surcharge(&self, category: &ProductCategory) -> Decimal {
        self.lookup(category).0
    }

    pub fn lookup(&self, category: &ProductCategory) -> (Decimal, ShippingResolution) {
        match self.rates.get(category) {
            Some(surcharge) => (*surcharge, ShippingResolution::Listed),
            None => {
                debug!(
                    event_name = "pricing.shipping.default",
                    product_category = category.as_str(),
                    surcharge = %self.default_surcharge,
                    "unlisted product category, using default surcharge"
                );
                (self.default_surcharge, ShippingResolution::Default)
            }
        }
    }

    pub fn default_surcharge(&self) -> Decimal {
        self.default_surcharge
    }

    /// Listed rates, sorted by category.
    pub fn rates(&self) -> Vec<(ProductCategory, Decimal)> {
        let mut rates =
            self.rates.iter().map(|(category, rate)| (category.clone(), *rate)).collect::<Vec<_>>();
        rates.sort_by(|left, right| left.0.as_str().cmp(right.0.as_str()));
        rates
    }
}

pub fn validate_surcharge(category: &str, surcharge: Decimal) -> Result<(), DomainError> {
    if surcharge < Decimal::ZERO {
        return Err(DomainError::NegativeSurcharge { category: category.to_owned(), surcharge });
    }
    if surcharge > max_amount() {
        return Err(DomainError::SurchargeTooLarge {
            category: category.to_owned(),
            surcharge,
            limit: max_amount(),
        });
    }
    Ok(())
}

impl Default for ShippingTable {
    fn default() -> Self {
        Self {
            rates: default_shipping_rates().into_iter().collect(),
            default_surcharge: default_surcharge(),
        }
    }
}
