use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("base price for `{product}` must be >= 0, got {price}")]
    NegativePrice { product: String, price: Decimal },
    #[error("discount rate for `{category}` must be in range 0..=1, got {rate}")]
    DiscountRateOutOfRange { category: String, rate: Decimal },
    #[error("loyalty tranche for `{category}` must be greater than zero")]
    ZeroTranche { category: String },
    #[error("shipping surcharge for `{category}` must be >= 0, got {surcharge}")]
    NegativeSurcharge { category: String, surcharge: Decimal },
    #[error("category key must not be empty")]
    EmptyCategoryKey,
    #[error("base price for `{product}` must be <= {limit}, got {price}")]
    PriceTooLarge { product: String, price: Decimal, limit: Decimal },
    #[error("shipping surcharge for `{category}` must be <= {limit}, got {surcharge}")]
    SurchargeTooLarge { category: String, surcharge: Decimal, limit: Decimal },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl From<ConfigError> for ApplicationError {
    fn from(error: ConfigError) -> Self {
        Self::Configuration(error.to_string())
    }
}

impl ApplicationError {
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(_) => "invalid_input",
            Self::Configuration(_) => "config_validation",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Domain(_) => 3,
            Self::Configuration(_) => 2,
        }
    }
}
