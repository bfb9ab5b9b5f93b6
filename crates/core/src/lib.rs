pub mod config;
pub mod domain;
pub mod errors;
pub mod pricing;

pub use domain::customer::{CategoryKey, Customer};
pub use domain::product::{Product, ProductCategory};
pub use errors::{ApplicationError, DomainError};
pub use pricing::{
    CategoryFactory, CategoryRegistry, CategoryResolution, DiscountStrategy, LoyaltyStrategy,
    PercentageDiscount, PricingEngine, PricingResult, PricingService, RateCard, ShippingResolution,
    ShippingTable, TrancheLoyalty,
};
