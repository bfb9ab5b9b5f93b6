pub mod discount;
pub mod engine;
pub mod factory;
pub mod loyalty;
pub mod shipping;

pub use discount::{DiscountStrategy, PercentageDiscount};
pub use engine::{PricingEngine, PricingResult, PricingService, PricingTraceStep};
pub use factory::{
    CategoryDescriptor, CategoryFactory, CategoryRegistry, CategoryResolution, RateCard,
    RateCardFactory, ResolvedStrategies, StrategyPair, STANDARD_CATEGORY,
};
pub use loyalty::{LoyaltyStrategy, TrancheLoyalty};
pub use shipping::{ShippingResolution, ShippingTable};
