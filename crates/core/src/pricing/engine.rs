use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::PricingConfig;
use crate::domain::customer::{CategoryKey, Customer};
use crate::domain::product::{Product, ProductCategory};
use crate::errors::DomainError;

use super::factory::{CategoryFactory, CategoryRegistry, CategoryResolution, RateCard};
use super::shipping::{ShippingResolution, ShippingTable};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTraceStep {
    pub stage: String,
    pub detail: String,
    pub amount: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub product_name: String,
    pub customer_name: String,
    pub category_key: CategoryKey,
    pub base_price: Decimal,
    pub discount: Decimal,
    pub price_after_discount: Decimal,
    pub loyalty_points: u64,
    pub shipping: Decimal,
    pub final_price: Decimal,
    pub category_resolution: CategoryResolution,
    pub shipping_resolution: ShippingResolution,
    pub trace: Vec<PricingTraceStep>,
}

pub trait PricingService: Send + Sync {
    fn price(&self, product: &Product, customer: &Customer) -> PricingResult;
}

/// Prices a product for a customer: category discount, loyalty points on the
/// gross price, then the shipping surcharge.
#[derive(Debug, Default)]
pub struct PricingEngine {
    registry: CategoryRegistry,
    shipping: ShippingTable,
}

impl PricingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(registry: CategoryRegistry, shipping: ShippingTable) -> Self {
        Self { registry, shipping }
    }

    /// Built-in categories overlaid with the configured ones, and the
    /// configured shipping table.
    pub fn from_config(config: &PricingConfig) -> Result<Self, DomainError> {
        let registry = CategoryRegistry::new();
        for (key, card) in &config.categories {
            registry.register_rate_card(key.as_str(), *card)?;
        }

        let shipping = ShippingTable::new(
            config
                .shipping_rates
                .iter()
                .map(|(category, surcharge)| (ProductCategory(category.clone()), *surcharge)),
            config.default_shipping,
        )?;

        Ok(Self::with_tables(registry, shipping))
    }

    pub fn register_category(
        &self,
        key: impl Into<CategoryKey>,
        factory: Arc<dyn CategoryFactory>,
    ) -> Result<(), DomainError> {
        self.registry.register(key, factory)
    }

    pub fn register_rate_card(
        &self,
        key: impl Into<CategoryKey>,
        card: RateCard,
    ) -> Result<(), DomainError> {
        self.registry.register_rate_card(key, card)
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn shipping(&self) -> &ShippingTable {
        &self.shipping
    }

    pub fn price(&self, product: &Product, customer: &Customer) -> PricingResult {
        let base_price = product.base_price();
        let resolved = self.registry.resolve(&customer.category_key);

        let discount = resolved.strategies.discount.discount(base_price);
        let loyalty_points = resolved.strategies.loyalty.points(base_price);
        let price_after_discount = base_price - discount;
        let (shipping, shipping_resolution) = self.shipping.lookup(product.category());
        let final_price = price_after_discount + shipping;

        info!(
            event_name = "pricing.calculated",
            product = product.name(),
            customer = customer.name.as_str(),
            category = customer.category_key.as_str(),
            final_price = %final_price,
            loyalty_points,
            "price calculated"
        );

        PricingResult {
            product_name: product.name().to_owned(),
            customer_name: customer.name.clone(),
            category_key: customer.category_key.clone(),
            base_price,
            discount,
            price_after_discount,
            loyalty_points,
            shipping,
            final_price,
            category_resolution: resolved.resolution,
            shipping_resolution,
            trace: vec![
                step("base_price", "product base price", base_price),
                step("discount", "category discount on base price", discount),
                step("price_after_discount", "base_price - discount", price_after_discount),
                step("loyalty_points", "floor(base_price / tranche)", loyalty_points.into()),
                step("shipping", "surcharge for product category", shipping),
                step("final_price", "price_after_discount + shipping", final_price),
            ],
        }
    }
}

impl PricingService for PricingEngine {
    fn price(&self, product: &Product, customer: &Customer) -> PricingResult {
        PricingEngine::price(self, product, customer)
    }
}

fn step(stage: &str, detail: &str, amount: Decimal) -> PricingTraceStep {
    PricingTraceStep { stage: stage.to_string(), detail: detail.to_string(), amount }
}
