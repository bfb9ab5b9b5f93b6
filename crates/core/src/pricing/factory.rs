use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::customer::CategoryKey;
use crate::errors::DomainError;

use super::discount::{validate_rate, DiscountStrategy, PercentageDiscount};
use super::loyalty::{validate_tranche, LoyaltyStrategy, TrancheLoyalty};

pub const PREMIUM_CATEGORY: &str = "premium";
pub const ENTREPRISE_CATEGORY: &str = "entreprise";
pub const STANDARD_CATEGORY: &str = "standard";

/// Strategies produced together for one customer category, so a discount
/// policy is never paired with another category's loyalty policy.
pub struct StrategyPair {
    pub discount: Box<dyn DiscountStrategy>,
    pub loyalty: Box<dyn LoyaltyStrategy>,
}

pub trait CategoryFactory: Send + Sync {
    fn create_discount(&self) -> Box<dyn DiscountStrategy>;

    fn create_loyalty(&self) -> Box<dyn LoyaltyStrategy>;

    fn create_pair(&self) -> StrategyPair {
        StrategyPair { discount: self.create_discount(), loyalty: self.create_loyalty() }
    }

    /// Rate and tranche, when the factory is purely data driven.
    fn rate_card(&self) -> Option<RateCard> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    pub discount_rate: Decimal,
    pub loyalty_tranche: u32,
}

impl RateCard {
    pub fn new(discount_rate: Decimal, loyalty_tranche: u32) -> Self {
        Self { discount_rate, loyalty_tranche }
    }

    pub fn validate(&self, category: &str) -> Result<(), DomainError> {
        validate_rate(category, self.discount_rate)?;
        validate_tranche(category, self.loyalty_tranche)
    }
}

/// Factory backed by a [`RateCard`]: a [`PercentageDiscount`] paired with a
/// [`TrancheLoyalty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateCardFactory {
    card: RateCard,
}

impl RateCardFactory {
    pub fn new(card: RateCard) -> Self {
        Self { card }
    }
}

impl CategoryFactory for RateCardFactory {
    fn create_discount(&self) -> Box<dyn DiscountStrategy> {
        Box::new(PercentageDiscount::new(self.card.discount_rate))
    }

    fn create_loyalty(&self) -> Box<dyn LoyaltyStrategy> {
        Box::new(TrancheLoyalty::new(self.card.loyalty_tranche))
    }

    fn rate_card(&self) -> Option<RateCard> {
        Some(self.card)
    }
}

pub fn standard_rate_card() -> RateCard {
    RateCard::new(Decimal::new(5, 2), 50)
}

pub fn default_rate_cards() -> Vec<(CategoryKey, RateCard)> {
    vec![
        (CategoryKey::from(PREMIUM_CATEGORY), RateCard::new(Decimal::new(20, 2), 10)),
        (CategoryKey::from(ENTREPRISE_CATEGORY), RateCard::new(Decimal::new(15, 2), 20)),
        (CategoryKey::from(STANDARD_CATEGORY), standard_rate_card()),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryResolution {
    Registered,
    FallbackToStandard,
}

pub struct ResolvedStrategies {
    pub strategies: StrategyPair,
    pub resolution: CategoryResolution,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub key: CategoryKey,
    pub rate_card: Option<RateCard>,
}

#[derive(Clone)]
struct RegistrySnapshot {
    factories: HashMap<CategoryKey, Arc<dyn CategoryFactory>>,
    fallback: Arc<dyn CategoryFactory>,
}

/// Customer category → factory mapping.
///
/// Readers load an immutable snapshot; [`CategoryRegistry::register`] swaps in
/// a modified copy, so the registry can be shared across threads while
/// categories are being added.
pub struct CategoryRegistry {
    snapshot: ArcSwap<RegistrySnapshot>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        let fallback: Arc<dyn CategoryFactory> =
            Arc::new(RateCardFactory::new(standard_rate_card()));
        let mut factories: HashMap<CategoryKey, Arc<dyn CategoryFactory>> = HashMap::new();
        for (key, card) in default_rate_cards() {
            if key.as_str() == STANDARD_CATEGORY {
                factories.insert(key, Arc::clone(&fallback));
            } else {
                factories.insert(key, Arc::new(RateCardFactory::new(card)));
            }
        }

        Self { snapshot: ArcSwap::from_pointee(RegistrySnapshot { factories, fallback }) }
    }

    /// Inserts or replaces the factory for `key`. Replacing the standard
    /// category also replaces the fallback used for unknown keys.
    pub fn register(
        &self,
        key: impl Into<CategoryKey>,
        factory: Arc<dyn CategoryFactory>,
    ) -> Result<(), DomainError> {
        let key = key.into();
        if key.as_str().trim().is_empty() {
            return Err(DomainError::EmptyCategoryKey);
        }

        self.snapshot.rcu(|current| {
            let mut factories = current.factories.clone();
            factories.insert(key.clone(), Arc::clone(&factory));
            let fallback = if key.as_str() == STANDARD_CATEGORY {
                Arc::clone(&factory)
            } else {
                Arc::clone(&current.fallback)
            };
            RegistrySnapshot { factories, fallback }
        });

        info!(
            event_name = "pricing.category.registered",
            category = key.as_str(),
            "customer category registered"
        );
        Ok(())
    }

    pub fn register_rate_card(
        &self,
        key: impl Into<CategoryKey>,
        card: RateCard,
    ) -> Result<(), DomainError> {
        let key = key.into();
        card.validate(key.as_str())?;
        self.register(key, Arc::new(RateCardFactory::new(card)))
    }

    pub fn resolve(&self, key: &CategoryKey) -> ResolvedStrategies {
        let snapshot = self.snapshot.load();
        if let Some(factory) = snapshot.factories.get(key) {
            return ResolvedStrategies {
                strategies: factory.create_pair(),
                resolution: CategoryResolution::Registered,
            };
        }

        warn!(
            event_name = "pricing.category.fallback",
            category = key.as_str(),
            fallback = STANDARD_CATEGORY,
            "unknown customer category, using standard policy"
        );
        ResolvedStrategies {
            strategies: snapshot.fallback.create_pair(),
            resolution: CategoryResolution::FallbackToStandard,
        }
    }

    pub fn contains(&self, key: &CategoryKey) -> bool {
        self.snapshot.load().factories.contains_key(key)
    }

    pub fn categories(&self) -> Vec<CategoryKey> {
        let mut keys = self.snapshot.load().factories.keys().cloned().collect::<Vec<_>>();
        keys.sort();
        keys
    }

    pub fn describe(&self) -> Vec<CategoryDescriptor> {
        let snapshot = self.snapshot.load();
        let mut descriptors = snapshot
            .factories
            .iter()
            .map(|(key, factory)| CategoryDescriptor {
                key: key.clone(),
                rate_card: factory.rate_card(),
            })
            .collect::<Vec<_>>();
        descriptors.sort_by(|left, right| left.key.cmp(&right.key));
        descriptors
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CategoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryRegistry").field("categories", &self.categories()).finish()
    }
}
