use std::sync::Arc;

use anyhow::{Context, Result};
use pricecraft_core::config::AppConfig;
use pricecraft_core::pricing::{
    CategoryFactory, DiscountStrategy, LoyaltyStrategy, PercentageDiscount, PricingResult,
    RateCard, TrancheLoyalty,
};
use pricecraft_core::{Customer, PricingEngine, Product};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::commands::{build_engine, to_json, CommandResult};
use crate::report::render_result;

#[derive(Debug, Serialize)]
pub struct DemoCase {
    pub title: String,
    pub result: PricingResult,
}

/// Category added in code: 30 % off, one point per 5 spent.
struct VipFactory;

impl CategoryFactory for VipFactory {
    fn create_discount(&self) -> Box<dyn DiscountStrategy> {
        Box::new(PercentageDiscount::new(Decimal::new(30, 2)))
    }

    fn create_loyalty(&self) -> Box<dyn LoyaltyStrategy> {
        Box::new(TrancheLoyalty::new(5))
    }
}

pub fn run(config: &AppConfig, json: bool) -> CommandResult {
    let engine = match build_engine(config) {
        Ok(engine) => engine,
        Err(error) => return CommandResult::from_error("demo", error),
    };

    let cases = match run_scenarios(&engine) {
        Ok(cases) => cases,
        Err(error) => {
            return CommandResult::failure("demo", "demo_setup", format!("{error:#}"), 3);
        }
    };

    if json {
        return to_json("demo", &cases);
    }
    CommandResult::output(0, render_demo(&cases))
}

pub fn run_scenarios(engine: &PricingEngine) -> Result<Vec<DemoCase>> {
    let book = Product::new("Python Guide", Decimal::new(2999, 2), "livre")
        .context("building sample book")?;
    let smartphone = Product::new("Smartphone", Decimal::new(59999, 2), "electronique")
        .context("building sample smartphone")?;
    let tshirt = Product::new("T-shirt", Decimal::new(1999, 2), "vetement")
        .context("building sample t-shirt")?;
    let toutou = Product::new("Toutou", Decimal::new(999, 2), "toutou")
        .context("building sample plush toy")?;

    let premium = Customer::new("Jean Dupont", "premium");
    let entreprise = Customer::new("Marie Tremblay", "entreprise");
    let standard = Customer::new("John Smith", "standard");

    let mut cases = vec![
        case("Test 1: book, premium customer", engine.price(&book, &premium)),
        case("Test 2: smartphone, entreprise customer", engine.price(&smartphone, &entreprise)),
        case("Test 3: t-shirt, standard customer", engine.price(&tshirt, &standard)),
    ];

    engine
        .register_category("vip", Arc::new(VipFactory))
        .context("registering the vip category")?;
    cases.push(case(
        "Test 4: smartphone, vip customer (category registered in code)",
        engine.price(&smartphone, &Customer::new("VIP Client", "vip")),
    ));

    engine
        .register_rate_card("zero", RateCard::new(Decimal::new(50, 2), 5))
        .context("registering the zero category")?;
    cases.push(case(
        "Test 5: unlisted product, zero customer (category registered from a rate card)",
        engine.price(&toutou, &Customer::new("Rex", "zero")),
    ));

    Ok(cases)
}

fn case(title: &str, result: PricingResult) -> DemoCase {
    DemoCase { title: title.to_string(), result }
}

fn render_demo(cases: &[DemoCase]) -> String {
    let banner = "=".repeat(50);
    let mut sections = vec![format!("{banner}\n PRICING DEMONSTRATION\n{banner}")];
    for demo_case in cases {
        sections.push(format!("{}\n{}", demo_case.title, render_result(&demo_case.result)));
    }
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use pricecraft_core::config::AppConfig;
    use pricecraft_core::{CategoryResolution, PricingEngine};
    use rust_decimal::Decimal;

    use super::{run, run_scenarios};

    #[test]
    fn scenarios_cover_builtin_and_registered_categories() {
        let engine = PricingEngine::new();
        let cases = run_scenarios(&engine).expect("demo scenarios");

        assert_eq!(cases.len(), 5);
        assert!(cases.iter().all(|demo_case| {
            demo_case.result.category_resolution == CategoryResolution::Registered
        }));
        assert_eq!(cases[3].result.final_price, Decimal::new(432983, 3));
        assert_eq!(cases[4].result.final_price, Decimal::new(12985, 3));
    }

    #[test]
    fn text_demo_lists_every_case() {
        let result = run(&AppConfig::default(), false);

        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("PRICING DEMONSTRATION"));
        assert!(result.output.contains("Test 5: unlisted product"));
        assert!(result.output.contains("Final price: 12.99"));
    }
}
