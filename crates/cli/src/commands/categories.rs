use std::collections::BTreeMap;

use pricecraft_core::config::AppConfig;
use pricecraft_core::pricing::CategoryDescriptor;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::commands::{build_engine, to_json, CommandResult};
use crate::report::render_categories;

#[derive(Debug, Serialize)]
struct CategoryListing {
    categories: Vec<CategoryDescriptor>,
    shipping_rates: BTreeMap<String, Decimal>,
    default_shipping: Decimal,
}

pub fn run(config: &AppConfig, json: bool) -> CommandResult {
    let engine = match build_engine(config) {
        Ok(engine) => engine,
        Err(error) => return CommandResult::from_error("categories", error),
    };

    let categories = engine.registry().describe();
    if json {
        let listing = CategoryListing {
            categories,
            shipping_rates: engine
                .shipping()
                .rates()
                .into_iter()
                .map(|(category, surcharge)| (category.0, surcharge))
                .collect(),
            default_shipping: engine.shipping().default_surcharge(),
        };
        return to_json("categories", &listing);
    }

    CommandResult::output(0, render_categories(&categories, engine.shipping()))
}
