use pricecraft_core::config::AppConfig;
use pricecraft_core::errors::ApplicationError;
use pricecraft_core::{Customer, Product};
use rust_decimal::Decimal;

use crate::commands::{build_engine, to_json, CommandResult};
use crate::report::render_result;

#[derive(Clone, Debug)]
pub struct PriceRequest {
    pub product: String,
    pub price: Decimal,
    pub product_category: String,
    pub customer: String,
    pub customer_category: String,
}

pub fn run(config: &AppConfig, request: PriceRequest, json: bool) -> CommandResult {
    let engine = match build_engine(config) {
        Ok(engine) => engine,
        Err(error) => return CommandResult::from_error("price", error),
    };

    let category = request.product_category.as_str();
    let product = match Product::new(request.product, request.price, category) {
        Ok(product) => product,
        Err(error) => return CommandResult::from_error("price", ApplicationError::from(error)),
    };
    let customer = Customer::new(request.customer, request.customer_category);

    let result = engine.price(&product, &customer);
    if json {
        return to_json("price", &result);
    }
    CommandResult::output(0, render_result(&result))
}
