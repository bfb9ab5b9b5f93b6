use std::sync::Arc;
use std::thread;

use pricecraft_core::{
    CategoryResolution, Customer, PricingEngine, Product, RateCard, ShippingResolution,
};
use rust_decimal::Decimal;

fn product(name: &str, cents: i64, category: &str) -> Product {
    Product::new(name, Decimal::new(cents, 2), category).expect("valid product")
}

#[test]
fn reference_scenarios_produce_expected_figures() {
    let engine = PricingEngine::new();
    engine
        .register_rate_card("zero", RateCard::new(Decimal::new(50, 2), 5))
        .expect("register zero");

    let cases = [
        (
            product("Python Guide", 2999, "livre"),
            Customer::new("Jean Dupont", "premium"),
            Decimal::new(5998, 3),
            2,
            Decimal::new(599, 2),
            Decimal::new(29982, 3),
        ),
        (
            product("Smartphone", 59999, "electronique"),
            Customer::new("Marie Tremblay", "entreprise"),
            Decimal::new(899985, 4),
            29,
            Decimal::new(1299, 2),
            Decimal::new(5229815, 4),
        ),
        (
            product("Toutou", 999, "toutou"),
            Customer::new("Rex", "zero"),
            Decimal::new(4995, 3),
            1,
            Decimal::new(799, 2),
            Decimal::new(12985, 3),
        ),
    ];

    for (product, customer, discount, points, shipping, final_price) in cases {
        let result = engine.price(&product, &customer);
        assert_eq!(result.discount, discount, "discount for {}", product.name());
        assert_eq!(result.loyalty_points, points, "points for {}", product.name());
        assert_eq!(result.shipping, shipping, "shipping for {}", product.name());
        assert_eq!(result.final_price, final_price, "final price for {}", product.name());
        assert_eq!(result.category_resolution, CategoryResolution::Registered);
    }
}

#[test]
fn result_serializes_with_resolution_flags() {
    let engine = PricingEngine::new();
    let result = engine.price(&product("Peluche", 1500, "jouet"), &Customer::new("Tom", "gold"));

    let json = serde_json::to_value(&result).expect("serialize result");
    assert_eq!(json["category_key"], "gold");
    assert_eq!(json["category_resolution"], "fallback_to_standard");
    assert_eq!(json["shipping_resolution"], "default");
    assert_eq!(result.shipping_resolution, ShippingResolution::Default);
}

#[test]
fn shared_engine_prices_while_categories_are_registered() {
    let engine = Arc::new(PricingEngine::new());
    let book = product("Python Guide", 2999, "livre");

    let writers = (0..4)
        .map(|index| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let card = RateCard::new(Decimal::new(10, 2), 10);
                engine.register_rate_card(format!("tier-{index}"), card).expect("register tier");
            })
        })
        .collect::<Vec<_>>();

    let readers = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let book = book.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    let result = engine.price(&book, &Customer::new("Jean Dupont", "premium"));
                    assert_eq!(result.final_price, Decimal::new(29982, 3));
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in writers.into_iter().chain(readers) {
        handle.join().expect("worker thread");
    }

    for index in 0..4 {
        let result = engine.price(&book, &Customer::new("Client", format!("tier-{index}")));
        assert_eq!(result.category_resolution, CategoryResolution::Registered);
        assert_eq!(result.discount, Decimal::new(2999, 3));
    }
}
