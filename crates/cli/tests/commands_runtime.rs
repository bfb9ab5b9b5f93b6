use std::fs;

use pricecraft_cli::commands::{categories, config, demo, price};
use pricecraft_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use rust_decimal::Decimal;
use serde_json::Value;
use tempfile::TempDir;

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be JSON")
}

fn config_from_file(body: &str) -> AppConfig {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("pricecraft.toml");
    fs::write(&path, body).expect("write config");

    AppConfig::load(LoadOptions {
        config_path: Some(path),
        require_file: true,
        ..LoadOptions::default()
    })
    .expect("config should load")
}

#[test]
fn demo_json_returns_all_cases() {
    let result = demo::run(&AppConfig::default(), true);
    assert_eq!(result.exit_code, 0, "expected successful demo run");

    let payload = parse_payload(&result.output);
    let cases = payload.as_array().expect("demo output is an array");
    assert_eq!(cases.len(), 5);
    assert_eq!(cases[0]["result"]["final_price"], "29.982");
    assert_eq!(cases[1]["result"]["loyalty_points"], 29);
    assert_eq!(cases[4]["result"]["shipping_resolution"], "default");
}

#[test]
fn price_uses_categories_from_config_file() {
    let config = config_from_file(
        r#"
[categories.gold]
discount_rate = "0.25"
loyalty_tranche = 8
"#,
    );

    let result = price::run(
        &config,
        price::PriceRequest {
            product: "Chaise".to_string(),
            price: Decimal::new(10_000, 2),
            product_category: "meuble".to_string(),
            customer: "Lea".to_string(),
            customer_category: "gold".to_string(),
        },
        true,
    );
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["category_resolution"], "registered");
    assert_eq!(payload["loyalty_points"], 12);
    assert_eq!(payload["shipping"], "7.99");
}

#[test]
fn categories_json_lists_registry_and_shipping() {
    let config = config_from_file(
        r#"
[shipping.rates]
meuble = "49.99"
"#,
    );

    let result = categories::run(&config, true);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let keys = payload["categories"]
        .as_array()
        .expect("categories array")
        .iter()
        .map(|entry| entry["key"].as_str().unwrap_or_default().to_string())
        .collect::<Vec<_>>();
    assert_eq!(keys, vec!["entreprise", "premium", "standard"]);
    assert_eq!(payload["shipping_rates"]["meuble"], "49.99");
    assert_eq!(payload["default_shipping"], "7.99");
}

#[test]
fn categories_text_lists_rate_cards() {
    let result = categories::run(&AppConfig::default(), false);

    assert_eq!(result.exit_code, 0);
    assert!(result.output.contains("- entreprise = discount 15%, 1 point per 20 spent"));
    assert!(result.output.contains("- vetement = 6.99"));
}

#[test]
fn config_reports_defaults_with_sources() {
    let output = config::run(&AppConfig::default(), None, &ConfigOverrides::default());

    assert!(output.starts_with("effective config"));
    assert!(output.contains("- shipping.default_surcharge = 7.99 (source: default)"));
    assert!(output.contains("- shipping.rates.livre = 5.99 (source: default)"));
}

#[test]
fn config_attributes_explicit_file_and_overrides() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[shipping]
default_surcharge = "9.50"
"#,
    )
    .expect("write config");

    let overrides =
        ConfigOverrides { log_level: Some("debug".to_string()), ..ConfigOverrides::default() };
    let loaded = AppConfig::load(LoadOptions {
        config_path: Some(path.clone()),
        require_file: true,
        overrides: overrides.clone(),
    })
    .expect("config should load");

    let output = config::run(&loaded, Some(&path), &overrides);

    assert!(output.contains("- logging.level = debug (source: override)"));
    assert!(output.contains(&format!(
        "- shipping.default_surcharge = 9.50 (source: file ({}))",
        path.display()
    )));
    assert!(output.contains("- shipping.rates.livre = 5.99 (source: default)"));
}
