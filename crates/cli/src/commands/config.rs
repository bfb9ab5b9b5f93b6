use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use pricecraft_core::config::{AppConfig, ConfigOverrides};
use toml::Value;

/// Renders effective values. `config_path` is the `--config` argument, if
/// any, and `overrides` the command-line overrides applied on top.
pub fn run(config: &AppConfig, config_path: Option<&Path>, overrides: &ConfigOverrides) -> String {
    let config_file_path = detect_config_path(config_path);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, overridden: bool, env_keys: &[&str]| {
        if overridden {
            return "override".to_string();
        }
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let mut lines =
        vec!["effective config (source precedence: override > env > file > default):".to_string()];

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        source(
            "logging.level",
            overrides.log_level.is_some(),
            &["PRICECRAFT_LOGGING_LEVEL", "PRICECRAFT_LOG_LEVEL"],
        ),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        source(
            "logging.format",
            overrides.log_format.is_some(),
            &["PRICECRAFT_LOGGING_FORMAT", "PRICECRAFT_LOG_FORMAT"],
        ),
    ));
    lines.push(render_line(
        "shipping.default_surcharge",
        &config.pricing.default_shipping.to_string(),
        source(
            "shipping.default_surcharge",
            overrides.default_shipping.is_some(),
            &["PRICECRAFT_SHIPPING_DEFAULT"],
        ),
    ));

    for (category, surcharge) in &config.pricing.shipping_rates {
        let key_path = format!("shipping.rates.{category}");
        let surcharge_source = source(key_path.as_str(), false, &[]);
        lines.push(render_line(&key_path, &surcharge.to_string(), surcharge_source));
    }

    for (category, card) in &config.pricing.categories {
        let key_path = format!("categories.{category}");
        lines.push(render_line(
            &key_path,
            &format!(
                "discount_rate={} loyalty_tranche={}",
                card.discount_rate, card.loyalty_tranche
            ),
            source(key_path.as_str(), false, &[]),
        ));
    }

    lines.join("\n")
}

fn detect_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then(|| path.to_path_buf());
    }

    let root = PathBuf::from("pricecraft.toml");
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config/pricecraft.toml");
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
