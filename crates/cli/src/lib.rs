pub mod commands;
pub mod logging;
pub mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use pricecraft_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use pricecraft_core::errors::ApplicationError;
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[command(
    name = "pricecraft",
    about = "Pricecraft pricing calculator",
    long_about = "Price products for customer categories: category discount, loyalty points and shipping surcharge.",
    after_help = "Examples:\n  pricecraft demo\n  pricecraft price --product \"Python Guide\" --price 29.99 --product-category livre --customer \"Jean Dupont\" --customer-category premium\n  pricecraft categories --json"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a pricecraft.toml file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Override the configured log level")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Price the sample catalogue, then register and price extra categories")]
    Demo {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Price one product for one customer")]
    Price(PriceArgs),
    #[command(about = "List registered customer categories and the shipping table")]
    Categories {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

#[derive(Debug, Args)]
struct PriceArgs {
    #[arg(long, help = "Product name")]
    product: String,
    #[arg(long, allow_negative_numbers = true, help = "Base price, e.g. 29.99")]
    price: Decimal,
    #[arg(long, help = "Product category used for the shipping surcharge")]
    product_category: String,
    #[arg(long, help = "Customer name")]
    customer: String,
    #[arg(long, help = "Customer category key")]
    customer_category: String,
    #[arg(long, help = "Emit machine-readable JSON output")]
    json: bool,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let overrides = ConfigOverrides { log_level: cli.log_level, ..ConfigOverrides::default() };
    let options = LoadOptions {
        require_file: cli.config.is_some(),
        config_path: cli.config.clone(),
        overrides: overrides.clone(),
    };
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            let result =
                commands::CommandResult::from_error("config", ApplicationError::from(error));
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };
    logging::init(&config.logging);

    let result = match cli.command {
        Command::Demo { json } => commands::demo::run(&config, json),
        Command::Price(args) => commands::price::run(
            &config,
            commands::price::PriceRequest {
                product: args.product,
                price: args.price,
                product_category: args.product_category,
                customer: args.customer,
                customer_category: args.customer_category,
            },
            args.json,
        ),
        Command::Categories { json } => commands::categories::run(&config, json),
        Command::Config => commands::CommandResult::output(
            0,
            commands::config::run(&config, cli.config.as_deref(), &overrides),
        ),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
