//! # Amount Parser CLI
//!
//! Runs raw inputs through the configured format registry, the same way a
//! submitted form field would.
//!
//! ## Usage
//! ```bash
//! # Czech defaults
//! cargo run -p currency-form --bin parse-amount -- "1 234,50 Kč"
//!
//! # English dollars, no decimals
//! cargo run -p currency-form --bin parse-amount -- -l en --currency USD -d 0 '$1,234.56'
//!
//! # Custom rules
//! cargo run -p currency-form --bin parse-amount -- --config ./currency.toml "12,5"
//! ```
//!
//! For each input prints the parsed amount, the formatted redisplay and
//! the client payload. Logs go to stderr (`RUST_LOG` controls the level).

use std::env;
use std::path::PathBuf;

use currency_form::{CurrencyConfig, FormResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,currency=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!("Currency Amount Parser");
    println!();
    println!("Usage: parse-amount [OPTIONS] <RAW>...");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>         TOML config file");
    println!("  -l, --language <CODE>       Format language (default: config default)");
    println!("      --currency <CODE>       Currency code (default: config default)");
    println!("  -d, --decimal-places <N>    Override the rule's decimal places");
    println!("  -h, --help                  Show this help message");
}

fn main() -> FormResult<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut language: Option<String> = None;
    let mut currency: Option<String> = None;
    let mut decimal_places: Option<u8> = None;
    let mut inputs: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--language" | "-l" => {
                if i + 1 < args.len() {
                    language = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--currency" => {
                if i + 1 < args.len() {
                    currency = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--decimal-places" | "-d" => {
                if i + 1 < args.len() {
                    decimal_places = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            raw => inputs.push(raw.to_string()),
        }
        i += 1;
    }

    if inputs.is_empty() {
        print_help();
        return Ok(());
    }

    let config = CurrencyConfig::load(config_path)?;
    let mut form = config.build_container()?;
    let field = form.add_currency_field("amount", None, currency.as_deref(), language.as_deref())?;
    field.set_decimal_places(decimal_places)?;

    let format = field.resolved_format()?;
    info!(
        language = %format.language(),
        currency = %format.currency(),
        "Parsing {} input(s)",
        inputs.len()
    );

    for raw in &inputs {
        field.set_value(raw.as_str())?;
        let control = field.control(config.attribute_name.as_str(), config.placement_encoding)?;

        println!("input:     {}", raw);
        println!("amount:    {}", field.amount());
        println!("formatted: {}", field.formatted_value()?);
        for (attribute, payload) in &control.attributes {
            println!("{}: {}", attribute, payload);
        }
        println!();
    }

    Ok(())
}
