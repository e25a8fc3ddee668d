//! Shopfront - a tiny storefront in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Shop the built-in catalog
//! shopfront
//!
//! # Sell items from a YAML file, printing JSON updates
//! shopfront --catalog crates/cli/data/catalog.yaml --output json
//!
//! # Scripted session
//! printf 'login Al 30\nadd 1\nadd 1\nnav cart\n' | shopfront
//! ```
//!
//! # Commands
//!
//! - `login <name> <age>` - Log in (both inputs required)
//! - `nav <login|shop|cart>` - Switch the visible region
//! - `add <n>` - Add catalog item `n` to the cart
//! - `remove-one <n>` / `remove-all <n>` - Remove units of cart line `n`
//! - `show`, `help`, `quit`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::path::PathBuf;

use clap::Parser;

use shopfront_cli::{CliConfig, OutputFormat, Repl, Result, Screen, catalog};

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "A tiny storefront in the terminal")]
struct Cli {
    /// YAML catalog to sell instead of the built-in items
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output mode
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Symbol printed before prices
    #[arg(long)]
    currency_symbol: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config.with_overrides(cli.catalog, cli.output, cli.currency_symbol),
        Err(e) => {
            init_tracing(false);
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.output == OutputFormat::Json);

    if let Err(e) = run(&config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr so stdout only carries the storefront.
///
/// Defaults to info level for our crates if `RUST_LOG` is not set.
fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront_cli=info,shopfront_core=info".into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let items = match &config.catalog_file {
        Some(path) => catalog::load(path)?,
        None => catalog::builtin(),
    };
    tracing::info!(items = items.len(), "catalog ready");

    let screen = Screen::new(io::stdout().lock(), config.output, &config.currency_symbol);
    let mut repl = Repl::new(items, screen);
    repl.run(io::stdin().lock())
}
