//! shpcart CLI - browse the catalog and manage a persisted cart.
//!
//! Commands:
//! - `shpcart products` - List products, optionally filtered
//! - `shpcart product` - Show one product and related items
//! - `shpcart categories` - List categories
//! - `shpcart add` / `update` / `remove` / `clear` - Change the cart
//! - `shpcart cart` - Show the cart with pricing
//! - `shpcart checkout` - Review and place the order
//! - `shpcart config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shpcart_commerce::CommerceError;
use tracing_subscriber::EnvFilter;

use context::Context;
use output::Output;

use commands::{
    AddArgs, CheckoutArgs, ClearArgs, ConfigArgs, ProductArgs, ProductsArgs, RemoveArgs,
    UpdateArgs,
};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "SHPCART_LOG";

/// Exit status when the cart refused the request, e.g. a bad quantity.
const EXIT_REJECTED: i32 = 2;

/// shpcart - a terminal storefront
#[derive(Parser)]
#[command(name = "shpcart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show a single product
    Product(ProductArgs),

    /// List product categories
    Categories,

    /// Add a product to the cart
    Add(AddArgs),

    /// Change the quantity of a cart line
    Update(UpdateArgs),

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Empty the cart
    Clear(ClearArgs),

    /// Show the cart
    Cart,

    /// Review and place the order
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = Output::new(cli.verbose, cli.json);

    if let Err(e) = run(cli, &output) {
        if is_rejection(&e) {
            output.error(&e.to_string());
            std::process::exit(EXIT_REJECTED);
        }
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Whether the command failed because the cart refused the input, as
/// opposed to broken config, data or storage.
fn is_rejection(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<CommerceError>())
        .any(CommerceError::is_rejection)
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    let config_path = cli.config.as_deref();
    let load = || Context::load(config_path, output.clone());

    match cli.command {
        Commands::Products(args) => commands::catalog::products(args, &load()?),
        Commands::Product(args) => commands::catalog::product(args, &load()?),
        Commands::Categories => commands::catalog::categories(&load()?),
        Commands::Add(args) => commands::cart::add(args, &load()?),
        Commands::Update(args) => commands::cart::update(args, &load()?),
        Commands::Remove(args) => commands::cart::remove(args, &load()?),
        Commands::Clear(args) => commands::cart::clear(args, &load()?),
        Commands::Cart => commands::cart::show(&load()?),
        Commands::Checkout(args) => commands::checkout::run(args, &load()?),
        // `config init` must work without a loadable config.
        Commands::Config(args) => commands::config::run(args, config_path, output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_quantity_reaches_validation() {
        let cli = Cli::try_parse_from(["shpcart", "update", "3", "-2"]).unwrap();
        match cli.command {
            Commands::Update(args) => {
                assert_eq!(args.id.get(), 3);
                assert_eq!(args.quantity, -2);
            }
            _ => panic!("expected update"),
        }
    }

    #[test]
    fn test_rejections_are_told_apart() {
        assert!(is_rejection(&CommerceError::InvalidQuantity(-1).into()));
        assert!(is_rejection(
            &anyhow::Error::new(CommerceError::EmptyCart).context("Your cart is empty.")
        ));
        assert!(!is_rejection(&CommerceError::Storage("disk full".into()).into()));
        assert!(!is_rejection(&anyhow::anyhow!("Failed to read catalog")));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shpcart", "add", "1", "--quantity", "2", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Add(ref args) if args.quantity == 2));
    }
}
