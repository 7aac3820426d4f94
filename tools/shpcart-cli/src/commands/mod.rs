//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;

use clap::{Args, Subcommand};
use shpcart_commerce::catalog::DEFAULT_RELATED_COUNT;
use shpcart_commerce::ProductId;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show this category ("All" for every product).
    #[arg(long)]
    pub category: Option<String>,

    /// Case-insensitive text to look for in names and descriptions.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: ProductId,

    /// Number of related products to show.
    #[arg(short, long, default_value_t = DEFAULT_RELATED_COUNT)]
    pub related: usize,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product ID.
    pub id: ProductId,

    /// How many to add.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub quantity: i64,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Product ID.
    pub id: ProductId,

    /// New quantity for the line.
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product ID.
    pub id: ProductId,
}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Place the order without asking.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Ask a yes/no question, defaulting to no.
///
/// Returns `true` without prompting when `assume_yes` is set. JSON mode
/// never prompts, so it requires `--yes` for destructive commands.
pub(crate) fn confirm(prompt: &str, assume_yes: bool, json: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if json {
        anyhow::bail!("Confirmation required; pass --yes in JSON mode.");
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}
