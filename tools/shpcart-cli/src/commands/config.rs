//! Configuration management commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;
use crate::output::Output;

/// Run the config command.
pub fn run(args: ConfigArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(&Context::load(config_path, output.clone())?),
        ConfigCommand::Init { force } => init_config(force, config_path, output),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[store]");
    ctx.output.kv("data_dir", &ctx.data_dir().display().to_string());
    ctx.output.kv("cart_key", ctx.cart.key());

    ctx.output.info("[catalog]");
    match ctx.config.catalog.path {
        Some(ref path) => ctx.output.kv("path", &path.display().to_string()),
        None => ctx.output.kv("path", "(built-in)"),
    }
    ctx.output.kv("products", &ctx.catalog().len().to_string());

    let policy = ctx.pricing.policy();
    ctx.output.info("[shipping]");
    ctx.output.kv("currency", policy.currency.code());
    ctx.output
        .kv("free_shipping_threshold", &policy.free_shipping_threshold.display());
    ctx.output.kv("flat_shipping_fee", &policy.flat_shipping_fee.display());

    Ok(())
}

fn init_config(force: bool, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config_path = match config_path {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir()
            .context("Failed to get current directory")?
            .join(CONFIG_FILE_NAMES[0]),
    };

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    write_default(&config_path)?;
    output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}

/// TOML files get the commented template; JSON has no comments, so it
/// gets the serialized defaults.
fn write_default(path: &Path) -> Result<()> {
    if path.extension().is_some_and(|ext| ext == "json") {
        return CliConfig::default().save(path);
    }
    fs::write(path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_default_formats() {
        let dir = tempdir().unwrap();

        let toml_path = dir.path().join("shpcart.toml");
        write_default(&toml_path).unwrap();
        let content = fs::read_to_string(&toml_path).unwrap();
        assert!(content.starts_with("# shpcart configuration"));
        assert_eq!(CliConfig::load(&toml_path).unwrap(), CliConfig::default());

        let json_path = dir.path().join("shpcart.json");
        write_default(&json_path).unwrap();
        assert_eq!(CliConfig::load(&json_path).unwrap(), CliConfig::default());
    }
}
