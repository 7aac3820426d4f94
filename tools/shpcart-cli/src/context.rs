//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use shpcart_cache::{validate_key, FileStore};
use shpcart_commerce::{CartStore, Catalog, Pricing};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// The persisted cart.
    pub cart: CartStore<FileStore>,
    /// Totals for the cart.
    pub pricing: Pricing,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, Path::new(path));
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };
        if let Some(ref path) = config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        // Relative paths in a config file are relative to that file.
        let base = config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or(cwd);

        let policy = config.shipping_policy()?;
        let catalog = load_catalog(&config, &base)?;
        if !catalog.is_empty() && catalog.currency() != policy.currency {
            bail!(
                "Catalog prices are in {} but shipping is configured in {}",
                catalog.currency(),
                policy.currency
            );
        }

        validate_key(&config.store.cart_key)
            .with_context(|| format!("Invalid [store] cart_key: {}", config.store.cart_key))?;
        let data_dir = resolve(&base, &config.store.data_dir);
        tracing::debug!(data_dir = %data_dir.display(), key = %config.store.cart_key, "opening cart");
        let cart = CartStore::with_key(
            Arc::new(catalog),
            FileStore::new(data_dir),
            config.store.cart_key.clone(),
        );

        Ok(Self {
            config,
            config_path,
            output,
            cart,
            pricing: Pricing::new(policy),
        })
    }

    /// The product catalog.
    pub fn catalog(&self) -> &Catalog {
        self.cart.catalog()
    }

    /// Directory the cart file lives in.
    pub fn data_dir(&self) -> &Path {
        self.cart.store().dir()
    }
}

/// Find config file in directory tree.
///
/// The first file found wins; a file that fails to parse is an error
/// rather than being skipped.
fn find_config(start: &Path) -> Result<Option<(CliConfig, PathBuf)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                let config = CliConfig::load(&config_path)?;
                return Ok(Some((config, config_path)));
            }
        }

        if !current.pop() {
            return Ok(None);
        }
    }
}

fn load_catalog(config: &CliConfig, base: &Path) -> Result<Catalog> {
    let Some(ref path) = config.catalog.path else {
        return Ok(Catalog::demo());
    };

    let path = resolve(base, path);
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
    tracing::debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Resolve a path relative to `base`.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
