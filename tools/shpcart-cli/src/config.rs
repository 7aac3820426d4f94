//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use shpcart_commerce::cart::DEFAULT_CART_KEY;
use shpcart_commerce::checkout::{
    ShippingPolicy, FLAT_SHIPPING_FEE_CENTS, FREE_SHIPPING_THRESHOLD_CENTS,
};
use shpcart_commerce::Currency;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shpcart.toml", ".shpcart.toml", "shpcart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart is kept.
    #[serde(default)]
    pub store: StoreConfig,

    /// Product catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Shipping rules.
    #[serde(default)]
    pub shipping: ShippingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Build the shipping policy, rejecting unknown currencies and
    /// negative amounts.
    pub fn shipping_policy(&self) -> Result<ShippingPolicy> {
        let currency = Currency::from_code(&self.shipping.currency)
            .ok_or_else(|| anyhow!("Unknown currency in [shipping]: {}", self.shipping.currency))?;
        let policy = ShippingPolicy::new(
            currency,
            self.shipping.free_shipping_threshold_cents,
            self.shipping.flat_shipping_fee_cents,
        );
        policy.validate().context("Invalid [shipping] section")?;
        Ok(policy)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Durable cart location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the cart file, relative to the config file's
    /// directory or the working directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Record name the cart is stored under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".shpcart")
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cart_key: default_cart_key(),
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON product list. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Shipping rules, in the currency's smallest unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Subtotals at or above this ship free.
    #[serde(default = "default_threshold")]
    pub free_shipping_threshold_cents: i64,

    /// Charged below the threshold.
    #[serde(default = "default_fee")]
    pub flat_shipping_fee_cents: i64,
}

fn default_currency() -> String {
    Currency::USD.code().to_string()
}

fn default_threshold() -> i64 {
    FREE_SHIPPING_THRESHOLD_CENTS
}

fn default_fee() -> i64 {
    FLAT_SHIPPING_FEE_CENTS
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            free_shipping_threshold_cents: default_threshold(),
            flat_shipping_fee_cents: default_fee(),
        }
    }
}

/// Generate a default shpcart.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# shpcart configuration

[store]
# Directory for the persisted cart, relative to this file.
data_dir = ".shpcart"
cart_key = "{cart_key}"

[catalog]
# JSON product list. Leave unset to use the built-in catalog.
# path = "products.json"

[shipping]
currency = "USD"
# Amounts are in cents.
free_shipping_threshold_cents = {threshold}
flat_shipping_fee_cents = {fee}
"#,
        cart_key = DEFAULT_CART_KEY,
        threshold = FREE_SHIPPING_THRESHOLD_CENTS,
        fee = FLAT_SHIPPING_FEE_CENTS,
    )
}
