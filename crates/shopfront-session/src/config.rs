//! # Session Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPFRONT_SHIPPING_FEE_CENTS=0                                     │
//! │     SHOPFRONT_QUICK_ADD_SIZE=L                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shopfront/session.toml (Linux)                           │
//! │     ~/Library/Application Support/com.shopfront.shopfront/ (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     USD, 100 lines, 999 per line, $5.99 shipping, quick add Default/M  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # session.toml
//! [currency]
//! code = "USD"
//! symbol = "$"
//!
//! [cart]
//! max_lines = 100
//! max_item_quantity = 999
//! shipping_fee_cents = 599
//!
//! [quick_add]
//! color = "Default"
//! size = "M"
//!
//! [events]
//! capacity = 64
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shopfront_core::validation::{validate_variant, MAX_PRICE_CENTS};
use shopfront_core::{CartLimits, Money, Variant, MAX_CART_LINES, MAX_ITEM_QUANTITY};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Currency
// =============================================================================

/// How prices are labelled on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// ISO 4217 code.
    #[serde(default = "default_currency_code")]
    pub code: String,

    /// Symbol prefixed to formatted amounts.
    #[serde(default = "default_currency_symbol")]
    pub symbol: String,
}

fn default_currency_code() -> String {
    "USD".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            code: default_currency_code(),
            symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Cart limits and the flat shipping fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSettings {
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    #[serde(default = "default_max_item_quantity")]
    pub max_item_quantity: i64,

    /// Flat shipping fee in cents, charged on any non-empty cart.
    #[serde(default = "default_shipping_fee_cents")]
    pub shipping_fee_cents: i64,
}

fn default_max_lines() -> usize {
    MAX_CART_LINES
}

fn default_max_item_quantity() -> i64 {
    MAX_ITEM_QUANTITY
}

fn default_shipping_fee_cents() -> i64 {
    599
}

impl Default for CartSettings {
    fn default() -> Self {
        CartSettings {
            max_lines: default_max_lines(),
            max_item_quantity: default_max_item_quantity(),
            shipping_fee_cents: default_shipping_fee_cents(),
        }
    }
}

// =============================================================================
// Quick Add
// =============================================================================

/// Variant used by one-tap "add to cart" buttons (home feed, wishlist),
/// where the shopper never opened the color/size pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAddSettings {
    #[serde(default = "default_quick_add_color")]
    pub color: String,

    #[serde(default = "default_quick_add_size")]
    pub size: String,
}

fn default_quick_add_color() -> String {
    shopfront_core::DEFAULT_VARIANT_LABEL.to_string()
}

fn default_quick_add_size() -> String {
    "M".to_string()
}

impl Default for QuickAddSettings {
    fn default() -> Self {
        QuickAddSettings {
            color: default_quick_add_color(),
            size: default_quick_add_size(),
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Change notification channel settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSettings {
    /// Broadcast buffer size. A screen that falls further behind than this
    /// skips ahead and simply re-reads the store.
    #[serde(default = "default_event_capacity")]
    pub capacity: usize,
}

fn default_event_capacity() -> usize {
    64
}

impl Default for EventSettings {
    fn default() -> Self {
        EventSettings {
            capacity: default_event_capacity(),
        }
    }
}

// =============================================================================
// Session Config
// =============================================================================

/// Complete session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub cart: CartSettings,

    #[serde(default)]
    pub quick_add: QuickAddSettings,

    #[serde(default)]
    pub events: EventSettings,
}

impl SessionConfig {
    /// Loads configuration from file and environment.
    ///
    /// ## Loading Order
    /// 1. Start with defaults
    /// 2. Override with config file (if exists)
    /// 3. Override with environment variables
    /// 4. Validate
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::load`], with overrides read through `lookup`
    /// instead of the process environment.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading session config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides_from(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load session config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Session config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let code = &self.currency.code;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidConfig(format!(
                "Currency code must be three uppercase letters, got: '{}'",
                code
            )));
        }

        if self.currency.symbol.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Currency symbol must not be empty".into(),
            ));
        }

        if self.cart.max_lines == 0 {
            return Err(ConfigError::InvalidConfig(
                "cart.max_lines must be at least 1".into(),
            ));
        }

        if self.cart.max_item_quantity < 1 {
            return Err(ConfigError::InvalidConfig(
                "cart.max_item_quantity must be at least 1".into(),
            ));
        }

        if !(0..=MAX_PRICE_CENTS).contains(&self.cart.shipping_fee_cents) {
            return Err(ConfigError::InvalidConfig(format!(
                "cart.shipping_fee_cents must be between 0 and {}",
                MAX_PRICE_CENTS
            )));
        }

        validate_variant(&self.quick_add_variant())
            .map_err(|e| ConfigError::InvalidConfig(format!("quick_add: {}", e)))?;

        if self.events.capacity == 0 {
            return Err(ConfigError::InvalidConfig(
                "events.capacity must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Applies `SHOPFRONT_*` overrides from a key lookup (the process
    /// environment when called from [`SessionConfig::load`]).
    ///
    /// Unparseable numbers are ignored with a warning; the file or default
    /// value stays in effect.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup("SHOPFRONT_CURRENCY_CODE") {
            debug!(code = %code, "Overriding currency code from environment");
            self.currency.code = code;
        }

        if let Some(symbol) = lookup("SHOPFRONT_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
        }

        if let Some(value) = lookup("SHOPFRONT_MAX_CART_LINES") {
            match value.parse::<usize>() {
                Ok(v) => self.cart.max_lines = v,
                Err(_) => warn!(value = %value, "Ignoring invalid SHOPFRONT_MAX_CART_LINES"),
            }
        }

        if let Some(value) = lookup("SHOPFRONT_MAX_ITEM_QUANTITY") {
            match value.parse::<i64>() {
                Ok(v) => self.cart.max_item_quantity = v,
                Err(_) => warn!(value = %value, "Ignoring invalid SHOPFRONT_MAX_ITEM_QUANTITY"),
            }
        }

        if let Some(value) = lookup("SHOPFRONT_SHIPPING_FEE_CENTS") {
            match value.parse::<i64>() {
                Ok(v) => {
                    debug!(cents = v, "Overriding shipping fee from environment");
                    self.cart.shipping_fee_cents = v;
                }
                Err(_) => warn!(value = %value, "Ignoring invalid SHOPFRONT_SHIPPING_FEE_CENTS"),
            }
        }

        if let Some(color) = lookup("SHOPFRONT_QUICK_ADD_COLOR") {
            self.quick_add.color = color;
        }

        if let Some(size) = lookup("SHOPFRONT_QUICK_ADD_SIZE") {
            self.quick_add.size = size;
        }
    }

    /// Returns the default config file path for this platform.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopfront", "shopfront")
            .map(|dirs| dirs.config_dir().join("session.toml"))
    }

    pub fn cart_limits(&self) -> CartLimits {
        CartLimits {
            max_lines: self.cart.max_lines,
            max_item_quantity: self.cart.max_item_quantity,
        }
    }

    pub fn shipping_fee(&self) -> Money {
        Money::from_cents(self.cart.shipping_fee_cents)
    }

    pub fn quick_add_variant(&self) -> Variant {
        Variant::new(Some(&self.quick_add.color), Some(&self.quick_add.size))
    }

    /// Formats an amount with the configured currency symbol.
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with(&self.currency.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.shipping_fee(), Money::from_cents(599));
        assert_eq!(config.cart_limits(), CartLimits::default());
        assert_eq!(config.quick_add_variant(), Variant::of("Default", "M"));
        assert_eq!(config.currency.code, "USD");
        assert_eq!(config.format_money(Money::from_cents(2599)), "$25.99");
    }

    #[test]
    fn test_partial_toml_takes_defaults() {
        let config = SessionConfig::from_toml_str(
            r#"
            [cart]
            shipping_fee_cents = 0

            [quick_add]
            size = "L"
            "#,
        )
        .unwrap();

        assert_eq!(config.cart.shipping_fee_cents, 0);
        assert_eq!(config.cart.max_lines, MAX_CART_LINES);
        assert_eq!(config.quick_add_variant(), Variant::of("Default", "L"));
        assert_eq!(config.events.capacity, 64);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(matches!(
            SessionConfig::from_toml_str("[cart\nmax_lines = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = SessionConfig::default();
        config.apply_overrides_from(lookup(&[
            ("SHOPFRONT_CURRENCY_CODE", "EUR"),
            ("SHOPFRONT_CURRENCY_SYMBOL", "€"),
            ("SHOPFRONT_MAX_CART_LINES", "10"),
            ("SHOPFRONT_MAX_ITEM_QUANTITY", "5"),
            ("SHOPFRONT_SHIPPING_FEE_CENTS", "0"),
            ("SHOPFRONT_QUICK_ADD_COLOR", "Black"),
            ("SHOPFRONT_QUICK_ADD_SIZE", "S"),
        ]));

        assert_eq!(config.currency.code, "EUR");
        assert_eq!(config.currency.symbol, "€");
        assert_eq!(
            config.cart_limits(),
            CartLimits {
                max_lines: 10,
                max_item_quantity: 5
            }
        );
        assert!(config.shipping_fee().is_zero());
        assert_eq!(config.quick_add_variant(), Variant::of("Black", "S"));
    }

    #[test]
    fn test_unparseable_override_is_ignored() {
        let mut config = SessionConfig::default();
        config.apply_overrides_from(lookup(&[("SHOPFRONT_MAX_CART_LINES", "lots")]));
        assert_eq!(config.cart.max_lines, MAX_CART_LINES);
    }

    #[test]
    fn test_config_validation() {
        let mut config = SessionConfig::default();
        config.currency.code = "usd".to_string();
        assert!(config.validate().is_err());

        let mut config = SessionConfig::default();
        config.cart.max_lines = 0;
        assert!(config.validate().is_err());

        let mut config = SessionConfig::default();
        config.cart.max_item_quantity = 0;
        assert!(config.validate().is_err());

        let mut config = SessionConfig::default();
        config.cart.shipping_fee_cents = -1;
        assert!(config.validate().is_err());

        let mut config = SessionConfig::default();
        config.cart.shipping_fee_cents = MAX_PRICE_CENTS + 1;
        assert!(config.validate().is_err());

        let mut config = SessionConfig::default();
        config.quick_add.size = "M".repeat(60);
        assert!(config.validate().is_err());

        let mut config = SessionConfig::default();
        config.events.capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("shopfront-{}", uuid::Uuid::new_v4()))
            .join("session.toml");

        let mut config = SessionConfig::default();
        config.cart.shipping_fee_cents = 1250;
        config.quick_add.color = "Navy".to_string();
        config.save(Some(path.clone())).unwrap();

        let loaded = SessionConfig::load_with(Some(path.clone()), |_| None).unwrap();
        assert_eq!(loaded.cart.shipping_fee_cents, 1250);
        assert_eq!(loaded.quick_add.color, "Navy");

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("shopfront-missing-{}.toml", uuid::Uuid::new_v4()));
        let config = SessionConfig::load_with(Some(path), |_| None).unwrap();
        assert_eq!(config.cart.max_item_quantity, MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_load_applies_injected_overrides_over_file() {
        let path = std::env::temp_dir()
            .join(format!("shopfront-{}", uuid::Uuid::new_v4()))
            .join("session.toml");

        let mut config = SessionConfig::default();
        config.cart.shipping_fee_cents = 1250;
        config.save(Some(path.clone())).unwrap();

        let env = lookup(&[("SHOPFRONT_SHIPPING_FEE_CENTS", "0")]);
        let loaded = SessionConfig::load_with(Some(path.clone()), env).unwrap();
        assert_eq!(loaded.cart.shipping_fee_cents, 0);

        // An override that fails validation fails the whole load.
        let env = lookup(&[("SHOPFRONT_MAX_CART_LINES", "0")]);
        assert!(SessionConfig::load_with(Some(path.clone()), env).is_err());

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
