use crate::domain::model::AddonOption;
use crate::utils::error::{PricerError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative_amount, validate_unique_names, Validate,
};
use regex::Regex;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricerConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default = "default_catalog")]
    pub addons: Vec<AddonOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            addons: default_catalog(),
        }
    }
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

/// Add-ons offered when no configuration file is present.
pub fn default_catalog() -> Vec<AddonOption> {
    vec![
        AddonOption::new("Keychain Ring", dec!(15)),
        AddonOption::new("Safety Eyes", dec!(10)),
        AddonOption::new("Gift Wrap", dec!(20)),
        AddonOption::new("Name Tag", dec!(25)),
    ]
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl PricerConfig {
    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when it exists, otherwise the built-in defaults.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(PricerError::ConfigError {
                message: format!("Config path {} is a directory", path.display()),
            });
        }
        if path.exists() {
            tracing::debug!("Loading pricer config from {}", path.display());
            Self::from_file(path)
        } else {
            tracing::debug!(
                "No config at {}, using the built-in add-on catalog",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Expands `${VAR}` references from the environment. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("display.currency_symbol", &self.display.currency_symbol)?;

        for addon in &self.addons {
            validate_non_empty_string("addons.name", &addon.name)?;
            validate_non_negative_amount(&format!("addons.{}.price", addon.name), addon.unit_price)?;
        }
        validate_unique_names("addons.name", self.addons.iter().map(|a| a.name.as_str()))?;

        Ok(())
    }

    pub fn currency_symbol(&self) -> &str {
        &self.display.currency_symbol
    }
}

impl Validate for PricerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
