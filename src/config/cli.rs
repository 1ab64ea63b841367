use crate::config::toml_config::PricerConfig;
use crate::config::CliConfig;
use crate::core::form::CalculatorForm;
use crate::utils::error::{PricerError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};

/// Splits an `--addon` argument into name and optional quantity text.
/// The quantity follows the last `:` so names may contain colons.
pub fn parse_addon_arg(arg: &str) -> Result<(&str, Option<&str>)> {
    let (name, quantity) = match arg.rsplit_once(':') {
        Some((name, quantity)) => (name.trim(), Some(quantity.trim())),
        None => (arg.trim(), None),
    };

    if name.is_empty() {
        return Err(PricerError::InvalidConfigValueError {
            field: "addon".to_string(),
            value: arg.to_string(),
            reason: "Add-on name cannot be empty".to_string(),
        });
    }

    Ok((name, quantity))
}

impl CliConfig {
    /// Fills a fresh form from the command line arguments.
    pub fn build_form(&self, config: &PricerConfig) -> Result<CalculatorForm> {
        let mut form = CalculatorForm::new(&config.addons);
        form.yarn_weight = self.yarn_weight.clone().unwrap_or_default();
        form.additional_packaging = self.additional_packaging.clone();
        form.custom_margin = self.custom_margin.clone();

        for arg in &self.addons {
            let (name, quantity) = parse_addon_arg(arg)?;
            form.check(name, quantity)?;
        }

        Ok(form)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        for arg in &self.addons {
            validate_non_empty_string("addon", arg)?;
        }
        Ok(())
    }
}
