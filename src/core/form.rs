use crate::core::calculator::price;
use crate::domain::model::{AddonOption, AddonRequest, PriceBreakdown, RawInputs};
use crate::utils::error::{PricerError, Result, ValidationError};

const DEFAULT_AMOUNT: &str = "0";
const DEFAULT_QUANTITY: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonField {
    pub option: AddonOption,
    pub checked: bool,
    pub quantity: String,
}

/// Live state of the calculator form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorForm {
    pub yarn_weight: String,
    pub additional_packaging: String,
    pub custom_margin: String,
    addons: Vec<AddonField>,
}

impl CalculatorForm {
    pub fn new(catalog: &[AddonOption]) -> Self {
        Self {
            yarn_weight: String::new(),
            additional_packaging: DEFAULT_AMOUNT.to_string(),
            custom_margin: DEFAULT_AMOUNT.to_string(),
            addons: catalog
                .iter()
                .cloned()
                .map(|option| AddonField {
                    option,
                    checked: false,
                    quantity: DEFAULT_QUANTITY.to_string(),
                })
                .collect(),
        }
    }

    pub fn addons(&self) -> &[AddonField] {
        &self.addons
    }

    pub fn snapshot(&self) -> RawInputs {
        RawInputs {
            yarn_weight: self.yarn_weight.clone(),
            additional_packaging: self.additional_packaging.clone(),
            custom_margin: self.custom_margin.clone(),
        }
    }

    /// Checked add-ons in catalog order.
    pub fn selected_addons(&self) -> Vec<AddonRequest> {
        self.addons
            .iter()
            .filter(|field| field.checked)
            .map(|field| AddonRequest::new(&field.option, field.quantity.clone()))
            .collect()
    }

    pub fn check(&mut self, name: &str, quantity: Option<&str>) -> Result<()> {
        let field = self.field_mut(name)?;
        field.checked = true;
        if let Some(quantity) = quantity {
            field.quantity = quantity.to_string();
        }
        Ok(())
    }

    pub fn uncheck(&mut self, name: &str) -> Result<()> {
        self.field_mut(name)?.checked = false;
        Ok(())
    }

    pub fn set_quantity(&mut self, name: &str, quantity: &str) -> Result<()> {
        self.field_mut(name)?.quantity = quantity.to_string();
        Ok(())
    }

    pub fn calculate(&self) -> std::result::Result<PriceBreakdown, ValidationError> {
        price(&self.snapshot(), &self.selected_addons())
    }

    pub fn reset(&mut self) {
        self.yarn_weight.clear();
        self.additional_packaging = DEFAULT_AMOUNT.to_string();
        self.custom_margin = DEFAULT_AMOUNT.to_string();
        for field in &mut self.addons {
            field.checked = false;
            field.quantity = DEFAULT_QUANTITY.to_string();
        }
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut AddonField> {
        let wanted = name.trim();
        self.addons
            .iter_mut()
            .find(|field| field.option.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PricerError::UnknownAddon {
                name: wanted.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn catalog() -> Vec<AddonOption> {
        vec![
            AddonOption::new("Keychain Ring", dec!(15)),
            AddonOption::new("Gift Wrap", dec!(20)),
        ]
    }

    #[test]
    fn test_new_form_defaults() {
        let form = CalculatorForm::new(&catalog());
        assert_eq!(form.yarn_weight, "");
        assert_eq!(form.additional_packaging, "0");
        assert_eq!(form.custom_margin, "0");
        assert!(form.addons().iter().all(|f| !f.checked && f.quantity == "1"));
    }

    #[test]
    fn test_selected_addons_follow_catalog_order() {
        let mut form = CalculatorForm::new(&catalog());
        form.check("gift wrap", None).unwrap();
        form.check("Keychain Ring", Some("3")).unwrap();

        let selected = form.selected_addons();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].name, "Keychain Ring");
        assert_eq!(selected[0].quantity, "3");
        assert_eq!(selected[1].name, "Gift Wrap");
    }

    #[test]
    fn test_uncheck_and_unknown_addon() {
        let mut form = CalculatorForm::new(&catalog());
        form.check("Gift Wrap", None).unwrap();
        form.uncheck("Gift Wrap").unwrap();
        assert!(form.selected_addons().is_empty());

        assert!(matches!(
            form.check("Tassel", None),
            Err(PricerError::UnknownAddon { name }) if name == "Tassel"
        ));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = CalculatorForm::new(&catalog());
        form.yarn_weight = "80".to_string();
        form.additional_packaging = "5".to_string();
        form.custom_margin = "30".to_string();
        form.check("Keychain Ring", Some("4")).unwrap();
        assert!(form.calculate().is_ok());

        form.reset();

        assert_eq!(form, CalculatorForm::new(&catalog()));
        assert_eq!(form.calculate(), Err(ValidationError::MissingYarnWeight));
    }
}
