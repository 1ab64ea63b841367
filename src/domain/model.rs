use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of the add-on catalog, in the order it is offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonOption {
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Decimal,
}

impl AddonOption {
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

/// A checked add-on together with the quantity text the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonRequest {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: String,
}

impl AddonRequest {
    pub fn new(option: &AddonOption, quantity: impl Into<String>) -> Self {
        Self {
            name: option.name.clone(),
            unit_price: option.unit_price,
            quantity: quantity.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddonSelection {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u64,
    pub line_total: Decimal,
}

/// Selected add-ons in presentation order plus their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddonTotals {
    pub selections: Vec<AddonSelection>,
    pub total: Decimal,
}

/// The form snapshot exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub yarn_weight: String,
    pub additional_packaging: String,
    pub custom_margin: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedInputs {
    pub yarn_weight: Decimal,
    pub additional_packaging: Decimal,
    pub custom_margin: Decimal,
}

/// Result of one calculation. Amounts are exact; rounding happens on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub yarn_cost: Decimal,
    pub standard_packaging: Decimal,
    pub additional_packaging: Decimal,
    pub addons: Vec<AddonSelection>,
    pub addons_total: Decimal,
    pub custom_margin: Decimal,
    pub subtotal: Decimal,
    pub platform_fee: Decimal,
    pub final_price: Decimal,
}
