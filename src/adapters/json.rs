use crate::adapters::text::round_money;
use crate::domain::model::{AddonSelection, PriceBreakdown};
use crate::domain::ports::Presenter;
use crate::utils::error::{Result, ValidationError};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct AddonLine<'a> {
    name: &'a str,
    unit_price: Decimal,
    quantity: u64,
    line_total: Decimal,
}

#[derive(Debug, Serialize)]
struct BreakdownDocument<'a> {
    currency: &'a str,
    yarn_cost: Decimal,
    standard_packaging: Decimal,
    additional_packaging: Decimal,
    addons: Vec<AddonLine<'a>>,
    addons_total: Decimal,
    custom_margin: Decimal,
    subtotal: Decimal,
    platform_fee: Decimal,
    final_price: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Event<'a> {
    Priced(BreakdownDocument<'a>),
    Rejected { field: &'a str, error: String },
    Reset,
}

/// One JSON document per line, amounts rounded to cents.
pub struct JsonPresenter<W: Write> {
    out: W,
    currency_symbol: String,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W, currency_symbol: impl Into<String>) -> Self {
        Self {
            out,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &Event<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

fn addon_line(addon: &AddonSelection) -> AddonLine<'_> {
    AddonLine {
        name: &addon.name,
        unit_price: round_money(addon.unit_price),
        quantity: addon.quantity,
        line_total: round_money(addon.line_total),
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, breakdown: &PriceBreakdown) -> Result<()> {
        let symbol = self.currency_symbol.clone();
        let document = BreakdownDocument {
            currency: &symbol,
            yarn_cost: round_money(breakdown.yarn_cost),
            standard_packaging: round_money(breakdown.standard_packaging),
            additional_packaging: round_money(breakdown.additional_packaging),
            addons: breakdown.addons.iter().map(addon_line).collect(),
            addons_total: round_money(breakdown.addons_total),
            custom_margin: round_money(breakdown.custom_margin),
            subtotal: round_money(breakdown.subtotal),
            platform_fee: round_money(breakdown.platform_fee),
            final_price: round_money(breakdown.final_price),
        };
        self.emit(&Event::Priced(document))
    }

    fn present_error(&mut self, error: &ValidationError) -> Result<()> {
        self.emit(&Event::Rejected {
            field: error.field(),
            error: error.to_string(),
        })
    }

    fn clear(&mut self) -> Result<()> {
        self.emit(&Event::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::price;
    use crate::domain::model::RawInputs;

    #[test]
    fn test_priced_document() {
        let raw = RawInputs {
            yarn_weight: "100".to_string(),
            ..RawInputs::default()
        };
        let breakdown = price(&raw, &[]).unwrap();

        let mut presenter = JsonPresenter::new(Vec::new(), "₹");
        presenter.present(&breakdown).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&presenter.into_inner()).unwrap();

        assert_eq!(value["status"], "priced");
        assert_eq!(value["currency"], "₹");
        assert_eq!(value["subtotal"], "210.00");
        assert_eq!(value["platform_fee"], "6.30");
        assert_eq!(value["final_price"], "216.30");
        assert_eq!(value["addons"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_rejected_document() {
        let mut presenter = JsonPresenter::new(Vec::new(), "₹");
        presenter
            .present_error(&ValidationError::NegativeAdditionalPackaging)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&presenter.into_inner()).unwrap();

        assert_eq!(value["status"], "rejected");
        assert_eq!(value["field"], "additional_packaging");
        assert_eq!(value["error"], "Additional packaging cost cannot be negative");
    }
}
