use crate::adapters::text::round_money;
use crate::domain::model::PriceBreakdown;
use crate::domain::ports::Presenter;
use crate::utils::error::{PricerError, Result, ValidationError};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Row<'a> {
    item: &'a str,
    quantity: Option<u64>,
    amount: Option<Decimal>,
    message: Option<&'a str>,
}

impl<'a> Row<'a> {
    fn amount(item: &'a str, amount: Decimal) -> Self {
        Self {
            item,
            quantity: None,
            amount: Some(round_money(amount)),
            message: None,
        }
    }
}

/// Writes every line of a breakdown as `item,quantity,amount,message` rows.
pub struct CsvPresenter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(out),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| PricerError::IoError(e.into_error()))
    }
}

impl<W: Write> Presenter for CsvPresenter<W> {
    fn present(&mut self, breakdown: &PriceBreakdown) -> Result<()> {
        self.writer.serialize(Row::amount("yarn_cost", breakdown.yarn_cost))?;
        self.writer
            .serialize(Row::amount("standard_packaging", breakdown.standard_packaging))?;
        self.writer.serialize(Row::amount(
            "additional_packaging",
            breakdown.additional_packaging,
        ))?;
        for addon in &breakdown.addons {
            self.writer.serialize(Row {
                item: &addon.name,
                quantity: Some(addon.quantity),
                amount: Some(round_money(addon.line_total)),
                message: None,
            })?;
        }
        self.writer
            .serialize(Row::amount("addons_total", breakdown.addons_total))?;
        self.writer
            .serialize(Row::amount("custom_margin", breakdown.custom_margin))?;
        self.writer.serialize(Row::amount("subtotal", breakdown.subtotal))?;
        self.writer
            .serialize(Row::amount("platform_fee", breakdown.platform_fee))?;
        self.writer
            .serialize(Row::amount("final_price", breakdown.final_price))?;
        self.writer.flush()?;
        Ok(())
    }

    fn present_error(&mut self, error: &ValidationError) -> Result<()> {
        let message = error.to_string();
        self.writer.serialize(Row {
            item: "error",
            quantity: None,
            amount: None,
            message: Some(&message),
        })?;
        self.writer.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.writer.serialize(Row {
            item: "reset",
            quantity: None,
            amount: None,
            message: None,
        })?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::price;
    use crate::domain::model::{AddonOption, AddonRequest, RawInputs};
    use rust_decimal_macros::dec;

    #[test]
    fn test_csv_rows() {
        let raw = RawInputs {
            yarn_weight: "50".to_string(),
            ..RawInputs::default()
        };
        let bow = AddonOption::new("Bow", dec!(15));
        let breakdown = price(&raw, &[AddonRequest::new(&bow, "2")]).unwrap();

        let mut presenter = CsvPresenter::new(Vec::new());
        presenter.present(&breakdown).unwrap();
        let text = String::from_utf8(presenter.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "item,quantity,amount,message");
        assert_eq!(lines[1], "yarn_cost,,100.00,");
        assert!(lines.contains(&"Bow,2,30.00,"));
        assert_eq!(lines.last().copied(), Some("final_price,,144.20,"));
    }

    #[test]
    fn test_csv_error_row() {
        let mut presenter = CsvPresenter::new(Vec::new());
        presenter
            .present_error(&ValidationError::NegativeYarnWeight)
            .unwrap();
        let text = String::from_utf8(presenter.into_inner().unwrap()).unwrap();
        assert!(text.ends_with("error,,,Yarn weight cannot be negative\n"));
    }

    #[test]
    fn test_csv_reset_row_follows_breakdown() {
        let raw = RawInputs {
            yarn_weight: "10".to_string(),
            ..RawInputs::default()
        };
        let breakdown = price(&raw, &[]).unwrap();

        let mut presenter = CsvPresenter::new(Vec::new());
        presenter.present(&breakdown).unwrap();
        presenter.clear().unwrap();
        let text = String::from_utf8(presenter.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.iter().filter(|l| l.starts_with("item,")).count(), 1);
        assert_eq!(lines[lines.len() - 2], "final_price,,30.90,");
        assert!(text.ends_with("reset,,,\n"));
    }
}
