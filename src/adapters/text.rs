use crate::domain::model::{AddonSelection, PriceBreakdown};
use crate::domain::ports::Presenter;
use crate::utils::error::{Result, ValidationError};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;

/// Rounds to whole cents, always keeping two decimal places.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

pub fn format_currency(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, round_money(amount))
}

/// `Bow × 2: ₹30.00, Bell: ₹5.00`, or `None` when nothing is selected.
pub fn describe_addons(symbol: &str, addons: &[AddonSelection]) -> Option<String> {
    if addons.is_empty() {
        return None;
    }

    let parts: Vec<String> = addons
        .iter()
        .map(|addon| {
            let amount = format_currency(symbol, addon.line_total);
            if addon.quantity > 1 {
                format!("{} × {}: {}", addon.name, addon.quantity, amount)
            } else {
                format!("{}: {}", addon.name, amount)
            }
        })
        .collect();

    Some(parts.join(", "))
}

pub struct TextPresenter<W: Write> {
    out: W,
    currency_symbol: String,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W, currency_symbol: impl Into<String>) -> Self {
        Self {
            out,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, label: &str, amount: Decimal) -> Result<()> {
        let value = format_currency(&self.currency_symbol, amount);
        writeln!(self.out, "{:<22}{:>12}", label, value)?;
        Ok(())
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, breakdown: &PriceBreakdown) -> Result<()> {
        self.line("Yarn cost", breakdown.yarn_cost)?;
        self.line("Standard packaging", breakdown.standard_packaging)?;
        self.line("Additional packaging", breakdown.additional_packaging)?;
        self.line("Add-ons", breakdown.addons_total)?;
        if let Some(detail) = describe_addons(&self.currency_symbol, &breakdown.addons) {
            writeln!(self.out, "  {}", detail)?;
        }
        self.line("Custom margin", breakdown.custom_margin)?;
        self.line("Subtotal", breakdown.subtotal)?;
        self.line("Platform fee (3%)", breakdown.platform_fee)?;
        writeln!(self.out, "{}", "-".repeat(34))?;
        self.line("Final price", breakdown.final_price)?;
        self.out.flush()?;
        Ok(())
    }

    fn present_error(&mut self, error: &ValidationError) -> Result<()> {
        writeln!(self.out, "Error: {}", error)?;
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        writeln!(self.out, "Form reset.")?;
        self.out.flush()?;
        Ok(())
    }
}
