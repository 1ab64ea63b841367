use crate::adapters::format_currency;
use crate::core::engine::{CalculationOutcome, PricingEngine};
use crate::core::form::CalculatorForm;
use crate::domain::model::AddonOption;
use crate::domain::ports::Presenter;
use crate::utils::error::{PricerError, Result};
use std::io::Write;

pub const HELP: &str = "\
Commands:
  yarn <grams>              set the yarn weight
  packaging <amount>        set the additional packaging cost
  margin <amount>           set your custom margin
  check <addon> [qty]       select an add-on
  uncheck <addon>           deselect an add-on
  qty <addon> <n>           change an add-on quantity
  addons                    list the add-ons and their state
  show                      show the current form
  calc                      calculate the price
  reset                     clear the form
  help                      show this text
  quit                      leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    SetYarnWeight(String),
    SetPackaging(String),
    SetMargin(String),
    Check { name: String, quantity: Option<String> },
    Uncheck(String),
    SetQuantity { name: String, quantity: String },
    ListAddons,
    Show,
    Calculate,
    Reset,
    Help,
    Quit,
}

fn invalid(message: impl Into<String>) -> PricerError {
    PricerError::InvalidCommand {
        message: message.into(),
    }
}

/// Last token, when it looks like a whole number, is treated as a quantity.
fn split_trailing_number(rest: &str) -> (&str, Option<&str>) {
    match rest.rsplit_once(char::is_whitespace) {
        Some((head, tail)) if tail.parse::<i64>().is_ok() && !head.trim().is_empty() => {
            (head.trim(), Some(tail))
        }
        _ => (rest, None),
    }
}

impl ShellCommand {
    /// Returns `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let needs_arg = |what: &str| -> Result<String> {
            if rest.is_empty() {
                Err(invalid(format!("'{}' needs {}", keyword, what)))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "yarn" => ShellCommand::SetYarnWeight(needs_arg("a weight in grams")?),
            "packaging" => ShellCommand::SetPackaging(needs_arg("an amount")?),
            "margin" => ShellCommand::SetMargin(needs_arg("an amount")?),
            "check" => {
                let rest = needs_arg("an add-on name")?;
                let (name, quantity) = split_trailing_number(&rest);
                ShellCommand::Check {
                    name: name.to_string(),
                    quantity: quantity.map(str::to_string),
                }
            }
            "uncheck" => ShellCommand::Uncheck(needs_arg("an add-on name")?),
            "qty" => {
                let rest = needs_arg("an add-on name and a quantity")?;
                match rest.rsplit_once(char::is_whitespace) {
                    Some((name, quantity)) if !name.trim().is_empty() => ShellCommand::SetQuantity {
                        name: name.trim().to_string(),
                        quantity: quantity.to_string(),
                    },
                    _ => return Err(invalid("usage: qty <addon> <n>")),
                }
            }
            "addons" => ShellCommand::ListAddons,
            "show" => ShellCommand::Show,
            "calc" | "calculate" => ShellCommand::Calculate,
            "reset" => ShellCommand::Reset,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(invalid(format!("unknown command '{}'", other))),
        };

        Ok(Some(command))
    }
}

/// A live form plus the engine that renders its results.
pub struct Session<P: Presenter, W: Write> {
    form: CalculatorForm,
    engine: PricingEngine<P>,
    out: W,
    currency_symbol: String,
}

impl<P: Presenter, W: Write> Session<P, W> {
    pub fn new(catalog: &[AddonOption], presenter: P, out: W, currency_symbol: &str) -> Self {
        Self {
            form: CalculatorForm::new(catalog),
            engine: PricingEngine::new(presenter),
            out,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn form(&self) -> &CalculatorForm {
        &self.form
    }

    /// Runs one command. Returns `false` once the user asked to quit.
    pub fn execute(&mut self, command: ShellCommand) -> Result<bool> {
        match command {
            ShellCommand::SetYarnWeight(value) => self.form.yarn_weight = value,
            ShellCommand::SetPackaging(value) => self.form.additional_packaging = value,
            ShellCommand::SetMargin(value) => self.form.custom_margin = value,
            ShellCommand::Check { name, quantity } => {
                self.form.check(&name, quantity.as_deref())?
            }
            ShellCommand::Uncheck(name) => self.form.uncheck(&name)?,
            ShellCommand::SetQuantity { name, quantity } => {
                self.form.set_quantity(&name, &quantity)?
            }
            ShellCommand::ListAddons => self.list_addons()?,
            ShellCommand::Show => self.show()?,
            ShellCommand::Calculate => {
                if let CalculationOutcome::Rejected(error) = self.engine.calculate(&self.form)? {
                    tracing::debug!(field = error.field(), "calculation rejected");
                }
            }
            ShellCommand::Reset => self.engine.reset(&mut self.form)?,
            ShellCommand::Help => writeln!(self.out, "{}", HELP)?,
            ShellCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn list_addons(&mut self) -> Result<()> {
        for field in self.form.addons() {
            let mark = if field.checked { "x" } else { " " };
            writeln!(
                self.out,
                "[{}] {} ({}) qty {}",
                mark,
                field.option.name,
                format_currency(&self.currency_symbol, field.option.unit_price),
                field.quantity
            )?;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let yarn = if self.form.yarn_weight.is_empty() {
            "(empty)"
        } else {
            self.form.yarn_weight.as_str()
        };
        writeln!(self.out, "yarn weight:          {}", yarn)?;
        writeln!(self.out, "additional packaging: {}", self.form.additional_packaging)?;
        writeln!(self.out, "custom margin:        {}", self.form.custom_margin)?;
        let selected: Vec<String> = self
            .form
            .selected_addons()
            .into_iter()
            .map(|a| format!("{} ({})", a.name, a.quantity))
            .collect();
        if selected.is_empty() {
            writeln!(self.out, "add-ons:              none")?;
        } else {
            writeln!(self.out, "add-ons:              {}", selected.join(", "))?;
        }
        Ok(())
    }
}
