use crate::core::form::CalculatorForm;
use crate::domain::model::PriceBreakdown;
use crate::domain::ports::Presenter;
use crate::utils::error::{Result, ValidationError};

/// What a calculate action ended in. Rejected input is not a failure of the
/// engine: the message has already been shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationOutcome {
    Priced(PriceBreakdown),
    Rejected(ValidationError),
}

impl CalculationOutcome {
    pub fn breakdown(&self) -> Option<&PriceBreakdown> {
        match self {
            CalculationOutcome::Priced(breakdown) => Some(breakdown),
            CalculationOutcome::Rejected(_) => None,
        }
    }
}

/// Runs the calculate and reset actions of a form against a presenter.
pub struct PricingEngine<P: Presenter> {
    presenter: P,
}

impl<P: Presenter> PricingEngine<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn calculate(&mut self, form: &CalculatorForm) -> Result<CalculationOutcome> {
        match form.calculate() {
            Ok(breakdown) => {
                tracing::info!(
                    subtotal = %breakdown.subtotal,
                    final_price = %breakdown.final_price,
                    addons = breakdown.addons.len(),
                    "price calculated"
                );
                self.presenter.present(&breakdown)?;
                Ok(CalculationOutcome::Priced(breakdown))
            }
            Err(error) => {
                tracing::warn!(field = error.field(), "input rejected: {}", error);
                self.presenter.present_error(&error)?;
                Ok(CalculationOutcome::Rejected(error))
            }
        }
    }

    pub fn reset(&mut self, form: &mut CalculatorForm) -> Result<()> {
        form.reset();
        tracing::debug!("form reset");
        self.presenter.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AddonOption;
    use rust_decimal_macros::dec;

    #[derive(Debug, Default, PartialEq)]
    enum Panel {
        #[default]
        Hidden,
        Result(PriceBreakdown),
        Error(String),
    }

    #[derive(Default)]
    struct RecordingPresenter {
        panel: Panel,
        events: usize,
    }

    impl Presenter for RecordingPresenter {
        fn present(&mut self, breakdown: &PriceBreakdown) -> Result<()> {
            self.panel = Panel::Result(breakdown.clone());
            self.events += 1;
            Ok(())
        }

        fn present_error(&mut self, error: &ValidationError) -> Result<()> {
            self.panel = Panel::Error(error.to_string());
            self.events += 1;
            Ok(())
        }

        fn clear(&mut self) -> Result<()> {
            self.panel = Panel::Hidden;
            self.events += 1;
            Ok(())
        }
    }

    #[test]
    fn test_calculate_presents_breakdown() {
        let mut form = CalculatorForm::new(&[AddonOption::new("Bow", dec!(15))]);
        form.yarn_weight = "50".to_string();
        form.check("Bow", Some("2")).unwrap();

        let mut engine = PricingEngine::new(RecordingPresenter::default());
        let outcome = engine.calculate(&form).unwrap();

        let breakdown = outcome.breakdown().unwrap();
        assert_eq!(breakdown.final_price, dec!(144.20));
        assert_eq!(engine.presenter().panel, Panel::Result(breakdown.clone()));
    }

    #[test]
    fn test_rejected_input_shows_error_only() {
        let mut form = CalculatorForm::new(&[]);
        form.yarn_weight = "10".to_string();
        form.custom_margin = "-2".to_string();

        let mut engine = PricingEngine::new(RecordingPresenter::default());
        let outcome = engine.calculate(&form).unwrap();

        assert_eq!(
            outcome,
            CalculationOutcome::Rejected(ValidationError::NegativeCustomMargin)
        );
        assert_eq!(
            engine.presenter().panel,
            Panel::Error("Custom margin cannot be negative".to_string())
        );
    }

    #[test]
    fn test_reset_then_calculate_reports_missing_weight() {
        let mut form = CalculatorForm::new(&[]);
        form.yarn_weight = "100".to_string();

        let mut engine = PricingEngine::new(RecordingPresenter::default());
        engine.calculate(&form).unwrap();
        engine.reset(&mut form).unwrap();
        assert_eq!(engine.presenter().panel, Panel::Hidden);

        let outcome = engine.calculate(&form).unwrap();
        assert_eq!(
            outcome,
            CalculationOutcome::Rejected(ValidationError::MissingYarnWeight)
        );
        assert_eq!(engine.into_presenter().events, 3);
    }
}
