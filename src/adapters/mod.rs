// Adapters layer: presenters that render a breakdown for the outside world.

pub mod csv_output;
pub mod json;
pub mod text;

use crate::domain::ports::Presenter;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub use csv_output::CsvPresenter;
pub use json::JsonPresenter;
pub use text::{describe_addons, format_currency, TextPresenter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn presenter_for<'w, W: Write + 'w>(
    format: OutputFormat,
    currency_symbol: &str,
    out: W,
) -> Box<dyn Presenter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter::new(out, currency_symbol)),
        OutputFormat::Json => Box::new(JsonPresenter::new(out, currency_symbol)),
        OutputFormat::Csv => Box::new(CsvPresenter::new(out)),
    }
}
