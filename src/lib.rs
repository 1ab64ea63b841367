pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::PricerConfig;
pub use crate::core::calculator::{compute_breakdown, price};
pub use crate::core::engine::{CalculationOutcome, PricingEngine};
pub use crate::core::form::CalculatorForm;
pub use crate::domain::model::{AddonOption, AddonRequest, AddonSelection, PriceBreakdown, RawInputs};
pub use crate::utils::error::{PricerError, Result, ValidationError};
