pub mod addons;
pub mod calculator;
pub mod engine;
pub mod form;
pub mod validator;

pub use crate::domain::model::{AddonOption, AddonSelection, PriceBreakdown};
pub use crate::domain::ports::Presenter;
pub use crate::utils::error::Result;
