use crate::domain::model::PriceBreakdown;
use crate::utils::error::{Result, ValidationError};

/// Display side of a calculation: shows the result panel, the error banner,
/// or hides both.
pub trait Presenter {
    fn present(&mut self, breakdown: &PriceBreakdown) -> Result<()>;
    fn present_error(&mut self, error: &ValidationError) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, breakdown: &PriceBreakdown) -> Result<()> {
        (**self).present(breakdown)
    }

    fn present_error(&mut self, error: &ValidationError) -> Result<()> {
        (**self).present_error(error)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn present(&mut self, breakdown: &PriceBreakdown) -> Result<()> {
        (**self).present(breakdown)
    }

    fn present_error(&mut self, error: &ValidationError) -> Result<()> {
        (**self).present_error(error)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}
