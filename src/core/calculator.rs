use crate::core::addons::aggregate_addons;
use crate::core::validator::validate_inputs;
use crate::domain::model::{AddonRequest, AddonTotals, PriceBreakdown, RawInputs, ValidatedInputs};
use crate::utils::error::ValidationError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const YARN_PRICE_PER_GRAM: Decimal = dec!(2);
pub const STANDARD_PACKAGING_COST: Decimal = dec!(10);
pub const PLATFORM_FEE_RATE: Decimal = dec!(0.03);

/// Applies the pricing formula. Fails only when an amount no longer fits the
/// money type.
pub fn compute_breakdown(
    inputs: &ValidatedInputs,
    addons: AddonTotals,
) -> Result<PriceBreakdown, ValidationError> {
    let too_large = |field| ValidationError::AmountTooLarge { field };

    let yarn_cost = inputs
        .yarn_weight
        .checked_mul(YARN_PRICE_PER_GRAM)
        .ok_or(too_large("yarn_weight"))?;
    let standard_packaging = STANDARD_PACKAGING_COST;

    let subtotal = [
        standard_packaging,
        inputs.additional_packaging,
        addons.total,
        inputs.custom_margin,
    ]
    .into_iter()
    .try_fold(yarn_cost, |acc, amount| acc.checked_add(amount))
    .ok_or(too_large("subtotal"))?;
    let platform_fee = subtotal
        .checked_mul(PLATFORM_FEE_RATE)
        .ok_or(too_large("subtotal"))?;
    let final_price = subtotal
        .checked_add(platform_fee)
        .ok_or(too_large("final_price"))?;

    Ok(PriceBreakdown {
        yarn_cost,
        standard_packaging,
        additional_packaging: inputs.additional_packaging,
        addons: addons.selections,
        addons_total: addons.total,
        custom_margin: inputs.custom_margin,
        subtotal,
        platform_fee,
        final_price,
    })
}

/// Validate, aggregate and compute in one go.
pub fn price(raw: &RawInputs, addons: &[AddonRequest]) -> Result<PriceBreakdown, ValidationError> {
    let inputs = validate_inputs(raw)?;
    let totals = aggregate_addons(addons)?;
    compute_breakdown(&inputs, totals)
}
