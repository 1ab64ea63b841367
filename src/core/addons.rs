use crate::core::validator::leading_integer;
use crate::domain::model::{AddonRequest, AddonSelection, AddonTotals};
use crate::utils::error::ValidationError;
use rust_decimal::Decimal;

const ADDONS_FIELD: &str = "addons";

/// Quantity typed next to an add-on, read like the whole number it starts
/// with. Anything below one, or not a number at all, counts as 1. A quantity
/// too big to count is rejected rather than reduced.
pub fn parse_quantity(text: &str) -> Result<u64, ValidationError> {
    let Some(digits) = leading_integer(text) else {
        return Ok(1);
    };
    if digits.starts_with('-') {
        return Ok(1);
    }

    match digits.trim_start_matches('+').parse::<u64>() {
        Ok(0) => Ok(1),
        Ok(n) => Ok(n),
        Err(_) => Err(ValidationError::AmountTooLarge {
            field: ADDONS_FIELD,
        }),
    }
}

/// Builds line items for the checked add-ons, keeping their order.
pub fn aggregate_addons(requests: &[AddonRequest]) -> Result<AddonTotals, ValidationError> {
    let too_large = ValidationError::AmountTooLarge {
        field: ADDONS_FIELD,
    };

    let selections = requests
        .iter()
        .map(|request| {
            let quantity = parse_quantity(&request.quantity)?;
            let line_total = request
                .unit_price
                .checked_mul(Decimal::from(quantity))
                .ok_or(too_large)?;
            Ok(AddonSelection {
                name: request.name.clone(),
                unit_price: request.unit_price,
                quantity,
                line_total,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let total = selections
        .iter()
        .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(s.line_total))
        .ok_or(too_large)?;
    tracing::debug!(count = selections.len(), %total, "add-ons aggregated");

    Ok(AddonTotals { selections, total })
}
