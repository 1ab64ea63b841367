use crate::domain::model::{RawInputs, ValidatedInputs};
use crate::utils::error::ValidationError;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

// Past this many powers of ten a non-zero amount overflows or vanishes.
const MAX_EXPONENT: i64 = 56;

fn leading_decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([+-]?)(\d*)(?:\.(\d*))?(?:[eE]([+-]?\d+))?")
            .expect("static pattern is valid")
    })
}

fn leading_integer_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").expect("static pattern is valid"))
}

/// Reads the number a field starts with, ignoring whatever follows it
/// (`"100g"` is 100). Returns `Ok(None)` when the field does not start with a
/// number, and `AmountTooLarge` when it does but the value cannot be held.
pub fn parse_amount(
    field: &'static str,
    text: &str,
) -> Result<Option<Decimal>, ValidationError> {
    let too_large = ValidationError::AmountTooLarge { field };
    let Some(caps) = leading_decimal_pattern().captures(text) else {
        return Ok(None);
    };

    let negative = &caps[1] == "-";
    let whole = caps.get(2).map_or("", |m| m.as_str());
    let fraction = caps.get(3).map_or("", |m| m.as_str());
    if whole.is_empty() && fraction.is_empty() {
        return Ok(None);
    }

    let mantissa = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if whole.is_empty() { "0" } else { whole },
        if fraction.is_empty() { "0" } else { fraction }
    );
    let mut value = Decimal::from_str(&mantissa).map_err(|_| too_large)?.normalize();

    // An exponent only counts when digits follow the `e`; the pattern
    // guarantees that, but the digits may not fit an i64.
    let exponent = match caps.get(4) {
        Some(m) => m.as_str().parse::<i64>().unwrap_or(if m.as_str().starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }),
        None => 0,
    };

    if value.is_zero() {
        return Ok(Some(Decimal::ZERO));
    }
    if exponent > MAX_EXPONENT {
        return Err(too_large);
    }
    if exponent < -MAX_EXPONENT {
        return Ok(Some(Decimal::ZERO));
    }

    let ten = Decimal::TEN;
    for _ in 0..exponent.unsigned_abs() {
        value = if exponent > 0 {
            value.checked_mul(ten).ok_or(too_large)?
        } else {
            value.checked_div(ten).ok_or(too_large)?
        };
    }

    Ok(Some(value))
}

/// The signed whole number a field starts with (`"2.9"` gives `2`,
/// `"3 pcs"` gives `3`), as text.
pub fn leading_integer(text: &str) -> Option<&str> {
    leading_integer_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Checks the form fields in a fixed order and reports the first problem.
pub fn validate_inputs(raw: &RawInputs) -> Result<ValidatedInputs, ValidationError> {
    let yarn_weight =
        parse_amount("yarn_weight", &raw.yarn_weight)?.ok_or(ValidationError::MissingYarnWeight)?;
    if yarn_weight < Decimal::ZERO {
        return Err(ValidationError::NegativeYarnWeight);
    }

    // Optional fields fall back to zero when blank or unreadable.
    let additional_packaging =
        parse_amount("additional_packaging", &raw.additional_packaging)?.unwrap_or_default();
    if additional_packaging < Decimal::ZERO {
        return Err(ValidationError::NegativeAdditionalPackaging);
    }

    let custom_margin = parse_amount("custom_margin", &raw.custom_margin)?.unwrap_or_default();
    if custom_margin < Decimal::ZERO {
        return Err(ValidationError::NegativeCustomMargin);
    }

    tracing::debug!(
        %yarn_weight,
        %additional_packaging,
        %custom_margin,
        "form inputs accepted"
    );

    Ok(ValidatedInputs {
        yarn_weight,
        additional_packaging,
        custom_margin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw(yarn: &str, packaging: &str, margin: &str) -> RawInputs {
        RawInputs {
            yarn_weight: yarn.to_string(),
            additional_packaging: packaging.to_string(),
            custom_margin: margin.to_string(),
        }
    }

    fn amount(text: &str) -> Option<Decimal> {
        parse_amount("yarn_weight", text).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(amount(" 12.5 "), Some(dec!(12.5)));
        assert_eq!(amount("-3"), Some(dec!(-3)));
        assert_eq!(amount("+4"), Some(dec!(4)));
        assert_eq!(amount("1e2"), Some(dec!(100)));
        assert_eq!(amount("2.5E-1"), Some(dec!(0.25)));
        assert_eq!(amount(".5"), Some(dec!(0.5)));
        assert_eq!(amount("5."), Some(dec!(5)));
        assert_eq!(amount(""), None);
        assert_eq!(amount("   "), None);
        assert_eq!(amount("abc"), None);
        assert_eq!(amount("NaN"), None);
        assert_eq!(amount("."), None);
        assert_eq!(amount("-"), None);
    }

    #[test]
    fn test_parse_amount_reads_leading_number() {
        assert_eq!(amount("100g"), Some(dec!(100)));
        assert_eq!(amount("5abc"), Some(dec!(5)));
        assert_eq!(amount("-5abc"), Some(dec!(-5)));
        assert_eq!(amount("12.5.7"), Some(dec!(12.5)));
        assert_eq!(amount("3e"), Some(dec!(3)));
        assert_eq!(amount("3e+x"), Some(dec!(3)));
        assert_eq!(amount("g100"), None);
    }

    #[test]
    fn test_parse_amount_extremes() {
        assert_eq!(amount("5e28"), Some(dec!(50000000000000000000000000000)));
        assert_eq!(amount("1e-400"), Some(dec!(0)));
        assert_eq!(amount("0e999999"), Some(dec!(0)));
        let too_large = Err(ValidationError::AmountTooLarge {
            field: "yarn_weight",
        });
        assert_eq!(parse_amount("yarn_weight", "1e29"), too_large);
        assert_eq!(parse_amount("yarn_weight", "1e99999999999999999999"), too_large);
        assert_eq!(
            parse_amount("yarn_weight", "99999999999999999999999999999999"),
            too_large
        );
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer(" 3 pcs"), Some("3"));
        assert_eq!(leading_integer("2.9"), Some("2"));
        assert_eq!(leading_integer("-4"), Some("-4"));
        assert_eq!(leading_integer("1e3"), Some("1"));
        assert_eq!(leading_integer(".5"), None);
        assert_eq!(leading_integer("many"), None);
    }

    #[test]
    fn test_missing_or_unreadable_yarn_weight() {
        for yarn in ["", "  ", "grams", "NaN"] {
            assert_eq!(
                validate_inputs(&raw(yarn, "0", "0")),
                Err(ValidationError::MissingYarnWeight),
                "yarn weight {:?}",
                yarn
            );
        }
    }

    #[test]
    fn test_trailing_text_after_numbers() {
        let inputs = validate_inputs(&raw("100g", "5abc", "0")).unwrap();
        assert_eq!(inputs.yarn_weight, dec!(100));
        assert_eq!(inputs.additional_packaging, dec!(5));

        assert_eq!(
            validate_inputs(&raw("100", "-5abc", "0")),
            Err(ValidationError::NegativeAdditionalPackaging)
        );
    }

    #[test]
    fn test_rules_are_checked_in_order() {
        assert_eq!(
            validate_inputs(&raw("-1", "-1", "-1")),
            Err(ValidationError::NegativeYarnWeight)
        );
        assert_eq!(
            validate_inputs(&raw("10", "-1", "-1")),
            Err(ValidationError::NegativeAdditionalPackaging)
        );
        assert_eq!(
            validate_inputs(&raw("10", "-1", "1e99")),
            Err(ValidationError::NegativeAdditionalPackaging)
        );
        assert_eq!(
            validate_inputs(&raw("10", "0", "-0.01")),
            Err(ValidationError::NegativeCustomMargin)
        );
    }

    #[test]
    fn test_optional_fields_default_to_zero() {
        let inputs = validate_inputs(&raw("0", "", "oops")).unwrap();
        assert_eq!(inputs.yarn_weight, dec!(0));
        assert_eq!(inputs.additional_packaging, dec!(0));
        assert_eq!(inputs.custom_margin, dec!(0));
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        let inputs = validate_inputs(&raw("-0", "-0", "-0")).unwrap();
        assert_eq!(inputs.yarn_weight, dec!(0));
    }
}
