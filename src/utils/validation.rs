use crate::errors::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::borrow::Cow;
use std::str::FromStr;
use validator::{Validate, ValidationError};

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(AppError::from)
}

/// Keeps an explicit JSON `null` as `Some(Value::Null)` so it can be told
/// apart from a missing field (`None`, via `#[serde(default)]`).
pub fn nullable<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Unwraps a field that passed `#[validate(required)]` and parses it again
/// into its typed form.
pub fn required<T, F>(field: &str, value: Option<&Value>, parse: F) -> Result<T, AppError>
where
    F: FnOnce(&Value) -> Result<T, ValidationError>,
{
    let value = value.ok_or_else(|| AppError::field(field, ValidationError::new("required")))?;
    parse(value).map_err(|err| AppError::field(field, err))
}

/// Parses a string field. Surrounding whitespace is trimmed and numbers are
/// accepted in their textual form.
pub fn parse_text(
    value: &Value,
    max_length: Option<usize>,
    allow_blank: bool,
) -> Result<String, ValidationError> {
    let text = match value {
        Value::Null => return Err(error("null", "This field may not be null.")),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return Err(error("invalid", "Not a valid string.")),
    };

    if text.is_empty() && !allow_blank {
        return Err(error("blank", "This field may not be blank."));
    }

    if let Some(max) = max_length {
        if text.chars().count() > max {
            return Err(error(
                "max_length",
                format!("Ensure this field has no more than {} characters.", max),
            ));
        }
    }

    Ok(text)
}

/// Parses a fixed-point decimal field and checks it against a
/// `NUMERIC(max_digits, decimal_places)` column.
pub fn parse_decimal(
    value: &Value,
    max_digits: u32,
    decimal_places: u32,
) -> Result<Decimal, ValidationError> {
    let raw = match value {
        Value::Null => return Err(error("null", "This field may not be null.")),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return Err(error("invalid", "A valid number is required.")),
    };

    let decimal = match Decimal::from_str(&raw).or_else(|_| Decimal::from_scientific(&raw)) {
        Ok(decimal) => decimal,
        // Well-formed but beyond what `Decimal` can hold, so far too many digits.
        Err(_) if is_numeric_literal(&raw) => return Err(max_digits_error(max_digits)),
        Err(_) => return Err(error("invalid", "A valid number is required.")),
    };

    check_precision(decimal, max_digits, decimal_places)?;
    Ok(decimal)
}

/// `[+-]digits[.digits][(e|E)[+-]digits]`, with digits allowed on either side
/// of the point.
fn is_numeric_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return false;
    }

    match exponent {
        Some(exponent) => {
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !digits.is_empty() && all_digits(digits)
        }
        None => true,
    }
}

fn max_digits_error(max_digits: u32) -> ValidationError {
    error(
        "max_digits",
        format!("Ensure that there are no more than {} digits in total.", max_digits),
    )
}

fn check_precision(
    decimal: Decimal,
    max_digits: u32,
    decimal_places: u32,
) -> Result<(), ValidationError> {
    // Leading zeros after the point count as digits: 0.05 has two.
    let decimals = decimal.scale();
    let mantissa_digits = decimal.mantissa().unsigned_abs().to_string().len() as u32;
    let digits = mantissa_digits.max(decimals);
    let whole_digits = digits - decimals;

    if digits > max_digits {
        return Err(max_digits_error(max_digits));
    }
    if decimals > decimal_places {
        return Err(error(
            "max_decimal_places",
            format!("Ensure that there are no more than {} decimal places.", decimal_places),
        ));
    }
    if whole_digits > max_digits - decimal_places {
        return Err(error(
            "max_whole_digits",
            format!(
                "Ensure that there are no more than {} digits before the decimal point.",
                max_digits - decimal_places
            ),
        ));
    }
    Ok(())
}
