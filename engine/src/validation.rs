//! Input validation for the calculation engine
//!
//! This module is the sole coercion point from external text/number input
//! to the strongly-typed [`BiometricInput`]. Downstream calculations never
//! see a raw string or an unchecked number.

use crate::energy::{ActivityLevel, BiometricInput, Sex};
use crate::errors::EngineError;
use serde::{Deserialize, Serialize};

/// A numeric field as it arrives on the wire: a JSON number or a string
/// holding one. HTML form frontends send strings; API clients send numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Raw calculation request, before validation
///
/// Every field is optional here so that a missing field surfaces as a
/// [`EngineError::MissingField`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub age: Option<NumberOrText>,
    pub gender: Option<String>,
    pub weight_kg: Option<NumberOrText>,
    pub height_cm: Option<NumberOrText>,
    pub activity_level: Option<String>,
}

/// Validate a raw request into a strongly-typed [`BiometricInput`]
///
/// Pure function: no partial computation happens on failure, and the
/// engine never proceeds with defaulted or zeroed fields.
pub fn validate(raw: &CalculationRequest) -> Result<BiometricInput, EngineError> {
    let age = positive_number(raw.age.as_ref(), "age")?;
    // Age is whole years; "30" and 30.0 are fine, 30.5 is not. The
    // representability bound keeps the u32 conversion below from
    // saturating on absurd inputs.
    if age.fract() != 0.0 || age > u32::MAX as f64 {
        return Err(EngineError::NonPositiveValue("age"));
    }

    let sex: Sex = required_text(raw.gender.as_deref(), "gender")?.parse()?;

    let weight_kg = positive_number(raw.weight_kg.as_ref(), "weight_kg")?;
    let height_cm = positive_number(raw.height_cm.as_ref(), "height_cm")?;

    let activity_level: ActivityLevel = required_text(raw.activity_level.as_deref(), "activity_level")?
        .parse()
        .map_err(|err| match err {
            // At the validation boundary an unrecognized category is an
            // enum error; UnknownActivityLevel is the defensive signal for
            // direct out-of-flow lookups.
            EngineError::UnknownActivityLevel(value) => EngineError::InvalidEnum {
                field: "activity_level",
                value,
            },
            other => other,
        })?;

    Ok(BiometricInput {
        age: age as u32,
        sex,
        weight_kg,
        height_cm,
        activity_level,
    })
}

/// Extract a mandatory textual field, treating blank strings as missing
fn required_text<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, EngineError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(EngineError::MissingField(name)),
    }
}

/// Coerce a mandatory numeric field and require it to be strictly positive
///
/// Text that does not parse as a number, NaN, and infinities all report
/// `NonPositiveValue`: they are not positive numbers, and the error
/// taxonomy has no finer kind for them.
fn positive_number(value: Option<&NumberOrText>, name: &'static str) -> Result<f64, EngineError> {
    let parsed = match value {
        None => return Err(EngineError::MissingField(name)),
        Some(NumberOrText::Number(n)) => *n,
        Some(NumberOrText::Text(t)) => {
            let trimmed = t.trim();
            if trimmed.is_empty() {
                return Err(EngineError::MissingField(name));
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| EngineError::NonPositiveValue(name))?
        }
    };

    if parsed.is_finite() && parsed > 0.0 {
        Ok(parsed)
    } else {
        Err(EngineError::NonPositiveValue(name))
    }
}
