//! Presence validation and loose coercion of expense input.
//!
//! A field counts as missing when it is absent or "falsy": `null`, `false`,
//! the empty string or numeric zero. Present fields are not type checked:
//! the amount is parsed from its longest numeric prefix (yielding NaN when
//! there is none) and text fields keep strings verbatim.

use serde_json::Value;

use crate::{
    EngineError,
    expense::{ExpenseInput, Field, ValidExpense},
};

/// Knobs for presence validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ValidationPolicy {
    /// Report a numeric zero `amount` as missing.
    pub zero_amount_is_missing: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            zero_amount_is_missing: true,
        }
    }
}

/// Check every required field and coerce the input into a [`ValidExpense`].
///
/// On failure all missing fields are reported at once, in [`Field::ALL`] order.
pub(crate) fn validate(
    input: ExpenseInput,
    policy: ValidationPolicy,
) -> Result<ValidExpense, EngineError> {
    let ExpenseInput {
        amount,
        description,
        category,
        date,
    } = input;

    let mut missing = Vec::new();
    let mut require = |field: Field, value: Option<Value>| {
        if is_missing(field, value.as_ref(), policy) {
            missing.push(field);
            None
        } else {
            value
        }
    };

    let amount = require(Field::Amount, amount);
    let description = require(Field::Description, description);
    let category = require(Field::Category, category);
    let date = require(Field::Date, date);

    match (amount, description, category, date) {
        (Some(amount), Some(description), Some(category), Some(date)) => Ok(ValidExpense {
            amount: parse_amount(&amount),
            description: text(description),
            category: text(category),
            date: text(date),
        }),
        _ => Err(EngineError::MissingFields(missing)),
    }
}

fn is_missing(field: Field, value: Option<&Value>, policy: ValidationPolicy) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
            field != Field::Amount || policy.zero_amount_is_missing
        }
        Some(_) => false,
    }
}

fn text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Numeric value of an amount field.
pub(crate) fn parse_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_float(s),
        Value::Array(items) => parse_float(&join_items(items)),
        Value::Null | Value::Bool(_) | Value::Object(_) => f64::NAN,
    }
}

// Arrays coerce to their comma-joined elements before parsing.
fn join_items(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Array(inner) => join_items(inner),
            Value::Object(_) => "[object Object]".to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse the longest floating point prefix of `input`.
///
/// Leading whitespace (including a byte order mark) is skipped, an
/// optionally signed `Infinity` is accepted and trailing garbage is ignored. Returns NaN when no digits are found.
pub(crate) fn parse_float(input: &str) -> f64 {
    let s = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(amount: Value, description: Value, category: Value, date: Value) -> ExpenseInput {
        ExpenseInput {
            amount: Some(amount),
            description: Some(description),
            category: Some(category),
            date: Some(date),
        }
    }

    #[test]
    fn accepts_complete_input() {
        let valid = validate(
            input(json!(12.5), json!("lunch"), json!("food"), json!("2024-01-01")),
            ValidationPolicy::default(),
        )
        .unwrap();

        assert_eq!(valid.amount, 12.5);
        assert_eq!(valid.description, "lunch");
        assert_eq!(valid.category, "food");
        assert_eq!(valid.date, "2024-01-01");
    }

    #[test]
    fn reports_every_missing_field_in_order() {
        let err = validate(ExpenseInput::default(), ValidationPolicy::default()).unwrap_err();
        assert_eq!(err, EngineError::MissingFields(Field::ALL.to_vec()));
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let err = validate(
            input(json!("10"), json!(""), json!(false), json!(null)),
            ValidationPolicy::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            EngineError::MissingFields(vec![Field::Description, Field::Category, Field::Date])
        );
    }

    #[test]
    fn zero_amount_is_missing_by_default() {
        let err = validate(
            input(json!(0), json!("lunch"), json!("food"), json!("2024-01-01")),
            ValidationPolicy::default(),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::MissingFields(vec![Field::Amount]));
    }

    #[test]
    fn zero_amount_accepted_when_policy_allows() {
        let policy = ValidationPolicy {
            zero_amount_is_missing: false,
        };
        let valid = validate(
            input(json!(0), json!("lunch"), json!("food"), json!("2024-01-01")),
            policy,
        )
        .unwrap();
        assert_eq!(valid.amount, 0.0);
    }

    #[test]
    fn zero_text_field_is_missing_regardless_of_policy() {
        let policy = ValidationPolicy {
            zero_amount_is_missing: false,
        };
        let err = validate(
            input(json!(5), json!(0), json!("food"), json!("2024-01-01")),
            policy,
        )
        .unwrap_err();
        assert_eq!(err, EngineError::MissingFields(vec![Field::Description]));
    }

    #[test]
    fn string_zero_is_present() {
        let valid = validate(
            input(json!("0"), json!("lunch"), json!("food"), json!("2024-01-01")),
            ValidationPolicy::default(),
        )
        .unwrap();
        assert_eq!(valid.amount, 0.0);
    }

    #[test]
    fn non_string_text_keeps_json_text() {
        let valid = validate(
            input(json!(3), json!(42), json!(true), json!("2024-01-01")),
            ValidationPolicy::default(),
        )
        .unwrap();
        assert_eq!(valid.description, "42");
        assert_eq!(valid.category, "true");
    }

    #[test]
    fn unparsable_amount_passes_through_as_nan() {
        let valid = validate(
            input(json!("abc"), json!("lunch"), json!("food"), json!("2024-01-01")),
            ValidationPolicy::default(),
        )
        .unwrap();
        assert!(valid.amount.is_nan());
    }

    #[test]
    fn parse_float_takes_longest_prefix() {
        assert_eq!(parse_float("12.5abc"), 12.5);
        assert_eq!(parse_float("  -3"), -3.0);
        assert_eq!(parse_float("\u{feff}5"), 5.0);
        assert_eq!(parse_float("\t\n 7.5"), 7.5);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("2E-2x"), 0.02);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("$12").is_nan());
    }

    #[test]
    fn parse_amount_coerces_arrays() {
        assert_eq!(parse_amount(&json!([7, 8])), 7.0);
        assert_eq!(parse_amount(&json!(["4.25"])), 4.25);
        assert!(parse_amount(&json!({ "value": 1 })).is_nan());
        assert!(parse_amount(&json!(true)).is_nan());
    }
}
