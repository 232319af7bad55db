use serde_json::Value;

use super::result::ValidationError;
use crate::catalog::{FieldDescriptor, ValueType};

/// Null and the empty string both count as "not provided".
pub(crate) fn is_provided(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

/// Check one provided value against its descriptor. At most one error per field.
pub(crate) fn check_value(field: &FieldDescriptor, value: &Value) -> Option<ValidationError> {
    match field.value_type {
        ValueType::Integer => match coerce_number(value) {
            Some(number) if number.fract() == 0.0 => check_bounds(field, number),
            _ => Some(type_mismatch(field, value)),
        },
        ValueType::Decimal => match coerce_number(value) {
            Some(number) => check_bounds(field, number),
            None => Some(type_mismatch(field, value)),
        },
        ValueType::Boolean => match value {
            Value::Bool(_) => None,
            _ => Some(type_mismatch(field, value)),
        },
        ValueType::Text => match value {
            Value::String(_) => None,
            _ => Some(type_mismatch(field, value)),
        },
        ValueType::Enumerated => {
            let matches = match value {
                Value::String(text) => field.options.iter().any(|option| option.value == *text),
                _ => false,
            };
            if matches {
                None
            } else {
                Some(ValidationError::InvalidEnumValue {
                    key: field.key.clone(),
                    value: render(value),
                    allowed: field.allowed_values(),
                })
            }
        }
    }
}

/// Numbers pass through; strings are accepted only when they parse to a finite
/// number as written (no trimming).
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn check_bounds(field: &FieldDescriptor, number: f64) -> Option<ValidationError> {
    let below = field.min.is_some_and(|min| number < min);
    let above = field.max.is_some_and(|max| number > max);
    if below || above {
        Some(ValidationError::RangeViolation {
            key: field.key.clone(),
            value: number,
            min: field.min,
            max: field.max,
        })
    } else {
        None
    }
}

fn type_mismatch(field: &FieldDescriptor, value: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        key: field.key.clone(),
        expected: field.value_type,
        found: render(value),
    }
}

/// Strings keep their raw text; everything else uses its JSON form.
fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bedrooms() -> FieldDescriptor {
        FieldDescriptor::integer("dormitorios", "Dormitorios")
            .required()
            .min(1.0)
            .max(10.0)
    }

    #[test]
    fn null_and_empty_string_are_not_provided() {
        assert!(!is_provided(None));
        assert!(!is_provided(Some(&Value::Null)));
        assert!(!is_provided(Some(&json!(""))));
        assert!(is_provided(Some(&json!(" "))));
        assert!(is_provided(Some(&json!(0))));
        assert!(is_provided(Some(&json!(false))));
    }

    #[test]
    fn integers_accept_whole_numbers_and_numeric_strings() {
        let field = bedrooms();
        assert_eq!(check_value(&field, &json!(3)), None);
        assert_eq!(check_value(&field, &json!(3.0)), None);
        assert_eq!(check_value(&field, &json!("4")), None);
        assert_eq!(check_value(&field, &json!("4.0")), None);
    }

    #[test]
    fn integers_reject_fractions_and_garbage() {
        let field = bedrooms();
        for value in [json!(2.5), json!("2.5"), json!("tres"), json!(true), json!([3])] {
            match check_value(&field, &value) {
                Some(ValidationError::TypeMismatch { expected, .. }) => {
                    assert_eq!(expected, ValueType::Integer)
                }
                other => panic!("expected type mismatch for {value}, got {other:?}"),
            }
        }
    }

    #[test]
    fn numeric_strings_are_not_trimmed() {
        let field = bedrooms();
        assert!(matches!(
            check_value(&field, &json!(" 3")),
            Some(ValidationError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn non_finite_strings_are_rejected() {
        let field = FieldDescriptor::decimal("area", "Área");
        for raw in ["inf", "NaN", "-infinity"] {
            assert!(matches!(
                check_value(&field, &json!(raw)),
                Some(ValidationError::TypeMismatch { .. })
            ));
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let field = bedrooms();
        assert_eq!(check_value(&field, &json!(1)), None);
        assert_eq!(check_value(&field, &json!(10)), None);
        assert!(matches!(
            check_value(&field, &json!(0)),
            Some(ValidationError::RangeViolation { .. })
        ));
        assert!(matches!(
            check_value(&field, &json!("11")),
            Some(ValidationError::RangeViolation { value, .. }) if value == 11.0
        ));
    }

    #[test]
    fn decimal_max_is_honored() {
        let field = FieldDescriptor::decimal("altura_techo", "Altura de techo")
            .min(2.0)
            .max(15.0);
        assert_eq!(check_value(&field, &json!(3.25)), None);
        assert!(matches!(
            check_value(&field, &json!(15.5)),
            Some(ValidationError::RangeViolation { .. })
        ));
    }

    #[test]
    fn booleans_are_strict() {
        let field = FieldDescriptor::boolean("garage", "Garaje");
        assert_eq!(check_value(&field, &json!(true)), None);
        assert_eq!(check_value(&field, &json!(false)), None);
        match check_value(&field, &json!("true")) {
            Some(ValidationError::TypeMismatch { found, .. }) => assert_eq!(found, "true"),
            other => panic!("expected type mismatch, got {other:?}"),
        }
        assert!(check_value(&field, &json!(1)).is_some());
    }

    #[test]
    fn text_requires_a_string() {
        let field = FieldDescriptor::text("referencia", "Referencia");
        assert_eq!(check_value(&field, &json!("junto al parque")), None);
        assert!(check_value(&field, &json!(42)).is_some());
    }

    #[test]
    fn enumerated_values_match_literals_exactly() {
        let field = FieldDescriptor::enumerated(
            "vista",
            "Vista",
            &[("exterior", "Exterior"), ("interior", "Interior")],
        );
        assert_eq!(check_value(&field, &json!("exterior")), None);
        assert!(check_value(&field, &json!("Exterior")).is_some());
        match check_value(&field, &json!(1)) {
            Some(ValidationError::InvalidEnumValue { value, allowed, .. }) => {
                assert_eq!(value, "1");
                assert_eq!(allowed, vec!["exterior", "interior"]);
            }
            other => panic!("expected invalid enum value, got {other:?}"),
        }
    }
}
