//! Reusable field validators
//!
//! These validators are attached to form fields through
//! [`FieldRules`](super::FieldRules).

use crate::core::field::FieldValue;

/// Validator: field is required (not null, not blank)
pub fn required() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &FieldValue| match value {
        FieldValue::Null => Err(format!("'{}' is required", field)),
        FieldValue::String(s) if s.trim().is_empty() => Err(format!("'{}' is required", field)),
        _ => Ok(()),
    }
}

/// Validator: string length must be within range
pub fn string_length(
    min: usize,
    max: usize,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(s) = value.as_string() {
            let len = s.chars().count();
            if len < min {
                Err(format!(
                    "'{}' must be at least {} characters (currently {})",
                    field, min, len
                ))
            } else if len > max {
                Err(format!(
                    "'{}' must be at most {} characters (currently {})",
                    field, max, len
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: number must lie within an inclusive range
pub fn number_range(
    min: f64,
    max: f64,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| match value.as_f64() {
        Some(num) if num < min || num > max => Err(format!(
            "'{}' must be between {} and {} (value: {})",
            field, min, max, num
        )),
        _ => Ok(()),
    }
}

/// Validator: value must be a whole number. Null is left to [`required`].
pub fn is_integer() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &FieldValue| match value {
        FieldValue::Integer(_) | FieldValue::Null => Ok(()),
        FieldValue::String(s) if s.trim().is_empty() => Ok(()),
        FieldValue::String(s) => Err(format!("'{}' must be a whole number (value: {})", field, s)),
        FieldValue::Float(f) => Err(format!("'{}' must be a whole number (value: {})", field, f)),
        _ => Err(format!("'{}' must be a whole number", field)),
    }
}

/// Validator: value must be in allowed list
pub fn in_list(
    allowed: Vec<String>,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(s) = value.as_string() {
            if !allowed.iter().any(|a| a == s) {
                Err(format!(
                    "'{}' must be one of {:?} (value: {})",
                    field, allowed, s
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: date must match a chrono format string
pub fn date_format(
    format: &'static str,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(s) = value.as_string() {
            match chrono::NaiveDate::parse_from_str(s, format) {
                Ok(_) => Ok(()),
                Err(_) => Err(format!(
                    "'{}' must use the format {} (value: {})",
                    field, format, s
                )),
            }
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_null_and_blank() {
        let v = required();
        assert!(v("name", &FieldValue::Null).is_err());
        assert!(v("name", &FieldValue::from("   ")).is_err());
        assert!(v("name", &FieldValue::from("Ivo")).is_ok());
        assert!(v("age", &FieldValue::Integer(0)).is_ok());
    }

    #[test]
    fn test_is_integer() {
        let v = is_integer();
        assert!(v("age", &FieldValue::Integer(24)).is_ok());
        assert!(v("age", &FieldValue::Float(24.9)).is_err());
        assert!(v("age", &FieldValue::from("twenty")).is_err());
        assert!(v("age", &FieldValue::Boolean(true)).is_err());
        assert!(v("age", &FieldValue::Null).is_ok());
    }

    #[test]
    fn test_string_length_bounds() {
        let v = string_length(2, 5);
        assert!(v("code", &FieldValue::from("a")).is_err());
        assert!(v("code", &FieldValue::from("abcdef")).is_err());
        assert!(v("code", &FieldValue::from("abc")).is_ok());
        assert!(v("code", &FieldValue::Integer(1)).is_ok());
    }

    #[test]
    fn test_string_length_counts_chars() {
        let v = string_length(1, 4);
        assert!(v("name", &FieldValue::from("Đuro")).is_ok());
    }

    #[test]
    fn test_number_range() {
        let v = number_range(15.0, 45.0);
        let err = v("age", &FieldValue::Integer(12)).unwrap_err();
        assert!(err.contains("between 15 and 45"));
        assert!(v("age", &FieldValue::Integer(15)).is_ok());
        assert!(v("age", &FieldValue::Float(45.0)).is_ok());
        assert!(v("age", &FieldValue::Null).is_ok());
    }

    #[test]
    fn test_in_list() {
        let v = in_list(vec!["Left".to_string(), "Right".to_string()]);
        assert!(v("foot", &FieldValue::from("Left")).is_ok());
        assert!(v("foot", &FieldValue::from("left")).is_err());
    }

    #[test]
    fn test_date_format() {
        let v = date_format("%Y-%m-%d");
        assert!(v("contract_until", &FieldValue::from("2027-06-30")).is_ok());
        assert!(v("contract_until", &FieldValue::from("30/06/2027")).is_err());
    }
}
