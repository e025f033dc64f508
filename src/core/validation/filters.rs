//! Reusable field filters
//!
//! These filters normalize form input before it is validated

use crate::core::field::FieldValue;

/// Filter: trim whitespace from string
pub fn trim() -> impl Fn(&str, FieldValue) -> FieldValue + Send + Sync + Clone {
    |_: &str, value: FieldValue| match value {
        FieldValue::String(s) => FieldValue::String(s.trim().to_string()),
        other => other,
    }
}

/// Filter: capitalize the first letter of every word ("luka modrić" → "Luka Modrić")
pub fn title_case() -> impl Fn(&str, FieldValue) -> FieldValue + Send + Sync + Clone {
    |_: &str, value: FieldValue| match value {
        FieldValue::String(s) => FieldValue::String(
            s.split_whitespace()
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        ),
        other => other,
    }
}

/// Filter: parse numeric text into a number, leaving unparseable text untouched
pub fn numeric() -> impl Fn(&str, FieldValue) -> FieldValue + Send + Sync + Clone {
    |_: &str, value: FieldValue| match value {
        FieldValue::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                FieldValue::Integer(i)
            } else if let Ok(f) = trimmed.parse::<f64>() {
                FieldValue::Float(f)
            } else {
                FieldValue::String(s)
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_removes_whitespace() {
        let f = trim();
        assert_eq!(f("name", FieldValue::from("  Ivo  ")), FieldValue::from("Ivo"));
        assert_eq!(f("age", FieldValue::Integer(3)), FieldValue::Integer(3));
    }

    #[test]
    fn test_title_case() {
        let f = title_case();
        assert_eq!(
            f("name", FieldValue::from("luka  modrić")),
            FieldValue::from("Luka Modrić")
        );
    }

    #[test]
    fn test_numeric_parses_ints_and_floats() {
        let f = numeric();
        assert_eq!(f("age", FieldValue::from(" 24 ")), FieldValue::Integer(24));
        assert_eq!(f("height", FieldValue::from("1.84")), FieldValue::Float(1.84));
        assert_eq!(f("age", FieldValue::from("2x")), FieldValue::from("2x"));
    }
}
