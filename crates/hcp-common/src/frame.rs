//! Polars `AnyValue` and column helpers.
//!
//! Source tables arrive with whatever dtypes the CSV reader produced, so every
//! cell read goes through these conversions rather than typed chunked arrays.

use polars::prelude::{AnyValue, Column, DataFrame};

use crate::text::normalize_header;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`; floats are printed without trailing
/// zeros so an integer-valued prescription volume reads as `"8103"`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use hcp_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(1000000001)), "1000000001");
/// assert_eq!(any_to_string(AnyValue::Float64(8103.0)), "8103");
/// assert_eq!(any_to_string(AnyValue::String("Oncology")), "Oncology");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Formats a floating-point number without trailing zeros after the decimal point.
///
/// # Examples
///
/// ```
/// use hcp_common::format_numeric;
///
/// assert_eq!(format_numeric(3000.0), "3000");
/// assert_eq!(format_numeric(1234.5), "1234.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric or null values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Finds a column whose normalized header equals `name`.
///
/// Header cells from spreadsheets often carry a BOM or stray whitespace, so
/// `" NPI  Id"` resolves to `"NPI Id"`.
pub fn find_column<'a>(df: &'a DataFrame, name: &str) -> Option<&'a Column> {
    let wanted = normalize_header(name);
    df.get_columns()
        .iter()
        .find(|column| normalize_header(column.name().as_str()) == wanted)
}

/// Reads one cell as a trimmed string; missing cells come back empty.
pub fn cell_string(column: &Column, idx: usize) -> String {
    any_to_string(column.get(idx).unwrap_or(AnyValue::Null))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn test_any_to_string_integers() {
        assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
        assert_eq!(any_to_string(AnyValue::UInt32(0)), "0");
    }

    #[test]
    fn test_any_to_string_boolean() {
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
    }

    #[test]
    fn test_format_numeric_keeps_integer_zeros() {
        assert_eq!(format_numeric(40.0), "40");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(40.50), "40.5");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Int64(500)), Some(500.0));
        assert_eq!(any_to_f64(AnyValue::String(" 2.5 ")), Some(2.5));
        assert_eq!(any_to_f64(AnyValue::String("lots")), None);
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("  "), None);
        assert_eq!(parse_f64("  1000  "), Some(1000.0));
    }

    #[test]
    fn find_column_ignores_bom_and_spacing() {
        let df = DataFrame::new(vec![
            Series::new("\u{feff}NPI  Id ".into(), vec!["1000000001"]).into_column(),
            Series::new("rx value".into(), vec![10i64]).into_column(),
        ])
        .unwrap();

        let npi = find_column(&df, "NPI Id").expect("npi column");
        assert_eq!(cell_string(npi, 0), "1000000001");
        let rx = find_column(&df, "rx value").expect("rx column");
        assert_eq!(cell_string(rx, 0), "10");
        assert!(find_column(&df, "speciality").is_none());
    }

    #[test]
    fn cell_string_out_of_range_is_empty() {
        let column = Series::new("state_code".into(), vec!["CA"]).into_column();
        assert_eq!(cell_string(&column, 5), "");
    }
}
