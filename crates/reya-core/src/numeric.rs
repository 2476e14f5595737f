//! Total field coercion for the flexible JSON the exchange API returns.
//!
//! Every helper here accepts "key absent", "null", and "present but
//! unparsable" uniformly and substitutes a sentinel instead of failing.

use chrono::{Local, TimeZone};
use serde_json::Value;

/// Coerce an optional JSON value to `f64`, NaN on any failure.
///
/// Accepts JSON numbers and numeric strings; everything else (missing key,
/// null, objects, arrays) becomes `f64::NAN`. Applying it to an already
/// numeric value is a no-op.
pub fn coerce_f64(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Like [`coerce_f64`] but with a 0.0 sentinel.
///
/// Used only for `depth` and `velocityMultiplier`, whose reference
/// handling zero-fills instead of keeping NaN.
pub fn coerce_f64_or_zero(value: Option<&Value>) -> f64 {
    let v = coerce_f64(value);
    if v.is_nan() {
        0.0
    } else {
        v
    }
}

/// Coerce an optional JSON value to `i64` for identifier and
/// epoch-millisecond fields.
///
/// Integral floats are truncated; fractional strings are rejected.
pub fn coerce_i64(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Format epoch milliseconds as local calendar time to second precision.
/// Returns an empty string when the timestamp is out of range.
pub fn format_epoch_ms(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_f64_numbers_and_strings() {
        assert_eq!(coerce_f64(Some(&json!(1.5))), 1.5);
        assert_eq!(coerce_f64(Some(&json!(42))), 42.0);
        assert_eq!(coerce_f64(Some(&json!("100"))), 100.0);
        assert_eq!(coerce_f64(Some(&json!(" 2.75 "))), 2.75);
        assert_eq!(coerce_f64(Some(&json!("1e3"))), 1000.0);
    }

    #[test]
    fn test_coerce_f64_failures_become_nan() {
        assert!(coerce_f64(None).is_nan());
        assert!(coerce_f64(Some(&Value::Null)).is_nan());
        assert!(coerce_f64(Some(&json!("not a number"))).is_nan());
        assert!(coerce_f64(Some(&json!({"nested": 1}))).is_nan());
        assert!(coerce_f64(Some(&json!([1, 2]))).is_nan());
    }

    #[test]
    fn test_coerce_f64_is_idempotent() {
        let once = coerce_f64(Some(&json!("3.25")));
        let twice = coerce_f64(Some(&json!(once)));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_coerce_f64_or_zero() {
        assert_eq!(coerce_f64_or_zero(Some(&json!("2"))), 2.0);
        assert_eq!(coerce_f64_or_zero(None), 0.0);
        assert_eq!(coerce_f64_or_zero(Some(&json!("garbage"))), 0.0);
        assert_eq!(coerce_f64_or_zero(Some(&Value::Null)), 0.0);
    }

    #[test]
    fn test_coerce_i64() {
        assert_eq!(coerce_i64(Some(&json!(1738000000123_i64))), Some(1738000000123));
        assert_eq!(coerce_i64(Some(&json!("1738000000123"))), Some(1738000000123));
        assert_eq!(coerce_i64(Some(&json!(12.9))), Some(12));
        assert_eq!(coerce_i64(Some(&json!("12.9"))), None);
        assert_eq!(coerce_i64(None), None);
        assert_eq!(coerce_i64(Some(&Value::Null)), None);
    }

    #[test]
    fn test_format_epoch_ms_roundtrips_via_local_time() {
        let formatted = format_epoch_ms(1_700_000_000_000);
        // Exact wall-clock depends on the local zone; shape must hold.
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[13..14], ":");
    }

    #[test]
    fn test_format_epoch_ms_out_of_range() {
        assert_eq!(format_epoch_ms(i64::MAX), "");
    }
}
