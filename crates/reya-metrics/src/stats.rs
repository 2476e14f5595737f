//! NaN-aware reducers over snapshot columns.
//!
//! Missing values travel through the pipeline as NaN; every reducer here
//! skips them. Sums and means return `None` rather than zero when no
//! value at all is present, so "no data" stays distinguishable from 0.

use crate::types::ColumnLeader;
use std::cmp::Ordering;

/// Sum of the present values; `None` when every value is missing.
pub fn nan_sum(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        if !v.is_nan() {
            sum += v;
            count += 1;
        }
    }
    (count > 0).then_some(sum)
}

/// Mean of the present values; `None` when every value is missing.
pub fn nan_mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        if !v.is_nan() {
            sum += v;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}

/// Largest present value; `None` when every value is missing.
pub fn nan_max(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}

/// Smallest present value; `None` when every value is missing.
pub fn nan_min(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            Some(m) if m <= v => Some(m),
            _ => Some(v),
        })
}

/// Population variance (divide by N) over the present values.
/// Empty input yields 0.0.
pub fn population_variance(values: &[f64]) -> f64 {
    let present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if present.is_empty() {
        return 0.0;
    }
    let mean = present.iter().sum::<f64>() / present.len() as f64;
    present.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / present.len() as f64
}

/// Sample standard deviation (ddof = 1); `None` below two present values.
pub fn sample_std(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let present: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
    if present.len() < 2 {
        return None;
    }
    let mean = present.iter().sum::<f64>() / present.len() as f64;
    let var = present.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>()
        / (present.len() - 1) as f64;
    Some(var.sqrt())
}

/// Descending comparator pushing NaN to the end; `+inf` sorts first.
pub fn cmp_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Ascending comparator pushing NaN to the end.
pub fn cmp_asc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Maximum of a column with every market tied at that maximum.
pub fn leader_max<T>(
    rows: &[T],
    symbol: impl Fn(&T) -> &str,
    key: impl Fn(&T) -> f64,
) -> Option<ColumnLeader> {
    let value = nan_max(rows.iter().map(&key))?;
    let markets = rows
        .iter()
        .filter(|r| key(r) == value)
        .map(|r| symbol(r).to_string())
        .collect();
    Some(ColumnLeader { value, markets })
}

/// Minimum of a column over strictly positive values, with ties.
pub fn leader_min_positive<T>(
    rows: &[T],
    symbol: impl Fn(&T) -> &str,
    key: impl Fn(&T) -> f64,
) -> Option<ColumnLeader> {
    let value = nan_min(rows.iter().map(&key).filter(|v| *v > 0.0))?;
    let markets = rows
        .iter()
        .filter(|r| key(r) == value)
        .map(|r| symbol(r).to_string())
        .collect();
    Some(ColumnLeader { value, markets })
}
