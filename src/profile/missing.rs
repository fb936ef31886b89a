//! Missing value rate calculators
//!
//! Scalar variants return missing-rows / total-rows for one column with the
//! kind-appropriate predicate; batch variants map the scalar over a column
//! list and can dump the resulting mapping as plain text.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use super::columns::{is_missing_numeric, numeric_values};

/// Missing rate of a categorical column: null rows / total rows.
pub fn missing_rate_categorical(df: &DataFrame, col: &str) -> Result<f64> {
    let column = df
        .column(col)
        .with_context(|| format!("Column '{}' not found", col))?;
    Ok(column.null_count() as f64 / df.height() as f64)
}

/// Missing rate of a numeric column: null-or-NaN rows / total rows.
pub fn missing_rate_numeric(df: &DataFrame, col: &str) -> Result<f64> {
    let values = numeric_values(df, col)?;
    let missing = values.into_iter().filter(|v| is_missing_numeric(*v)).count();
    Ok(missing as f64 / df.height() as f64)
}

/// Missing rates for a list of categorical columns, optionally dumped as
/// `name: rate` lines to `dump_path` (overwriting existing content).
pub fn missing_rates_categorical(
    df: &DataFrame,
    cols: &[String],
    dump_path: Option<&Path>,
) -> Result<Vec<(String, f64)>> {
    let mut rates = Vec::with_capacity(cols.len());
    for col in cols {
        rates.push((col.clone(), missing_rate_categorical(df, col)?));
    }
    if let Some(path) = dump_path {
        dump_missing_rates(&rates, path)?;
    }
    Ok(rates)
}

/// Missing rates for a list of numeric columns, optionally dumped as
/// `name: rate` lines to `dump_path` (overwriting existing content).
pub fn missing_rates_numeric(
    df: &DataFrame,
    cols: &[String],
    dump_path: Option<&Path>,
) -> Result<Vec<(String, f64)>> {
    let mut rates = Vec::with_capacity(cols.len());
    for col in cols {
        rates.push((col.clone(), missing_rate_numeric(df, col)?));
    }
    if let Some(path) = dump_path {
        dump_missing_rates(&rates, path)?;
    }
    Ok(rates)
}

/// Human-readable dump, one `name: rate` pair per line, overwriting any
/// existing content. Not a parseable machine format.
pub fn dump_missing_rates(rates: &[(String, f64)], path: &Path) -> Result<()> {
    let mut text = String::new();
    for (name, rate) in rates {
        text.push_str(&format!("{}: {}\n", name, rate));
    }
    fs::write(path, text)
        .with_context(|| format!("Failed to write missing rates to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_rate_counts_nan_as_missing() {
        let df = df! {
            "amount" => [Some(1.0f64), Some(f64::NAN), None, Some(4.0)],
        }
        .unwrap();

        let rate = missing_rate_numeric(&df, "amount").unwrap();
        assert!((rate - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_categorical_rate_counts_nulls_only() {
        let df = df! {
            "region" => [Some("N"), None, Some("S"), Some("E")],
        }
        .unwrap();

        let rate = missing_rate_categorical(&df, "region").unwrap();
        assert!((rate - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_column_fails() {
        let df = df! {
            "amount" => [1.0f64, 2.0],
        }
        .unwrap();

        assert!(missing_rate_numeric(&df, "nope").is_err());
        assert!(missing_rate_categorical(&df, "nope").is_err());
    }
}
