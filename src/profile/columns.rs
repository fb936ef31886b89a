//! Column value extraction and missing-value predicates
//!
//! Every statistic in this crate goes through these two accessors so that the
//! missing-value semantics stay uniform: a numeric cell is missing when it is
//! null or NaN, a categorical cell is missing when it is null. The two
//! predicates are intentionally kept separate per column kind.

use anyhow::{Context, Result};
use polars::prelude::*;

/// Extract a column as `Option<f64>` values via a non-strict cast.
///
/// Values that cannot be represented as a float (including malformed target
/// entries) become `None` and surface downstream as NaN statistics rather
/// than errors.
pub(crate) fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?;
    let cast = column
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' cannot be read as numeric", name))?;
    Ok(cast.f64()?.into_iter().collect())
}

/// Missing predicate for numeric cells: null or NaN.
pub(crate) fn is_missing_numeric(value: Option<f64>) -> bool {
    match value {
        None => true,
        Some(v) => v.is_nan(),
    }
}

/// Extract the target column as plain `f64` per row, with missing or
/// non-coercible entries mapped to NaN so they poison sums the way the
/// rate contracts require.
pub(crate) fn target_values(df: &DataFrame, target: &str) -> Result<Vec<f64>> {
    Ok(numeric_values(df, target)?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}

/// Extract a column as `Option<String>` values for categorical grouping.
///
/// `None` marks a missing cell. Non-string columns are rendered through
/// their native type so the category labels stay stable across dtypes.
pub(crate) fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?;

    let values: Vec<Option<String>> = match column.dtype() {
        DataType::String => column
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect(),
        DataType::Boolean => column
            .bool()?
            .into_iter()
            .map(|v| v.map(|b| b.to_string()))
            .collect(),
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
            let cast = column.cast(&DataType::Int64)?;
            cast.i64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
            let cast = column.cast(&DataType::UInt64)?;
            cast.u64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::Float32 | DataType::Float64 => {
            let cast = column.cast(&DataType::Float64)?;
            cast.f64()?
                .into_iter()
                .map(|v| v.map(|n| format!("{}", n)))
                .collect()
        }
        _ => {
            let cast = column.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .map(|v| v.map(|s| s.to_string()))
                .collect()
        }
    };

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_missing_predicate() {
        assert!(is_missing_numeric(None));
        assert!(is_missing_numeric(Some(f64::NAN)));
        assert!(!is_missing_numeric(Some(0.0)));
        assert!(!is_missing_numeric(Some(f64::INFINITY)));
    }

    #[test]
    fn test_string_values_from_int_column() {
        let df = df! {
            "code" => [Some(1i32), None, Some(3)],
        }
        .unwrap();

        let values = string_values(&df, "code").unwrap();
        assert_eq!(
            values,
            vec![Some("1".to_string()), None, Some("3".to_string())]
        );
    }

    #[test]
    fn test_target_values_fills_nan() {
        let df = df! {
            "target" => [Some(1i32), None, Some(0)],
        }
        .unwrap();

        let values = target_values(&df, "target").unwrap();
        assert_eq!(values[0], 1.0);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 0.0);
    }
}
