//! Time-window record counter

use anyhow::Result;
use polars::prelude::*;

use super::columns::numeric_values;

/// Count rows whose elapsed-time value is `<=` each threshold (inclusive).
///
/// Each count is absolute, from zero, independent of the other thresholds.
/// The output holds one entry per unique input threshold, in first-occurrence
/// order; missing elapsed values never satisfy a threshold.
pub fn count_within_windows(
    df: &DataFrame,
    elapsed_col: &str,
    thresholds: &[i64],
) -> Result<Vec<(i64, usize)>> {
    let values = numeric_values(df, elapsed_col)?;

    let mut unique: Vec<i64> = Vec::new();
    for &t in thresholds {
        if !unique.contains(&t) {
            unique.push(t);
        }
    }

    Ok(unique
        .into_iter()
        .map(|t| {
            let count = values
                .iter()
                .filter(|v| matches!(v, Some(x) if *x <= t as f64))
                .count();
            (t, count)
        })
        .collect())
}
